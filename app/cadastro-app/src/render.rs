//! Plain-text and JSON rendering of the form screen.

use crate::error::Result as AppErrorResult;

use cadastro_config::UiConfig;
use cadastro_core::{FieldKind, FormView, UserRecord};

const LIST_TITLE: &str = "Usuários Cadastrados";
const DIALOG_TEXT: &str = "Deseja excluir este usuário?";
const LABEL_WIDTH: usize = 10;

/// How much room the screen has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: usize,
    pub compact: bool,
}

impl Layout {
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            width: usize::from(ui.width),
            compact: ui.is_compact(ui.width),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

pub fn render_text(view: &FormView, layout: &Layout) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(layout.width));
    lines.push(view.mode.title().to_string());
    lines.push(rule(layout));
    for kind in FieldKind::ALL {
        lines.push(field_line(kind, view.fields.get(kind)));
    }
    lines.push(format!("[ {} ]", view.mode.submit_label()));

    separator(&mut lines, layout);
    lines.push(LIST_TITLE.to_string());
    lines.push(rule(layout));
    for record in &view.records {
        record_lines(&mut lines, record, layout);
    }

    if view.dialog_visible {
        separator(&mut lines, layout);
        lines.push(format!("+{}+", "-".repeat(layout.width.saturating_sub(2))));
        match view.pending_delete {
            Some(id) => lines.push(format!("{} ({})", DIALOG_TEXT, id)),
            None => lines.push(DIALOG_TEXT.to_string()),
        }
        lines.push("[confirm] Confirmar   [cancel] Cancelar".to_string());
        lines.push(format!("+{}+", "-".repeat(layout.width.saturating_sub(2))));
    }

    lines.join("\n")
}

pub fn render_json(view: &FormView, pretty: bool) -> AppErrorResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(view)?
    } else {
        serde_json::to_string(view)?
    };
    Ok(json)
}

/// A one-key JSON object such as `{"error": "..."}`, so JSON output stays
/// one parseable document per screen.
pub fn render_json_message(key: &str, text: &str, pretty: bool) -> AppErrorResult<String> {
    let mut message = serde_json::Map::new();
    message.insert(key.to_string(), serde_json::Value::from(text));
    let json = if pretty {
        serde_json::to_string_pretty(&message)?
    } else {
        serde_json::to_string(&message)?
    };
    Ok(json)
}

fn rule(layout: &Layout) -> String {
    let width = if layout.compact {
        layout.width / 2
    } else {
        layout.width
    };
    "-".repeat(width)
}

fn separator(lines: &mut Vec<String>, layout: &Layout) {
    if !layout.compact {
        lines.push(String::new());
    }
}

fn field_line(kind: FieldKind, value: &str) -> String {
    let label = format!("{}:", kind.label());
    if value.is_empty() {
        format!("{:<LABEL_WIDTH$}<{}>", label, kind.label())
    } else {
        format!("{:<LABEL_WIDTH$}{}", label, value)
    }
}

fn record_lines(lines: &mut Vec<String>, record: &UserRecord, layout: &Layout) {
    let id = record.id.get();

    if layout.compact {
        lines.push(format!(
            "{} {} | {} | {} | {}",
            record.id, record.name, record.phone, record.email, record.cpf
        ));
        lines.push(format!("   [edit {id}] [delete {id}]"));
        return;
    }

    lines.push(format!("{} {}", record.id, record.name));
    lines.push(format!("   {}", record.phone));
    lines.push(format!("   {}", record.email));
    lines.push(format!("   {}", record.cpf));
    lines.push(format!("   [edit {id}] [delete {id}]"));
    lines.push(String::new());
}
