use crate::Layout;
use crate::render::{render_json, render_text};

use cadastro_core::{FieldKind, FormState};
use googletest::assert_that;
use googletest::prelude::{contains_substring, not};

const WIDE: Layout = Layout {
    width: 40,
    compact: false,
};

const NARROW: Layout = Layout {
    width: 30,
    compact: true,
};

fn state_with_ana() -> FormState {
    let mut state = FormState::new();
    state.set_field(FieldKind::Name, "Ana");
    state.set_field(FieldKind::Phone, "11987654321");
    state.set_field(FieldKind::Email, "ana@example.com");
    state.set_field(FieldKind::Cpf, "12345678901");
    state.submit();
    state
}

#[test]
fn given_empty_form_when_rendered_then_create_title_and_placeholders() {
    let text = render_text(&FormState::new().view(), &WIDE);

    assert_that!(text, contains_substring("Cadastrar Usuário"));
    assert_that!(text, contains_substring("<Telefone>"));
    assert_that!(text, contains_substring("[ Cadastrar ]"));
    assert_that!(text, contains_substring("Usuários Cadastrados"));
}

#[test]
fn given_record_when_rendered_then_formatted_values_listed() {
    let text = render_text(&state_with_ana().view(), &WIDE);

    assert_that!(text, contains_substring("#1 Ana"));
    assert_that!(text, contains_substring("   (11) 98765-4321"));
    assert_that!(text, contains_substring("   123.456.789-01"));
    assert_that!(text, contains_substring("[edit 1] [delete 1]"));
}

#[test]
fn given_edit_mode_when_rendered_then_edit_title_and_update_label() {
    let mut state = state_with_ana();
    let id = state.store().records()[0].id;
    state.begin_edit(id);

    let text = render_text(&state.view(), &WIDE);

    assert_that!(text, contains_substring("Editar Usuário"));
    assert_that!(text, contains_substring("[ Atualizar ]"));
    assert_that!(text, contains_substring("Nome:     Ana"));
}

#[test]
fn given_pending_delete_when_rendered_then_dialog_shown() {
    let mut state = state_with_ana();
    let id = state.store().records()[0].id;

    let before = render_text(&state.view(), &WIDE);
    state.request_delete(id);
    let after = render_text(&state.view(), &WIDE);

    assert_that!(before, not(contains_substring("Deseja excluir")));
    assert_that!(after, contains_substring("Deseja excluir este usuário? (#1)"));
    assert_that!(after, contains_substring("[confirm] Confirmar"));
}

#[test]
fn given_compact_layout_when_rendered_then_record_on_one_line() {
    let text = render_text(&state_with_ana().view(), &NARROW);

    assert_that!(
        text,
        contains_substring("#1 Ana | (11) 98765-4321 | ana@example.com | 123.456.789-01")
    );
    assert!(!text.contains("\n\n"));
}

#[test]
fn given_view_when_rendered_as_json_then_parses_back() {
    let json = render_json(&state_with_ana().view(), false).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["mode"], "create");
    assert_eq!(value["records"][0]["phone"], "(11) 98765-4321");
    assert!(!json.contains('\n'));
}

#[test]
fn given_pretty_flag_when_rendered_as_json_then_multiline() {
    let json = render_json(&FormState::new().view(), true).unwrap();

    assert!(json.contains('\n'));
}
