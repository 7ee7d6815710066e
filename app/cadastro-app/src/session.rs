use crate::command::{Command, HELP};
use crate::error::Result as AppErrorResult;
use crate::render::{self, Layout};

use std::io::{BufRead, Write};
use std::str::FromStr;

use cadastro_core::{ActionOutcome, FormState, SubmitOutcome};
use log::{debug, info, warn};

/// How each screen is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text(Layout),
    Json { pretty: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Redraw,
    ShowHelp,
    Quit,
}

/// One running form: the state plus the way it is drawn.
pub struct Session {
    state: FormState,
    output: OutputMode,
}

impl Session {
    pub fn new(output: OutputMode) -> Self {
        Self {
            state: FormState::new(),
            output,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Parse one input line and apply it to the form.
    pub fn handle_line(&mut self, line: &str) -> AppErrorResult<Step> {
        let command = Command::from_str(line)?;

        match command {
            Command::Quit => return Ok(Step::Quit),
            Command::Help => return Ok(Step::ShowHelp),
            _ => {}
        }

        if let Some(action) = command.into_action() {
            let outcome = self.state.apply(action);
            log_outcome(&outcome);
        }

        Ok(Step::Redraw)
    }

    pub fn render(&self) -> AppErrorResult<String> {
        let view = self.state.view();
        match self.output {
            OutputMode::Text(layout) => Ok(render::render_text(&view, &layout)),
            OutputMode::Json { pretty } => render::render_json(&view, pretty),
        }
    }

    /// Help text or an error, in the session's output format.
    fn render_message(&self, key: &str, text: &str) -> AppErrorResult<String> {
        match self.output {
            OutputMode::Text(_) if key == "error" => Ok(format!("error: {}", text)),
            OutputMode::Text(_) => Ok(text.to_string()),
            OutputMode::Json { pretty } => render::render_json_message(key, text, pretty),
        }
    }

    /// Run until `quit` or end of input.
    ///
    /// Blank lines and lines starting with `//` are skipped. A bad command
    /// prints an error and the loop carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> AppErrorResult<()> {
        writeln!(out, "{}", self.render()?)?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            match self.handle_line(&line) {
                Ok(Step::Quit) => {
                    info!("Quit requested");
                    break;
                }
                Ok(Step::ShowHelp) => writeln!(out, "{}", self.render_message("help", HELP)?)?,
                Ok(Step::Redraw) => writeln!(out, "{}", self.render()?)?,
                Err(e) => {
                    warn!("Rejected input '{}': {}", trimmed, e);
                    debug!("{:?}", e);
                    writeln!(out, "{}", self.render_message("error", &e.to_string())?)?;
                }
            }
            out.flush()?;
        }

        Ok(())
    }
}

fn log_outcome(outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Submitted(SubmitOutcome::Rejected(reason)) => {
            info!("Submit ignored: {}", reason)
        }
        ActionOutcome::EditStarted(false) => info!("Edit ignored: unknown user"),
        ActionOutcome::DeleteRequested(false) => info!("Delete ignored: unknown user"),
        ActionOutcome::Deleted(None) => info!("Confirm ignored: nothing pending"),
        _ => {}
    }
}
