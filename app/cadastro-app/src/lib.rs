//! cadastro - terminal front end for the user registration form
//!
//! Reads one command per line, applies it to the form and redraws the
//! screen after every command.

pub mod cli;
pub mod command;
pub mod error;
pub mod logger;
pub mod render;
pub mod session;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::{AppError, Result as AppResult};
pub use render::Layout;
pub use session::{OutputMode, Session, Step};
