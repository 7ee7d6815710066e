use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cadastro")]
#[command(about = "User registration form for the terminal")]
#[command(version)]
pub struct Cli {
    /// Read commands from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Print each screen as a JSON snapshot instead of text
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,

    /// Screen width in columns (overrides ui.width)
    #[arg(long)]
    pub width: Option<u16>,
}
