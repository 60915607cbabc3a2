use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "terminote")]
#[command(version = "0.1.0")]
#[command(about = "A minimal terminal note-taking editor")]
pub struct CliArgs {
    /// Directory holding the notes (default: ~/.terminote/notes)
    #[arg(long, short = 'd')]
    pub notes_dir: Option<PathBuf>,

    /// Config file to use instead of the default locations
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of spaces inserted by Tab
    #[arg(long, short = 't')]
    pub tab_width: Option<usize>,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
