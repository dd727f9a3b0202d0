use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::models::{Config, Locale};

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Command {
    /// interactive card in the terminal
    View,
    /// print the card markup to stdout
    Html,
}

#[derive(Parser, Debug, Default)]
#[command(about = concat!(env!("CARGO_CRATE_NAME"), " - a post card with local comments"))]
pub struct Flags {
    #[arg(default_value = None)]
    pub command: Option<Command>,

    /// post document (JSON); the built-in sample is shown without it
    #[arg(long, value_name = "FILE")]
    pub post: Option<PathBuf>,

    #[arg(long)]
    pub locale: Option<Locale>,
}

impl Flags {
    /// Parse from `std::env::args_os()`, [exit][clap::Error::exit] on error.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Check if the command is "html"
    pub fn html(&self) -> bool {
        matches!(self.command, Some(Command::Html))
    }

    /// Command line values win over the config file.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(post) = &self.post {
            config.post = Some(post.clone());
        }
    }
}
