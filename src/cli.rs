//! Command-line argument parsing for the keypad driver
//!
//! Supports:
//! - Pre-filling the buffer
//! - Running one line of keys non-interactively
//! - Starting with the confirm button disabled

use clap::Parser;

/// Amount keypad for the terminal
#[derive(Parser, Debug)]
#[command(name = "amountpad", version, about = "Amount entry keypad")]
pub struct CliArgs {
    /// Initial buffer text (filtered like typed input)
    #[arg(short = 't', long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Run this line of keys and exit, e.g. "12.5<enter>"
    #[arg(short = 'k', long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// Start with the confirm button disabled
    #[arg(long)]
    pub no_affirm: bool,

    /// Print the buffer after every line
    #[arg(short = 'e', long)]
    pub echo: bool,

    /// Don't write the rolling log file
    #[arg(long)]
    pub no_log_file: bool,
}

/// How the driver reads keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Read lines from stdin until Quit or EOF
    Interactive,
    /// Run one line and exit
    Script(String),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: InputMode,
    pub initial_text: Option<String>,
    /// Some(false) when --no-affirm was given, None to use the config file
    pub affirm_enabled: Option<bool>,
    pub echo: bool,
    pub file_logging: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> StartupConfig {
        let mode = match self.keys {
            Some(keys) => InputMode::Script(keys),
            None => InputMode::Interactive,
        };

        StartupConfig {
            mode,
            initial_text: self.text,
            affirm_enabled: self.no_affirm.then_some(false),
            echo: self.echo,
            file_logging: !self.no_log_file,
        }
    }
}
