//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! buffer transitions on the keypad.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=buffer=debug,message=debug` - scoped filtering
//! - `RUST_LOG=amountpad::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/amountpad/logs/amountpad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::AmountState;
use crate::model::KeypadModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so stdout stays reserved for affirmed amounts.
/// Pass `file_logging = false` to skip the rolling log file.
pub fn init(file_logging: bool) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = if file_logging {
        match crate::config::ensure_logs_dir() {
            Ok(logs_dir) => {
                let file_appender = tracing_appender::rolling::daily(logs_dir, "amountpad.log");
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of keypad state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    pub text: String,
    pub state: AmountState,
    pub affirm_enabled: bool,
}

impl BufferSnapshot {
    pub fn from_model(model: &KeypadModel) -> Self {
        Self {
            text: model.text().to_string(),
            state: model.buffer.state(),
            affirm_enabled: model.affirm_enabled,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &BufferSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.text != other.text {
            changes.push(format!("text: {:?} → {:?}", self.text, other.text));
        }
        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        if self.affirm_enabled != other.affirm_enabled {
            let status = if other.affirm_enabled {
                "enabled"
            } else {
                "disabled"
            };
            changes.push(format!("confirm {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
