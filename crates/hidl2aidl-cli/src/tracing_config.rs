//! Diagnostic logging for a translation run.
//!
//! Diagnostics are separate from `conversion.log`, which always records what
//! was translated. They are off unless `HIDL2AIDL_LOG` (or, failing that,
//! `RUST_LOG`) holds a filter, and always go to stderr.
//! `HIDL2AIDL_LOG_FORMAT` picks the layout: `text` (default), `tree` for
//! indented spans per declaration, or `json` for one object per event.
//!
//! ```bash
//! HIDL2AIDL_LOG=hidl2aidl_emitter=debug HIDL2AIDL_LOG_FORMAT=tree \
//!     hidl2aidl -o out -m models android.hardware.foo@1.1
//! ```

use std::io::IsTerminal;

use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "HIDL2AIDL_LOG";
const FORMAT_VAR: &str = "HIDL2AIDL_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unrecognized values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// `None` when no filter is configured, which leaves logging off.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = lookup(LOG_VAR).or_else(|| lookup("RUST_LOG"))?;
        let format = lookup(FORMAT_VAR)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        Some(LogSettings { directives, format })
    }

    fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

/// A dispatcher writing `settings.format` records to `writer`.
pub fn dispatch<W>(settings: &LogSettings, ansi: bool, writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::builder().parse_lossy(&settings.directives);
    let registry = Registry::default().with(filter);
    match settings.format {
        LogFormat::Text => {
            Dispatch::new(registry.with(fmt::layer().with_ansi(ansi).with_writer(writer)))
        }
        LogFormat::Tree => Dispatch::new(
            registry.with(
                tracing_tree::HierarchicalLayer::default()
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true),
            ),
        ),
        LogFormat::Json => Dispatch::new(registry.with(fmt::layer().json().with_writer(writer))),
    }
}

/// Install the global dispatcher when a filter is configured.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let ansi = std::io::stderr().is_terminal();
    if tracing::dispatcher::set_global_default(dispatch(&settings, ansi, std::io::stderr)).is_err()
    {
        tracing::warn!("a tracing dispatcher was already installed");
    }
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tests;
