use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

use hidl2aidl_emitter::EmitOptions;

use crate::args::CliArgs;

/// Emitter options read from `--config`. Absent keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub max_line_length: Option<usize>,
    #[serde(default)]
    pub header_comment: Option<String>,
    #[serde(default)]
    pub indent_width: Option<usize>,
}

impl ConfigFile {
    pub fn apply(&self, options: &mut EmitOptions) {
        if let Some(max_line_length) = self.max_line_length {
            options.max_line_length = max_line_length;
        }
        if let Some(header_comment) = &self.header_comment {
            options.header_comment = header_comment.clone();
        }
        if let Some(indent_width) = self.indent_width {
            options.indent_width = indent_width;
        }
    }
}

pub fn parse_config(source: &str) -> Result<ConfigFile> {
    serde_json::from_str(source).context("failed to parse config JSON")
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("invalid config: {}", path.display()))
}

/// Defaults, then the config file, then command-line flags.
pub fn resolve_options(args: &CliArgs) -> Result<EmitOptions> {
    let mut options = EmitOptions::default();

    if let Some(path) = &args.config {
        load_config(path)?.apply(&mut options);
    }

    ConfigFile {
        max_line_length: args.max_line_length,
        header_comment: args.header_comment.clone(),
        indent_width: args.indent_width,
    }
    .apply(&mut options);

    if options.max_line_length == 0 {
        bail!("maxLineLength must be greater than zero");
    }
    if options.indent_width == 0 {
        bail!("indentWidth must be greater than zero");
    }
    Ok(options)
}
