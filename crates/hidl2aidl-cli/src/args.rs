use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the hidl2aidl binary.
#[derive(Parser, Debug)]
#[command(
    name = "hidl2aidl",
    version,
    about = "Translate versioned HIDL interfaces into flat AIDL interfaces"
)]
pub struct CliArgs {
    /// Directory the generated .aidl files and conversion.log are written to.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: PathBuf,

    /// JSON package model, or a directory searched recursively for them.
    #[arg(short = 'm', long = "model", value_name = "PATH", required = true)]
    pub models: Vec<PathBuf>,

    /// JSON file with emitter options (maxLineLength, headerComment, indentWidth).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum line length before method signatures wrap.
    #[arg(long = "max-line-length", value_name = "COLUMNS")]
    pub max_line_length: Option<usize>,

    /// Comment placed at the top of every generated file. Empty omits it.
    #[arg(long = "header-comment", value_name = "TEXT")]
    pub header_comment: Option<String>,

    /// Spaces per indentation level inside declarations.
    #[arg(long = "indent-width", value_name = "SPACES")]
    pub indent_width: Option<usize>,

    /// Number of worker threads (defaults to the number of CPUs).
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Fully-qualified type names, or package@version to translate a whole package.
    #[arg(value_name = "FQNAME", required = true)]
    pub targets: Vec<String>,
}
