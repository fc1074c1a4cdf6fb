/// Formatting options for emitted AIDL files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Column limit for wrapped method signatures.
    pub max_line_length: usize,
    /// Comment placed at the top of every file, without a trailing newline.
    pub header_comment: String,
    /// Spaces per indentation level.
    pub indent_width: usize,
}

impl EmitOptions {
    pub const DEFAULT_MAX_LINE_LENGTH: usize = 100;
    pub const DEFAULT_HEADER_COMMENT: &'static str = "// FIXME: license file if you have one";
    pub const DEFAULT_INDENT_WIDTH: usize = 4;

    /// Wrapped signature lines are indented two levels past the body.
    pub fn continuation_indent(&self) -> usize {
        self.indent_width * 2
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            max_line_length: Self::DEFAULT_MAX_LINE_LENGTH,
            header_comment: Self::DEFAULT_HEADER_COMMENT.to_string(),
            indent_width: Self::DEFAULT_INDENT_WIDTH,
        }
    }
}
