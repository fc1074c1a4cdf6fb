//! Doc comments attached to declarations, methods and fields.

use std::fmt;

/// Source provenance for a doc comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const GENERATED_FILE: &'static str = "<generated>";

    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Location {
            file: file.into(),
            line,
            column,
        }
    }

    /// Provenance for text the translator synthesized itself.
    pub fn generated() -> Self {
        Location::new(Self::GENERATED_FILE, 0, 0)
    }

    pub fn is_generated(&self) -> bool {
        self.file == Self::GENERATED_FILE
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A doc comment as an ordered sequence of sanitized lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    lines: Vec<String>,
    location: Location,
}

impl DocComment {
    /// Parse raw comment text (without the `/**` and `*/` delimiters).
    ///
    /// Each line loses its leading whitespace, one leading `*` and one space
    /// after it, and any trailing whitespace. Blank lines before the first
    /// non-blank line are dropped.
    pub fn parse(text: &str, location: Location) -> Self {
        let mut lines = Vec::new();
        let mut found_first_line = false;

        for line in text.trim().split('\n') {
            let stripped = line.trim_start();
            let stripped = stripped.strip_prefix('*').unwrap_or(stripped);
            let stripped = stripped.strip_prefix(' ').unwrap_or(stripped);
            let sanitized = stripped.trim_end();

            found_first_line = found_first_line || !sanitized.is_empty();
            if !found_first_line {
                continue;
            }
            lines.push(sanitized.to_string());
        }

        DocComment { lines, location }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Render as a `/** ... */` block, one output line per element.
    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.lines.len() + 2);
        out.push("/**".to_string());
        for line in &self.lines {
            if line.is_empty() {
                out.push(" *".to_string());
            } else {
                out.push(format!(" * {line}"));
            }
        }
        out.push(" */".to_string());
        out
    }
}
