//! Width-bounded line printer with atomic groups.
//!
//! Callers write unbreakable prefix text, then submit groups (one rendered
//! parameter plus its trailing separator each). Between groups the printer
//! either emits a single space or breaks to an indented continuation line,
//! whichever keeps the line within `max_width`. A group is never split, so a
//! group longer than the limit ends up alone on its own line.
//!
//! ```text
//! void setConfiguration(in int mode, in String name,
//!         in android.hardware.foo.Options options);
//! ```

#[derive(Debug)]
pub struct WrappedLinePrinter {
    max_width: usize,
    /// Column the first line starts at (the caller's indentation).
    start_column: usize,
    /// Extra indentation for continuation lines, relative to `start_column`.
    continuation_indent: usize,
    lines: Vec<String>,
    current: String,
    groups: usize,
}

impl WrappedLinePrinter {
    pub const DEFAULT_CONTINUATION_INDENT: usize = 8;

    pub fn new(max_width: usize) -> Self {
        WrappedLinePrinter {
            max_width,
            start_column: 0,
            continuation_indent: Self::DEFAULT_CONTINUATION_INDENT,
            lines: Vec::new(),
            current: String::new(),
            groups: 0,
        }
    }

    pub fn with_start_column(mut self, column: usize) -> Self {
        self.start_column = column;
        self
    }

    pub fn with_continuation_indent(mut self, indent: usize) -> Self {
        self.continuation_indent = indent;
        self
    }

    /// Append text to the current line without any wrapping decision.
    pub fn write(&mut self, text: &str) {
        self.current.push_str(text);
    }

    /// Column at the end of the current line.
    fn column(&self) -> usize {
        self.start_column + self.current.chars().count()
    }

    /// Submit one atomic unit.
    pub fn group(&mut self, text: &str) {
        if self.groups > 0 {
            let width = text.chars().count();
            if self.column() + 1 + width > self.max_width {
                tracing::trace!(
                    column = self.column(),
                    width,
                    max_width = self.max_width,
                    "wrapping group"
                );
                let finished = std::mem::take(&mut self.current);
                self.lines.push(finished);
                self.current
                    .extend(std::iter::repeat_n(' ', self.continuation_indent));
            } else {
                self.current.push(' ');
            }
        }
        self.current.push_str(text);
        self.groups += 1;
    }

    /// The rendered lines, relative to `start_column`.
    pub fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() || self.lines.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}

#[cfg(test)]
#[path = "tests/wrapped_printer_tests.rs"]
mod tests;
