//! Indentation-aware text buffer shared by the file emitter.

/// Accumulates output text, applying the current indentation at the start
/// of every non-empty line.
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_level: usize,
    indent_width: usize,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn with_capacity(capacity: usize, indent_width: usize) -> Self {
        SourceWriter {
            output: String::with_capacity(capacity),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Write text; embedded `\n` characters start new indented lines.
    pub fn write(&mut self, text: &str) {
        let mut segments = text.split('\n');
        if let Some(first) = segments.next() {
            self.write_segment(first);
        }
        for segment in segments {
            self.write_line();
            self.write_segment(segment);
        }
    }

    fn write_segment(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }
        if self.at_line_start {
            let column = self.indent_column();
            self.output.extend(std::iter::repeat_n(' ', column));
            self.at_line_start = false;
        }
        self.output.push_str(segment);
    }

    pub fn write_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write `text` followed by a newline.
    pub fn line(&mut self, text: &str) {
        self.write(text);
        self.write_line();
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        debug_assert!(self.indent_level > 0, "unbalanced indentation");
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Column at which the next line's text starts.
    pub fn indent_column(&self) -> usize {
        self.indent_level * self.indent_width
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indents_non_empty_lines_only() {
        let mut writer = SourceWriter::with_capacity(64, 4);
        writer.line("interface IFoo {");
        writer.increase_indent();
        writer.line("void a();");
        writer.write_line();
        writer.line("void b();");
        writer.decrease_indent();
        writer.line("}");
        assert_eq!(
            writer.finish(),
            "interface IFoo {\n    void a();\n\n    void b();\n}\n"
        );
    }

    #[test]
    fn test_embedded_newlines_keep_indentation() {
        let mut writer = SourceWriter::with_capacity(64, 2);
        writer.increase_indent();
        writer.line("a\nb");
        assert_eq!(writer.indent_column(), 2);
        assert_eq!(writer.finish(), "  a\n  b\n");
    }
}
