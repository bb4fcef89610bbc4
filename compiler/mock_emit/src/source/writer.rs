//! Indentation-aware line writer.

const INDENT: &str = "    ";

/// Builds source text line by line at the current indentation level.
#[derive(Default)]
pub(crate) struct CodeWriter {
    buffer: String,
    depth: usize,
}

impl CodeWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Write `text` as one indented line.
    pub(crate) fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Write `{` and indent.
    pub(crate) fn open(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    /// Dedent and write `}`.
    pub(crate) fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    pub(crate) fn output(self) -> String {
        self.buffer
    }
}
