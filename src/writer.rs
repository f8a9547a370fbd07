//! Indentation-aware text sink for source rendering.

const INDENT: &str = "    ";

/// A text sink tracking indentation depth and line-start status.
///
/// The indentation prefix is written lazily with the first write on a line,
/// so a pure blank line never carries trailing spaces.
#[derive(Debug)]
pub(crate) struct SourceWriter {
    out: String,
    indentation: usize,
    at_line_start: bool,
}

impl SourceWriter {
    pub(crate) fn new() -> Self {
        SourceWriter {
            out: String::new(),
            indentation: 0,
            at_line_start: true,
        }
    }

    pub(crate) fn write(&mut self, text: &str) {
        if self.at_line_start {
            self.at_line_start = false;
            for _ in 0..self.indentation {
                self.out.push_str(INDENT);
            }
        }
        self.out.push_str(text);
    }

    pub(crate) fn write_newline(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
    }

    pub(crate) fn write_line(&mut self, text: &str) {
        self.write(text);
        self.write_newline();
    }

    /// Must stay paired with [`SourceWriter::dedent`].
    pub(crate) fn indent(&mut self) {
        self.indentation += 1;
    }

    pub(crate) fn dedent(&mut self) {
        self.indentation -= 1;
    }

    /// Renders each item via `render`, inserting `", "` between items and
    /// never around them.
    pub(crate) fn comma_join<T, E>(
        &mut self,
        items: &[T],
        mut render: impl FnMut(&mut Self, &T) -> Result<(), E>,
    ) -> Result<(), E> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            render(self, item)?;
        }
        Ok(())
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }
}
