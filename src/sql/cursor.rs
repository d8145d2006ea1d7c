use super::token::Location;

/// Scan position: a byte offset into the source plus its human-readable location.
///
/// Cursors are `Copy`; a strategy works on its own copy and hands it back only
/// on success, so a declined attempt never moves the caller's position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub pointer: usize,
    pub loc: Location,
}

impl Cursor {
    pub fn is_at_end(&self, source: &str) -> bool {
        self.pointer >= source.len()
    }

    pub fn current(&self, source: &str) -> Option<u8> {
        source.as_bytes().get(self.pointer).copied()
    }

    pub fn peek(&self, source: &str) -> Option<u8> {
        source.as_bytes().get(self.pointer + 1).copied()
    }

    /// Consumes `n` characters on the current line.
    pub fn advance(&mut self, n: usize) {
        self.pointer += n;
        self.loc.col += n;
    }

    /// Consumes a newline.
    pub fn newline(&mut self) {
        self.pointer += 1;
        self.loc.line += 1;
        self.loc.col = 0;
    }
}
