/// Byte-level reader over the source.
///
/// Holds the position of the byte under examination, the position of the next
/// byte to read, and the byte itself. `current` is `None` once the input is
/// exhausted.
pub struct Cursor<'src> {
    source: &'src [u8],
    position: usize,
    read_position: usize,
    current: Option<u8>,
}

impl<'src> Cursor<'src> {
    /// Create a cursor primed on the first byte of `source`.
    pub fn new(source: &'src [u8]) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            read_position: 0,
            current: None,
        };
        cursor.advance();
        cursor
    }

    /// The byte at `position`, or `None` past the end.
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// Byte offset of the current byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to the next byte. Stays put once the end has been reached.
    pub fn advance(&mut self) {
        if self.read_position > self.source.len() {
            return;
        }
        self.current = self.source.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Advance while `pred` holds for the current byte.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current.is_some_and(&pred) {
            self.advance();
        }
    }

    /// Source bytes from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        &self.source[start..self.position]
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }
}
