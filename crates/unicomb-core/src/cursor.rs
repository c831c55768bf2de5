/// A position inside a borrowed text.
///
/// The position is tracked twice: as a byte offset, used for slicing, and as a
/// count of unicode scalars, which is what callers observe. A cursor is `Copy`;
/// duplicating one for backtracking shares the text and never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            position: 0,
        }
    }

    /// Places a cursor `position` scalars into `source`.
    ///
    /// Panics if `source` holds fewer than `position` scalars.
    pub fn at(source: &'a str, position: usize) -> Self {
        let mut cursor = Self::new(source);
        while cursor.position < position {
            match cursor.next_char() {
                Some((_, next)) => cursor = next,
                None => panic!(
                    "scalar offset {} is out of range for a text of {} scalars.",
                    position, cursor.position
                ),
            }
        }
        cursor
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Scalars consumed since the start of the text.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    pub fn is_empty(&self) -> bool {
        self.offset == self.source.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Splits off the next scalar, returning it with the cursor just past it.
    pub fn next_char(self) -> Option<(char, Self)> {
        let c = self.peek()?;
        Some((
            c,
            Self {
                offset: self.offset + c.len_utf8(),
                position: self.position + 1,
                ..self
            },
        ))
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Moves past `prefix`, which has to be at the start of the remaining text.
    pub fn advance_str(self, prefix: &str) -> Self {
        assert!(
            self.starts_with(prefix),
            "the cursor does not continue with {:?}.",
            prefix
        );

        Self {
            offset: self.offset + prefix.len(),
            position: self.position + prefix.chars().count(),
            ..self
        }
    }

    /// Moves past the longest run of scalars satisfying `predicate`.
    pub fn advance_while(self, mut predicate: impl FnMut(char) -> bool) -> Self {
        let mut cursor = self;
        while let Some((c, next)) = cursor.next_char() {
            if !predicate(c) {
                break;
            }
            cursor = next;
        }
        cursor
    }

    pub fn anchor(&self) -> Anchor<'a> {
        Anchor { cursor: *self }
    }

    pub fn rewind(self, anchor: Anchor<'a>) -> Self {
        self.check_anchor(&anchor);
        anchor.cursor
    }

    /// The text between `anchor` and this cursor.
    pub fn consumed_since(&self, anchor: &Anchor<'a>) -> &'a str {
        self.check_anchor(anchor);
        &self.source[anchor.cursor.offset..self.offset]
    }

    fn check_anchor(&self, anchor: &Anchor<'a>) {
        if !std::ptr::eq(self.source, anchor.cursor.source) {
            panic!("the anchor is not an anchor of this cursor.")
        }
    }
}

/// A saved cursor to backtrack to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Anchor<'a> {
    pub fn position(&self) -> usize {
        self.cursor.position
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mockalloc::Mockalloc;

    #[global_allocator]
    static ALLOCATOR: Mockalloc<std::alloc::System> = Mockalloc(std::alloc::System);

    #[test]
    fn copy_and_rewind_never_allocate() {
        let text = String::from("héllo, wörld");

        let info = mockalloc::record_allocs(|| {
            let cursor = Cursor::new(&text);
            let anchor = cursor.anchor();
            let moved = cursor.advance_while(|c| c != ',');
            let copy = moved;

            assert_eq!(copy.position(), 5);
            assert_eq!(moved.rewind(anchor), cursor);
        });

        assert_eq!(info.num_allocs(), 0);
    }

    #[test]
    fn positions_count_scalars_not_bytes() {
        let cursor = Cursor::at("héllo", 2);

        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.byte_offset(), 3);
        assert_eq!(cursor.remaining(), "llo");
    }

    #[test]
    fn next_char_splits_one_scalar() {
        let (c, rest) = Cursor::new("ö!").next_char().unwrap();

        assert_eq!(c, 'ö');
        assert_eq!(rest.remaining(), "!");
        assert_eq!(rest.position(), 1);
        assert!(Cursor::new("").next_char().is_none());
    }

    #[test]
    fn advance_str_counts_prefix_scalars() {
        let cursor = Cursor::new("→→x").advance_str("→→");

        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn consumed_since_returns_text_between_anchor_and_cursor() {
        let cursor = Cursor::new("key = value");
        let anchor = cursor.anchor();
        let moved = cursor.advance_while(|c| c.is_alphabetic());

        assert_eq!(moved.consumed_since(&anchor), "key");
        assert_eq!(anchor.position(), 0);
    }

    #[test]
    fn cursor_at_end_is_empty() {
        let cursor = Cursor::at("ab", 2);

        assert!(cursor.is_empty());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    #[should_panic]
    fn cursor_at_past_end_panics() {
        Cursor::at("ab", 3);
    }

    #[test]
    #[should_panic]
    fn rewind_to_foreign_anchor_panics() {
        let first = String::from("first");
        let second = String::from("second");
        let anchor = Cursor::new(&first).anchor();

        Cursor::new(&second).rewind(anchor);
    }
}
