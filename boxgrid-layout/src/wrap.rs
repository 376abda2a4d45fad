//! Line breaking.
//!
//! [`LineBreaker`] walks one row and hands out lines on demand, each bounded
//! by a width chosen per call. [`wrap`] drives it with a fixed width over a
//! whole grid; inline text runs drive it directly so the first line can be
//! shorter than the rest.
//!
//! In word mode a space at a line boundary is consumed: it ends one line
//! and is not repeated at the start of the next.

use boxgrid_core::{CharacterGrid, LayoutError, WordWrap};

const SPACE: char = ' ';

/// Incremental line breaker over a single row.
#[derive(Clone, Debug)]
pub struct LineBreaker<'a> {
    row: &'a [char],
    start: usize,
    mode: WordWrap,
}

impl<'a> LineBreaker<'a> {
    pub fn new(row: &'a [char], mode: WordWrap) -> Self {
        Self { row, start: 0, mode }
    }

    /// `true` once every character has been emitted or consumed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.start >= self.row.len()
    }

    /// Characters not yet emitted.
    #[inline]
    pub fn rest(&self) -> &'a [char] {
        &self.row[self.start.min(self.row.len())..]
    }

    /// Next line of at most `width` characters (a width of 0 acts as 1).
    pub fn next_line(&mut self, width: usize) -> Option<&'a [char]> {
        if self.is_done() {
            return None;
        }
        let width = width.max(1);
        let (end, next) = match self.mode {
            WordWrap::BreakAll => {
                let end = (self.start + width).min(self.row.len());
                (end, end)
            }
            WordWrap::Normal => self.word_boundary(width),
        };
        let line = &self.row[self.start..end];
        self.start = next;
        Some(line)
    }

    /// `true` when the next line at `width` would end inside a word.
    ///
    /// Always `false` in break-all mode, which splits anywhere.
    pub fn splits_word(&self, width: usize) -> bool {
        if self.is_done() || self.mode == WordWrap::BreakAll {
            return false;
        }
        let (end, next) = self.word_boundary(width.max(1));
        end == next && end < self.row.len() && self.row[end] != SPACE && self.row[end - 1] != SPACE
    }

    /// Length of the next word, counting the spaces in front of it.
    pub fn leading_word_len(&self) -> usize {
        let rest = self.rest();
        let spaces = rest.iter().take_while(|c| **c == SPACE).count();
        spaces + rest[spaces..].iter().take_while(|c| **c != SPACE).count()
    }

    /// End of the next line and where the line after it starts.
    fn word_boundary(&self, width: usize) -> (usize, usize) {
        let start = self.start;
        let last = self.row.len() - 1;

        if width == 1 {
            return (start + 1, start + 1);
        }

        let mut last_space = None;
        for i in start..=last {
            if self.row[i] == SPACE {
                last_space = Some(i);
            }
            if i == last {
                return (i + 1, i + 1);
            }
            if i - start == width - 1 {
                if self.row[i + 1] == SPACE {
                    return (i + 1, i + 2);
                }
                return match last_space {
                    Some(space) if space > start => (space, space + 1),
                    // No break opportunity on this line: split the word.
                    _ => (i + 1, i + 1),
                };
            }
        }
        (self.row.len(), self.row.len())
    }
}

/// Break every row of `grid` into lines no wider than `width`.
///
/// Empty rows produce no lines.
pub fn wrap(grid: &CharacterGrid, width: usize, mode: WordWrap) -> Result<CharacterGrid, LayoutError> {
    if width == 0 {
        return Err(LayoutError::invalid_input("cannot wrap to a width of 0"));
    }

    let mut lines = Vec::with_capacity(grid.height());
    for row in grid.rows() {
        let mut breaker = LineBreaker::new(row, mode);
        while let Some(line) = breaker.next_line(width) {
            lines.push(line.to_vec());
        }
    }
    Ok(CharacterGrid::from_rows(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wrap_text(text: &str, width: usize, mode: WordWrap) -> Vec<String> {
        wrap(&CharacterGrid::from_text(text), width, mode)
            .unwrap()
            .lines()
    }

    // ─────────────── word mode ───────────────

    #[test]
    fn test_breaks_before_space() {
        assert_eq!(wrap_text("hello world", 5, WordWrap::Normal), ["hello", "world"]);
    }

    #[test]
    fn test_breaks_at_last_space() {
        assert_eq!(
            wrap_text("the quick brown fox", 10, WordWrap::Normal),
            ["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_splits_oversized_word() {
        assert_eq!(wrap_text("ab cdefgh", 4, WordWrap::Normal), ["ab", "cdef", "gh"]);
        assert_eq!(wrap_text("abcdefghij", 4, WordWrap::Normal), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_short_row_untouched() {
        assert_eq!(wrap_text("hi", 8, WordWrap::Normal), ["hi"]);
        assert_eq!(wrap_text("exactly8", 8, WordWrap::Normal), ["exactly8"]);
    }

    #[test]
    fn test_width_one_every_char_own_line() {
        assert_eq!(wrap_text("a b", 1, WordWrap::Normal), ["a", " ", "b"]);
    }

    #[test]
    fn test_trailing_space_consumed() {
        assert_eq!(wrap_text("abc ", 3, WordWrap::Normal), ["abc"]);
    }

    #[test]
    fn test_double_space_keeps_one() {
        assert_eq!(wrap_text("a  b", 2, WordWrap::Normal), ["a ", "b"]);
    }

    #[test]
    fn test_each_row_wrapped_independently() {
        let grid = CharacterGrid::from_lines("aaaa bb\ncc");
        let wrapped = wrap(&grid, 4, WordWrap::Normal).unwrap();
        assert_eq!(wrapped.lines(), ["aaaa", "bb", "cc"]);
    }

    #[test]
    fn test_empty_row_yields_no_lines() {
        let wrapped = wrap(&CharacterGrid::from_text(""), 4, WordWrap::Normal).unwrap();
        assert!(wrapped.is_empty());
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = wrap(&CharacterGrid::from_text("abc"), 0, WordWrap::Normal);
        assert!(matches!(result, Err(LayoutError::InvalidLayoutInput(_))));
    }

    // ─────────────── break-all ───────────────

    #[test]
    fn test_break_all_chunks() {
        assert_eq!(
            wrap_text("hello world", 4, WordWrap::BreakAll),
            ["hell", "o wo", "rld"]
        );
    }

    // ─────────────── incremental use ───────────────

    #[test]
    fn test_breaker_varying_widths() {
        let row: Vec<char> = "one two three".chars().collect();
        let mut breaker = LineBreaker::new(&row, WordWrap::Normal);
        assert_eq!(breaker.next_line(4).unwrap().iter().collect::<String>(), "one");
        assert_eq!(breaker.rest().iter().collect::<String>(), "two three");
        assert_eq!(breaker.next_line(20).unwrap().iter().collect::<String>(), "two three");
        assert!(breaker.is_done());
        assert!(breaker.next_line(20).is_none());
    }

    #[test]
    fn test_splits_word_only_inside_words() {
        let row: Vec<char> = "hello".chars().collect();
        assert!(LineBreaker::new(&row, WordWrap::Normal).splits_word(2));
        assert!(!LineBreaker::new(&row, WordWrap::Normal).splits_word(5));
        assert!(!LineBreaker::new(&row, WordWrap::BreakAll).splits_word(2));

        let row: Vec<char> = "ab cd".chars().collect();
        assert!(!LineBreaker::new(&row, WordWrap::Normal).splits_word(3));
        let row: Vec<char> = "abc def".chars().collect();
        assert!(!LineBreaker::new(&row, WordWrap::Normal).splits_word(3));
    }

    #[test]
    fn test_leading_word_len_counts_spaces() {
        let row: Vec<char> = "  ab cd".chars().collect();
        let mut breaker = LineBreaker::new(&row, WordWrap::Normal);
        assert_eq!(breaker.leading_word_len(), 4);
        breaker.next_line(4);
        assert_eq!(breaker.leading_word_len(), 2);
        breaker.next_line(4);
        assert_eq!(breaker.leading_word_len(), 0);
    }

    // ─────────────── properties ───────────────

    /// Reassemble word-mode lines, reinserting one consumed space after a
    /// line whenever the original continues with a space.
    fn reassemble(original: &[char], lines: &[Vec<char>]) -> Option<usize> {
        let mut pos = 0;
        for line in lines {
            if original.get(pos..pos + line.len())? != line.as_slice() {
                return None;
            }
            pos += line.len();
            if original.get(pos) == Some(&SPACE) {
                pos += 1;
            }
        }
        Some(pos)
    }

    proptest! {
        #[test]
        fn prop_word_wrap_round_trips(text in "[ab ]{1,40}", width in 2usize..12) {
            let row: Vec<char> = text.chars().collect();
            let wrapped = wrap(&CharacterGrid::from_rows(vec![row.clone()]), width, WordWrap::Normal).unwrap();
            for line in wrapped.rows() {
                prop_assert!(line.len() <= width, "line {:?} wider than {}", line, width);
            }
            prop_assert_eq!(reassemble(&row, wrapped.rows()), Some(row.len()));
        }

        #[test]
        fn prop_word_wrap_width_one_is_identity(text in "[ab ]{1,20}") {
            let wrapped = wrap(&CharacterGrid::from_text(&text), 1, WordWrap::Normal).unwrap();
            prop_assert_eq!(wrapped.height(), text.chars().count());
            prop_assert_eq!(wrapped.concat().into_iter().collect::<String>(), text);
        }

        #[test]
        fn prop_break_all_chunks(text in "[a-z ]{1,60}", width in 1usize..15) {
            let len = text.chars().count();
            let wrapped = wrap(&CharacterGrid::from_text(&text), width, WordWrap::BreakAll).unwrap();
            prop_assert_eq!(wrapped.height(), len.div_ceil(width));
            prop_assert_eq!(wrapped.concat().into_iter().collect::<String>(), text);
            for line in wrapped.rows() {
                prop_assert!(line.len() <= width);
            }
        }
    }
}
