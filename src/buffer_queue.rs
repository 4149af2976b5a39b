//! The [`BufferQueue`] struct and helper types.
//!
//! This type is designed for the efficient parsing of string data, especially where many
//! significant characters are from the ascii range 0-63. This includes, for example, important
//! characters in html parsing.
//!
//! Good and predictable performance is achieved by avoiding allocation where possible (a.k.a. zero
//! copy).

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use tendril::StrTendril;

use crate::util::smallcharset::SmallCharSet;

pub use self::SetResult::{FromSet, NotFromSet};

/// Result from [`BufferQueue::pop_except_from`] containing either a character from a
/// [`SmallCharSet`], or a string buffer of characters not from the set.
#[derive(PartialEq, Eq, Debug)]
pub enum SetResult {
    FromSet(char),
    NotFromSet(StrTendril),
}

/// A 1-based (line, column) position in the original input, advanced as
/// characters are popped off the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub line: u64,
    pub col: u64,
}

impl Default for Pos {
    fn default() -> Pos {
        Pos { line: 1, col: 1 }
    }
}

impl Pos {
    fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

/// A queue of owned string buffers, which supports incrementally consuming
/// characters, plus a line/column locator used for error reporting.
///
/// Buffers are held behind a `RefCell` rather than requiring `&mut self`,
/// since the tokenizer that drives this queue is itself a `&self`-based
/// (`Cell`/`RefCell`-backed) type: see [`crate::tokenizer::Tokenizer`].
pub struct BufferQueue {
    buffers: RefCell<VecDeque<StrTendril>>,
    pos: Cell<Pos>,
}

impl Default for BufferQueue {
    fn default() -> BufferQueue {
        BufferQueue::new()
    }
}

impl BufferQueue {
    pub fn new() -> BufferQueue {
        BufferQueue {
            buffers: RefCell::new(VecDeque::with_capacity(16)),
            pos: Cell::new(Pos::default()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.borrow().is_empty()
    }

    /// The current (1-based) line and column, i.e. the position of the
    /// next character that will be popped.
    pub fn pos(&self) -> Pos {
        self.pos.get()
    }

    pub fn pop_front(&self) -> Option<StrTendril> {
        self.buffers.borrow_mut().pop_front()
    }

    pub fn push_front(&self, buf: StrTendril) {
        if buf.len32() == 0 {
            return;
        }
        self.buffers.borrow_mut().push_front(buf);
    }

    pub fn push_back(&self, buf: StrTendril) {
        if buf.len32() == 0 {
            return;
        }
        self.buffers.borrow_mut().push_back(buf);
    }

    /// Look at the next available character, if any.
    pub fn peek(&self) -> Option<char> {
        // Invariant: all buffers in the queue are non-empty.
        self.buffers.borrow().front().map(|b| b.chars().next().unwrap())
    }

    /// Get the next character, if one is available.
    pub fn next(&self) -> Option<char> {
        let mut buffers = self.buffers.borrow_mut();
        let (result, now_empty) = match buffers.front_mut() {
            None => (None, false),
            Some(buf) => {
                let c = buf.pop_front_char().expect("empty buffer in queue");
                (Some(c), buf.is_empty())
            }
        };

        if now_empty {
            buffers.pop_front();
        }
        drop(buffers);

        if let Some(c) = result {
            let mut pos = self.pos.get();
            pos.advance(c);
            self.pos.set(pos);
        }

        result
    }

    /// Pops and returns either a single character from the given set, or
    /// a `StrTendril` of characters none of which are in the set.  The set
    /// is represented as a bitmask and so can only contain the first 64
    /// ASCII characters.
    pub fn pop_except_from(&self, set: SmallCharSet) -> Option<SetResult> {
        let mut buffers = self.buffers.borrow_mut();
        let (result, now_empty) = match buffers.front_mut() {
            None => (None, false),
            Some(buf) => {
                let n = set.nonmember_prefix_len(buf);
                if n > 0 {
                    let out = buf.subtendril(0, n);
                    buf.pop_front(n);
                    (Some(NotFromSet(out)), buf.is_empty())
                } else {
                    let c = buf.pop_front_char().expect("empty buffer in queue");
                    (Some(FromSet(c)), buf.is_empty())
                }
            }
        };

        if now_empty {
            buffers.pop_front();
        }
        drop(buffers);

        let mut pos = self.pos.get();
        match &result {
            Some(FromSet(c)) => pos.advance(*c),
            Some(NotFromSet(s)) => {
                for c in s.chars() {
                    pos.advance(c);
                }
            }
            None => {}
        }
        self.pos.set(pos);

        result
    }

    /// Check if the next characters are an ASCII case-insensitive match for
    /// `pat`, which must be non-empty.
    ///
    /// If so, consume them and return `Some(true)`.
    /// If they do not match, return `Some(false)`.
    /// If not enough characters are available to know, return `None`.
    pub fn eat<F: Fn(&u8, &u8) -> bool>(&self, pat: &str, eq: F) -> Option<bool> {
        let mut buffers = self.buffers.borrow_mut();
        let mut buffers_exhausted = 0;
        let mut consumed_from_last = 0;
        buffers.front()?;

        for pattern_byte in pat.bytes() {
            if buffers_exhausted >= buffers.len() {
                return None;
            }
            let buf = &buffers[buffers_exhausted];

            if !eq(&buf.as_bytes()[consumed_from_last], &pattern_byte) {
                return Some(false);
            }

            consumed_from_last += 1;
            if consumed_from_last >= buf.len() {
                buffers_exhausted += 1;
                consumed_from_last = 0;
            }
        }

        // We have a match. Commit changes to the BufferQueue, advancing the
        // locator over every consumed character.
        let mut pos = self.pos.get();
        for _ in 0..buffers_exhausted {
            let buf = buffers.pop_front().unwrap();
            for c in buf.chars() {
                pos.advance(c);
            }
        }

        match buffers.front_mut() {
            None => assert_eq!(consumed_from_last, 0),
            Some(buf) => {
                let consumed = buf.subtendril(0, consumed_from_last as u32);
                for c in consumed.chars() {
                    pos.advance(c);
                }
                buf.pop_front(consumed_from_last as u32);
            }
        }
        self.pos.set(pos);

        Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_except_from_splits_on_set_membership() {
        let bq = BufferQueue::new();
        bq.push_back(StrTendril::from("abc&def"));
        assert_eq!(
            bq.pop_except_from(small_char_set!('&')),
            Some(NotFromSet(StrTendril::from("abc")))
        );
        assert_eq!(bq.pop_except_from(small_char_set!('&')), Some(FromSet('&')));
        assert_eq!(
            bq.pop_except_from(small_char_set!('&')),
            Some(NotFromSet(StrTendril::from("def")))
        );
        assert_eq!(bq.pop_except_from(small_char_set!('&')), None);
    }

    #[test]
    fn eat_matches_case_insensitively_and_advances_position() {
        let bq = BufferQueue::new();
        bq.push_back(StrTendril::from("DOCTYPE html"));
        let eq = |a: &u8, b: &u8| a.eq_ignore_ascii_case(b);
        assert_eq!(bq.eat("doctype", eq), Some(true));
        assert_eq!(bq.pos().col, 8);
        assert_eq!(bq.next(), Some(' '));
    }

    #[test]
    fn tracks_line_and_column_across_newlines() {
        let bq = BufferQueue::new();
        bq.push_back(StrTendril::from("ab\ncd"));
        for _ in 0..3 {
            bq.next();
        }
        assert_eq!(bq.pos(), Pos { line: 2, col: 1 });
    }
}
