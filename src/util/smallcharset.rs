//! A bitset over the first 64 Unicode scalar values, used by the tokenizer
//! to scan runs of text up to the next "interesting" character (`&`, `\0`,
//! `<`, `\r`, ...) without looking at each character individually.

/// Represents a set of "small characters", those with Unicode scalar
/// values less than 64.
pub struct SmallCharSet {
    pub bits: u64,
}

impl SmallCharSet {
    #[inline]
    fn contains(&self, n: u8) -> bool {
        0 != (self.bits & (1 << (n as usize)))
    }

    /// Count the number of bytes of characters at the beginning
    /// of `buf` which are not in the set.
    /// See `buffer_queue::pop_except_from`.
    pub fn nonmember_prefix_len(&self, buf: &str) -> u32 {
        let mut n = 0;
        for b in buf.bytes() {
            if b >= 64 || !self.contains(b) {
                n += 1;
            } else {
                break;
            }
        }
        n
    }
}

macro_rules! small_char_set ( ($($e:expr)+) => (
    $crate::util::smallcharset::SmallCharSet {
        bits: $( (1 << ($e as usize)) )|+
    }
));

#[cfg(test)]
mod test {
    #[test]
    fn nonmember_prefix() {
        for &c in ['&', '\0'].iter() {
            for x in 0..48u32 {
                for y in 0..48u32 {
                    let mut s = "x".repeat(x as usize);
                    s.push(c);
                    s.push_str(&"x".repeat(y as usize));
                    let set = small_char_set!('&' '\0');

                    assert_eq!(x, set.nonmember_prefix_len(&s));
                }
            }
        }
    }
}
