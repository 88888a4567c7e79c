//! String queries over ASCII text
//!
//! Letters are ASCII letters only; every other character, including
//! non-ASCII ones, is treated as a plain non-letter symbol.

/// Whether `a` and `b` have at least one character in common
///
/// Whitespace never counts as a shared character.
pub fn shares_char(a: &str, b: &str) -> bool {
    a.chars()
        .filter(|c| !c.is_whitespace())
        .any(|c| b.contains(c))
}

/// Copy of `s` with every ASCII letter removed
pub fn strip_letters(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_alphabetic()).collect()
}

/// Number of distinct ASCII letters in `s`, ignoring case
pub fn unique_letter_count(s: &str) -> usize {
    let mut seen = [false; 26];
    for b in s.bytes().filter(u8::is_ascii_alphabetic) {
        seen[(b.to_ascii_lowercase() - b'a') as usize] = true;
    }
    seen.iter().filter(|&&s| s).count()
}

/// Size of the multiset intersection of the bytes of `a` and `b`
///
/// `sum over c of min(count_a(c), count_b(c))`
pub fn common_char_count(a: &str, b: &str) -> usize {
    let mut counts_a = [0usize; 256];
    let mut counts_b = [0usize; 256];
    for byte in a.bytes() {
        counts_a[byte as usize] += 1;
    }
    for byte in b.bytes() {
        counts_b[byte as usize] += 1;
    }
    counts_a
        .iter()
        .zip(counts_b.iter())
        .map(|(x, y)| (*x).min(*y))
        .sum()
}

/// Sorted distinct lowercase letters appearing in either string
pub fn alphabet_union(a: &str, b: &str) -> String {
    let mut seen = [false; 26];
    for byte in a.bytes().chain(b.bytes()).filter(u8::is_ascii_lowercase) {
        seen[(byte - b'a') as usize] = true;
    }
    (b'a'..=b'z')
        .filter(|l| seen[(l - b'a') as usize])
        .map(char::from)
        .collect()
}

/// Alternate characters from `a` and `b`, then append the longer tail
///
/// ```text
/// interleave("abc", "12345") == "a1b2c345"
/// ```
pub fn interleave(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => {
                out.push(x);
                out.push(y);
            }
            (Some(x), None) => {
                out.push(x);
                out.extend(left);
                break;
            }
            (None, Some(y)) => {
                out.push(y);
                out.extend(right);
                break;
            }
            (None, None) => break,
        }
    }
    out
}

/// Copy of `s` with every `old` replaced by `new`
pub fn substitute(s: &str, old: char, new: char) -> String {
    s.chars().map(|c| if c == old { new } else { c }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_char() {
        assert!(shares_char("hello", "world"));
        assert!(!shares_char("abc", "xyz"));
        assert!(!shares_char("a b", "x y"));
        assert!(shares_char("a-b", "--"));
        assert!(!shares_char("", "abc"));
    }

    #[test]
    fn test_strip_letters() {
        assert_eq!(strip_letters("a1 b2-C3!"), "1 2-3!");
        assert_eq!(strip_letters("letters"), "");
    }

    #[test]
    fn test_strip_letters_is_idempotent() {
        let once = strip_letters("Mixed 123 text, with ? marks");
        assert_eq!(strip_letters(&once), once);
    }

    #[test]
    fn test_unique_letter_count() {
        assert_eq!(unique_letter_count("Hello, World"), 7);
        assert_eq!(unique_letter_count("AaAa"), 1);
        assert_eq!(unique_letter_count("123 !"), 0);
    }

    #[test]
    fn test_common_char_count() {
        assert_eq!(common_char_count("aabbc", "abbbd"), 3);
        assert_eq!(common_char_count("hello", "world"), 2);
        assert_eq!(common_char_count("", "abc"), 0);
    }

    #[test]
    fn test_alphabet_union() {
        assert_eq!(alphabet_union("hello", "world"), "dehlorw");
        assert_eq!(alphabet_union("Zebra!", "ABC"), "aber");
        assert_eq!(alphabet_union("", ""), "");
    }

    #[test]
    fn test_interleave() {
        assert_eq!(interleave("abc", "12345"), "a1b2c345");
        assert_eq!(interleave("abcd", "12"), "a1b2cd");
        assert_eq!(interleave("", "xy"), "xy");
        assert_eq!(interleave("ab", "12").len(), 4);
    }

    #[test]
    fn test_substitute() {
        assert_eq!(substitute("banana", 'a', 'o'), "bonono");
        assert_eq!(substitute("plain", 'z', 'y'), "plain");
    }

    #[test]
    fn test_substitute_round_trip() {
        // Reversible because 'o' does not occur in the original
        let original = "banana";
        let swapped = substitute(original, 'a', 'o');
        assert_eq!(substitute(&swapped, 'o', 'a'), original);

        // Not reversible once `new` was already present
        let original = "cab";
        let swapped = substitute(original, 'a', 'c');
        assert_ne!(substitute(&swapped, 'c', 'a'), original);
    }
}
