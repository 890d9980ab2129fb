//! Keyword sets.

/// A sorted set of words with an index by first byte.
///
/// Words are separated by spaces, tabs and line ends, or by line ends only when the list was
/// created with [`WordList::with_only_line_ends`]. Entries starting with `^` match any word
/// beginning with the rest of the entry.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    starts: [Option<usize>; 256],
    only_line_ends: bool,
}

impl Default for WordList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for WordList {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for WordList {}

impl WordList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            starts: [None; 256],
            only_line_ends: false,
        }
    }

    /// Create an empty list whose words may contain spaces and tabs.
    pub fn with_only_line_ends() -> Self {
        Self {
            only_line_ends: true,
            ..Self::new()
        }
    }

    /// Replace the contents with the words of `list`, lowering ASCII letters when `lower_case`.
    ///
    /// Returns `false` when the resulting set of words is the same as before, regardless of
    /// order, so callers can skip re-lexing.
    pub fn set(&mut self, list: &str, lower_case: bool) -> bool {
        let only_line_ends = self.only_line_ends;
        let is_separator = |c: char| c == '\r' || c == '\n' || (!only_line_ends && (c == ' ' || c == '\t'));
        let mut words: Vec<String> = list
            .split(is_separator)
            .filter(|w| !w.is_empty())
            .map(|w| {
                if lower_case {
                    w.to_ascii_lowercase()
                } else {
                    w.to_string()
                }
            })
            .collect();
        words.sort_unstable();
        words.dedup();
        if words == self.words {
            return false;
        }
        self.words = words;
        self.starts = [None; 256];
        for (index, word) in self.words.iter().enumerate().rev() {
            self.starts[usize::from(word.as_bytes()[0])] = Some(index);
        }
        true
    }

    /// Remove all words.
    pub fn clear(&mut self) {
        self.words.clear();
        self.starts = [None; 256];
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The `n`th word in sorted order.
    pub fn word_at(&self, n: usize) -> Option<&str> {
        self.words.get(n).map(String::as_str)
    }

    fn bucket(&self, first: u8) -> impl Iterator<Item = &[u8]> {
        let start = self.starts[usize::from(first)].unwrap_or(self.words.len());
        self.words[start..]
            .iter()
            .map(String::as_bytes)
            .take_while(move |w| w[0] == first)
    }

    fn in_caret_prefixes(&self, s: &[u8]) -> bool {
        self.bucket(b'^').any(|w| s.starts_with(&w[1..]))
    }

    /// Exact membership, or a `^prefix` entry that `s` starts with.
    pub fn in_list(&self, s: &str) -> bool {
        let s = s.as_bytes();
        let Some(&first) = s.first() else {
            return false;
        };
        self.bucket(first).any(|w| w == s) || self.in_caret_prefixes(s)
    }

    /// Membership where entries may contain `marker` to mark the shortest accepted abbreviation:
    /// `stru~ct` accepts `stru`, `struc` and `struct`.
    ///
    /// A marker directly after the first character is not honoured for one-character words, so
    /// `w~hile` does not accept `w`.
    pub fn in_list_abbreviated(&self, s: &str, marker: u8) -> bool {
        let s = s.as_bytes();
        let Some(&first) = s.first() else {
            return false;
        };
        let found = self.bucket(first).any(|w| {
            let mut is_subword = false;
            let mut start = 1;
            if w.get(1) == Some(&marker) {
                is_subword = true;
                start += 1;
            }
            if s.get(1) != w.get(start) {
                return false;
            }
            let mut a = start;
            let mut b = 1;
            while a < w.len() && b < s.len() && w[a] == s[b] {
                a += 1;
                if w.get(a) == Some(&marker) {
                    is_subword = true;
                    a += 1;
                }
                b += 1;
            }
            (a >= w.len() || is_subword) && b >= s.len()
        });
        found || self.in_caret_prefixes(s)
    }

    /// Membership where entries of the form `prefix<marker>suffix` accept any word that starts
    /// with `prefix` and ends with `suffix`; `<marker>suffix` entries match on the suffix alone.
    pub fn in_list_abridged(&self, s: &str, marker: u8) -> bool {
        let s = s.as_bytes();
        let Some(&first) = s.first() else {
            return false;
        };
        let abridged_match = |w: &[u8]| match w.iter().position(|&c| c == marker) {
            Some(split) => {
                let (prefix, suffix) = (&w[..split], &w[split + 1..]);
                s.len() >= prefix.len() + suffix.len() && s.starts_with(prefix) && s.ends_with(suffix)
            }
            None => w == s,
        };
        self.bucket(first).any(abridged_match) || self.bucket(marker).any(abridged_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_order_insensitive() {
        let mut wl = WordList::new();
        assert!(wl.set("else struct", false));
        assert!(!wl.set("struct else", false));
        assert!(!wl.set("  struct\telse\r\n", false));
        assert!(wl.set("struct", false));
        assert_eq!(wl.len(), 1);
    }

    #[test]
    fn test_in_list() {
        let mut wl = WordList::new();
        wl.set("else struct i int ^__", false);
        assert!(wl.in_list("struct"));
        assert!(wl.in_list("i"));
        assert!(wl.in_list("int"));
        assert!(!wl.in_list("in"));
        assert!(!wl.in_list("Struct"));
        assert!(wl.in_list("__attribute__"));
        assert!(!wl.in_list(""));
    }

    #[test]
    fn test_lower_case_and_word_at() {
        let mut wl = WordList::new();
        wl.set("Else STRUCT", true);
        assert_eq!(wl.word_at(0), Some("else"));
        assert_eq!(wl.word_at(1), Some("struct"));
        assert_eq!(wl.word_at(2), None);
    }

    #[test]
    fn test_abbreviated() {
        let mut wl = WordList::new();
        wl.set("else stru~ct w~hile", false);
        assert!(wl.in_list_abbreviated("stru", b'~'));
        assert!(wl.in_list_abbreviated("struc", b'~'));
        assert!(wl.in_list_abbreviated("struct", b'~'));
        assert!(!wl.in_list_abbreviated("str", b'~'));
        assert!(!wl.in_list_abbreviated("structs", b'~'));
        assert!(wl.in_list_abbreviated("else", b'~'));
        assert!(wl.in_list_abbreviated("wh", b'~'));
        assert!(wl.in_list_abbreviated("while", b'~'));
        assert!(!wl.in_list_abbreviated("w", b'~'));
    }

    #[test]
    fn test_abridged() {
        let mut wl = WordList::new();
        wl.set("abc~xyz ~_t exact", false);
        assert!(wl.in_list_abridged("abcdefxyz", b'~'));
        assert!(wl.in_list_abridged("abcxyz", b'~'));
        assert!(!wl.in_list_abridged("abxyz", b'~'));
        assert!(wl.in_list_abridged("size_t", b'~'));
        assert!(wl.in_list_abridged("exact", b'~'));
        assert!(!wl.in_list_abridged("exactly", b'~'));
    }

    #[test]
    fn test_only_line_ends() {
        let mut wl = WordList::with_only_line_ends();
        wl.set("end if\nend do", false);
        assert!(wl.in_list("end if"));
        assert!(!wl.in_list("end"));
    }
}
