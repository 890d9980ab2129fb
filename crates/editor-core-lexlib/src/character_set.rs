//! Byte and code point classification shared by every lexer.
//!
//! [`CharacterSet`] is a 128-bit membership table for ASCII with a single answer for everything
//! above `0x7F`; the free functions mirror the small predicates lexers reach for constantly.
//! [`CharacterCategory`] gives the Unicode general category for the lexers that accept non-ASCII
//! identifiers.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// The starting contents of a [`CharacterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetBase {
    /// Empty set.
    None,
    /// `a-z`.
    Lower,
    /// `A-Z`.
    Upper,
    /// `0-9`.
    Digits,
    /// `a-z` and `A-Z`.
    Alpha,
    /// `a-z`, `A-Z` and `0-9`.
    AlphaNum,
}

/// A set of ASCII characters plus a fixed answer for non-ASCII input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterSet {
    bits: u128,
    value_after: bool,
}

const LOWER_BITS: u128 = range_bits(b'a', b'z');
const UPPER_BITS: u128 = range_bits(b'A', b'Z');
const DIGIT_BITS: u128 = range_bits(b'0', b'9');

const fn range_bits(first: u8, last: u8) -> u128 {
    let mut bits = 0u128;
    let mut ch = first;
    while ch <= last {
        bits |= 1u128 << ch;
        ch += 1;
    }
    bits
}

impl CharacterSet {
    /// Create a set from `base` plus every byte of `extra`.
    pub fn new(base: SetBase, extra: &str) -> Self {
        let bits = match base {
            SetBase::None => 0,
            SetBase::Lower => LOWER_BITS,
            SetBase::Upper => UPPER_BITS,
            SetBase::Digits => DIGIT_BITS,
            SetBase::Alpha => LOWER_BITS | UPPER_BITS,
            SetBase::AlphaNum => LOWER_BITS | UPPER_BITS | DIGIT_BITS,
        };
        let mut set = Self {
            bits,
            value_after: false,
        };
        set.add_string(extra);
        set
    }

    /// Set the answer given for any character outside ASCII.
    pub fn with_value_after(mut self, value_after: bool) -> Self {
        self.value_after = value_after;
        self
    }

    /// Add one ASCII byte. Non-ASCII bytes are ignored.
    pub fn add(&mut self, ch: u8) {
        debug_assert!(ch.is_ascii(), "CharacterSet only stores ASCII");
        if ch.is_ascii() {
            self.bits |= 1u128 << ch;
        }
    }

    /// Add every byte of `chars`.
    pub fn add_string(&mut self, chars: &str) {
        for b in chars.bytes() {
            self.add(b);
        }
    }

    /// Membership test for a byte.
    pub fn contains_byte(&self, ch: u8) -> bool {
        if ch.is_ascii() {
            self.bits & (1u128 << ch) != 0
        } else {
            self.value_after
        }
    }

    /// Membership test for a character.
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.contains_byte(ch as u8)
        } else {
            self.value_after
        }
    }
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self::new(SetBase::None, "")
    }
}

/// Space, tab, or any of the ASCII vertical whitespace controls `0x09..=0x0D`.
pub fn is_a_space(ch: char) -> bool {
    ch == ' ' || ('\u{09}'..='\u{0d}').contains(&ch)
}

/// Like [`is_a_space`], used where the C heritage called it `isspacechar`.
pub fn is_space_char(ch: char) -> bool {
    is_a_space(ch)
}

/// ASCII decimal digit.
pub fn is_a_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Digit valid in `base` (2..=36).
pub fn is_a_digit_base(ch: char, base: u32) -> bool {
    ch.is_ascii() && ch.to_digit(base).is_some()
}

/// ASCII hexadecimal digit.
pub fn is_a_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// ASCII upper case letter.
pub fn is_upper_case(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// ASCII lower case letter.
pub fn is_lower_case(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

/// ASCII letter or digit.
pub fn is_alpha_numeric(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// ASCII punctuation commonly used as an operator.
pub fn is_operator(ch: char) -> bool {
    matches!(
        ch,
        '%' | '^'
            | '&'
            | '*'
            | '('
            | ')'
            | '-'
            | '+'
            | '='
            | '|'
            | '{'
            | '}'
            | '['
            | ']'
            | ':'
            | ';'
            | '<'
            | '>'
            | ','
            | '/'
            | '?'
            | '!'
            | '.'
            | '~'
    )
}

/// ASCII-only lower casing; other characters are returned unchanged.
pub fn make_lower_case(ch: char) -> char {
    ch.to_ascii_lowercase()
}

/// ASCII-only upper casing; other characters are returned unchanged.
pub fn make_upper_case(ch: char) -> char {
    ch.to_ascii_uppercase()
}

/// ASCII case-insensitive string equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// ASCII case-insensitive comparison of the first `len` bytes.
pub fn eq_ignore_case_n(a: &[u8], b: &[u8], len: usize) -> bool {
    let a = &a[..a.len().min(len)];
    let b = &b[..b.len().min(len)];
    a.eq_ignore_ascii_case(b)
}

/// Unicode general category.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterCategory {
    Lu,
    Ll,
    Lt,
    Lm,
    Lo,
    Mn,
    Mc,
    Me,
    Nd,
    Nl,
    No,
    Pc,
    Pd,
    Ps,
    Pe,
    Pi,
    Pf,
    Po,
    Sm,
    Sc,
    Sk,
    So,
    Zs,
    Zl,
    Zp,
    Cc,
    Cf,
    Cs,
    Co,
    Cn,
}

impl CharacterCategory {
    /// Classify `ch`.
    pub fn of(ch: char) -> Self {
        match ch.general_category() {
            GeneralCategory::UppercaseLetter => Self::Lu,
            GeneralCategory::LowercaseLetter => Self::Ll,
            GeneralCategory::TitlecaseLetter => Self::Lt,
            GeneralCategory::ModifierLetter => Self::Lm,
            GeneralCategory::OtherLetter => Self::Lo,
            GeneralCategory::NonspacingMark => Self::Mn,
            GeneralCategory::SpacingMark => Self::Mc,
            GeneralCategory::EnclosingMark => Self::Me,
            GeneralCategory::DecimalNumber => Self::Nd,
            GeneralCategory::LetterNumber => Self::Nl,
            GeneralCategory::OtherNumber => Self::No,
            GeneralCategory::ConnectorPunctuation => Self::Pc,
            GeneralCategory::DashPunctuation => Self::Pd,
            GeneralCategory::OpenPunctuation => Self::Ps,
            GeneralCategory::ClosePunctuation => Self::Pe,
            GeneralCategory::InitialPunctuation => Self::Pi,
            GeneralCategory::FinalPunctuation => Self::Pf,
            GeneralCategory::OtherPunctuation => Self::Po,
            GeneralCategory::MathSymbol => Self::Sm,
            GeneralCategory::CurrencySymbol => Self::Sc,
            GeneralCategory::ModifierSymbol => Self::Sk,
            GeneralCategory::OtherSymbol => Self::So,
            GeneralCategory::SpaceSeparator => Self::Zs,
            GeneralCategory::LineSeparator => Self::Zl,
            GeneralCategory::ParagraphSeparator => Self::Zp,
            GeneralCategory::Control => Self::Cc,
            GeneralCategory::Format => Self::Cf,
            GeneralCategory::Surrogate => Self::Cs,
            GeneralCategory::PrivateUse => Self::Co,
            GeneralCategory::Unassigned => Self::Cn,
        }
    }

    /// Letter categories.
    pub fn is_letter(self) -> bool {
        matches!(self, Self::Lu | Self::Ll | Self::Lt | Self::Lm | Self::Lo)
    }
}

// Other_ID_Start and Other_ID_Continue from PropList.txt.
fn is_other_id_start(ch: char) -> bool {
    matches!(ch, '\u{1885}' | '\u{1886}' | '\u{2118}' | '\u{212E}' | '\u{309B}' | '\u{309C}')
}

fn is_other_id_continue(ch: char) -> bool {
    matches!(
        ch,
        '\u{00B7}'
            | '\u{0387}'
            | '\u{1369}'..='\u{1371}'
            | '\u{19DA}'
            | '\u{200C}'
            | '\u{200D}'
            | '\u{30FB}'
            | '\u{FF65}'
    )
}

/// Unicode `ID_Start`: letters, letter numbers and the few legacy extras. `_` is not included.
pub fn is_id_start(ch: char) -> bool {
    // U+2E2F VERTICAL TILDE is a modifier letter but also pattern syntax.
    if ch == '\u{2E2F}' {
        return false;
    }
    let cat = CharacterCategory::of(ch);
    cat.is_letter() || cat == CharacterCategory::Nl || is_other_id_start(ch)
}

/// Unicode `ID_Continue`.
pub fn is_id_continue(ch: char) -> bool {
    use CharacterCategory::*;
    is_id_start(ch)
        || matches!(CharacterCategory::of(ch), Mn | Mc | Nd | Pc)
        || is_other_id_continue(ch)
}

/// Unicode `XID_Start`, the NFKC-closed form of [`is_id_start`].
pub fn is_xid_start(ch: char) -> bool {
    unicode_ident::is_xid_start(ch)
}

/// Unicode `XID_Continue`, the NFKC-closed form of [`is_id_continue`].
pub fn is_xid_continue(ch: char) -> bool {
    unicode_ident::is_xid_continue(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_sets_and_extras() {
        let set = CharacterSet::new(SetBase::AlphaNum, "._");
        assert!(set.contains('a'));
        assert!(set.contains('Z'));
        assert!(set.contains('7'));
        assert!(set.contains('_'));
        assert!(set.contains('.'));
        assert!(!set.contains('-'));
        assert!(!set.contains('é'));

        let set = set.with_value_after(true);
        assert!(set.contains('é'));
        assert!(set.contains_byte(0xE9));
    }

    #[test]
    fn test_digits_only() {
        let set = CharacterSet::new(SetBase::Digits, "");
        assert!(set.contains('0'));
        assert!(!set.contains('a'));
    }

    #[test]
    fn test_predicates() {
        assert!(is_a_space('\t'));
        assert!(is_a_space('\r'));
        assert!(!is_a_space('x'));
        assert!(is_a_digit_base('f', 16));
        assert!(!is_a_digit_base('g', 16));
        assert!(is_operator('+'));
        assert!(!is_operator('_'));
        assert!(eq_ignore_case_n(b"STRUCT", b"strux", 4));
    }

    #[test]
    fn test_categories() {
        assert_eq!(CharacterCategory::of('A'), CharacterCategory::Lu);
        assert_eq!(CharacterCategory::of('é'), CharacterCategory::Ll);
        assert_eq!(CharacterCategory::of('中'), CharacterCategory::Lo);
        assert_eq!(CharacterCategory::of('٣'), CharacterCategory::Nd);
        assert_eq!(CharacterCategory::of('\u{0301}'), CharacterCategory::Mn);
        assert_eq!(CharacterCategory::of('\u{3000}'), CharacterCategory::Zs);
        assert_eq!(CharacterCategory::of('('), CharacterCategory::Ps);
        assert!(is_id_start('ж'));
        assert!(!is_id_start('1'));
        assert!(is_id_continue('1'));
        assert!(is_xid_continue('\u{0301}'));
    }

    #[test]
    fn test_exact_categories_outside_latin1() {
        assert_eq!(CharacterCategory::of('\u{0903}'), CharacterCategory::Mc);
        assert_eq!(CharacterCategory::of('\u{01C5}'), CharacterCategory::Lt);
        assert_eq!(CharacterCategory::of('\u{05B0}'), CharacterCategory::Mn);
        assert_eq!(CharacterCategory::of('\u{2160}'), CharacterCategory::Nl);
        assert_eq!(CharacterCategory::of('\u{00B2}'), CharacterCategory::No);
        assert_eq!(CharacterCategory::of('\u{E000}'), CharacterCategory::Co);
        assert_eq!(CharacterCategory::of('\u{2118}'), CharacterCategory::Sm);
    }

    #[test]
    fn test_identifier_properties() {
        // Spacing marks continue identifiers but never start them.
        assert!(!is_id_start('\u{0903}'));
        assert!(!is_xid_start('\u{0903}'));
        assert!(is_xid_continue('\u{0903}'));
        // Middle dot and script-P come from the Other_ID_* lists.
        assert!(is_id_continue('\u{00B7}'));
        assert!(is_xid_continue('\u{00B7}'));
        assert!(!is_xid_start('\u{00B7}'));
        assert!(is_id_start('\u{2118}'));
        assert!(is_xid_start('\u{2118}'));
        assert!(!is_xid_continue('\u{E000}'));
        assert!(is_xid_continue('\u{05B0}'));
        assert!(!is_id_start('\u{2E2F}'));
        // Changes class under NFKC.
        assert!(is_id_start('\u{037A}'));
        assert!(!is_xid_start('\u{037A}'));
        assert!(!is_xid_start('_'));
        assert!(is_xid_continue('_'));
    }
}
