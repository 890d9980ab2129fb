//! Language filters and input pre-filtering.

use bitflags::bitflags;

bitflags! {
    /// Languages a detector should consider.
    ///
    /// The filter decides which multi-byte probers and escape machines exist. A filter naming
    /// exactly one CJK language marks that language as preferred, which lets its probers report a
    /// confidence from less data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LanguageFilter: u8 {
        /// GB18030, HZ-GB-2312 and ISO-2022-CN.
        const CHINESE_SIMPLIFIED = 1 << 0;
        /// Big5 and EUC-TW.
        const CHINESE_TRADITIONAL = 1 << 1;
        /// Shift_JIS, EUC-JP and ISO-2022-JP.
        const JAPANESE = 1 << 2;
        /// EUC-KR and ISO-2022-KR.
        const KOREAN = 1 << 3;
        /// The single-byte group.
        const NON_CJK = 1 << 4;
        /// Both Chinese variants.
        const CHINESE = Self::CHINESE_SIMPLIFIED.bits() | Self::CHINESE_TRADITIONAL.bits();
        /// Every CJK language.
        const CJK = Self::CHINESE.bits() | Self::JAPANESE.bits() | Self::KOREAN.bits();
        /// Everything.
        const ALL = Self::CJK.bits() | Self::NON_CJK.bits();
    }
}

impl Default for LanguageFilter {
    fn default() -> Self {
        Self::ALL
    }
}

fn is_ascii_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

fn is_high(b: u8) -> bool {
    b & 0x80 != 0
}

/// Keep only the words that contain a high byte, each followed by a single space.
///
/// Words are runs of letters and high bytes; everything else separates them. A trailing word
/// without a separator after it is kept as is.
pub fn filter_without_english_letters(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut meet_high = false;
    let mut prev = 0;
    for (cur, &b) in buf.iter().enumerate() {
        if is_high(b) {
            meet_high = true;
        } else if !is_ascii_letter(b) {
            if meet_high && cur > prev {
                out.extend_from_slice(&buf[prev..cur]);
                out.push(b' ');
                meet_high = false;
            }
            prev = cur + 1;
        }
    }
    if meet_high && prev < buf.len() {
        out.extend_from_slice(&buf[prev..]);
    }
    out
}

/// Drop markup and keep runs of letters and high bytes, each followed by a single space.
///
/// Runs between `<` and `>` are skipped.
pub fn filter_with_english_letters(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut in_tag = false;
    let mut prev = 0;
    for (cur, &b) in buf.iter().enumerate() {
        if !is_high(b) && !is_ascii_letter(b) {
            if cur > prev && !in_tag {
                out.extend_from_slice(&buf[prev..cur]);
                out.push(b' ');
            }
            prev = cur + 1;
        }
        match b {
            b'<' => in_tag = true,
            b'>' => in_tag = false,
            _ => {}
        }
    }
    if !in_tag && prev < buf.len() {
        out.extend_from_slice(&buf[prev..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_filters() {
        assert!(LanguageFilter::CJK.contains(LanguageFilter::KOREAN));
        assert!(!LanguageFilter::CJK.contains(LanguageFilter::NON_CJK));
        assert_eq!(LanguageFilter::default(), LanguageFilter::ALL);
    }

    #[test]
    fn test_without_english_keeps_high_byte_words() {
        let out = filter_without_english_letters(b"abc d\xe9f ghi \xfc");
        assert_eq!(out, b"d\xe9f \xfc");
    }

    #[test]
    fn test_without_english_drops_plain_text() {
        assert!(filter_without_english_letters(b"hello, world 42").is_empty());
    }

    #[test]
    fn test_with_english_skips_tags() {
        let out = filter_with_english_letters(b"<b class=x>caf\xe9</b> ok");
        assert_eq!(out, b"caf\xe9 ok");
    }
}
