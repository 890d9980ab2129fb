//! Two-byte character frequency analysis for CJK encodings.

use crate::freq_tables::{
    BIG5_CHAR_TO_FREQ_ORDER, EUC_KR_CHAR_TO_FREQ_ORDER, EUC_TW_CHAR_TO_FREQ_ORDER, FREQUENT_RANK,
    GB2312_CHAR_TO_FREQ_ORDER, JIS_CHAR_TO_FREQ_ORDER,
};
use crate::models;
use crate::state_machine::SmModel;

/// Characters seen before a distribution is considered conclusive.
pub const ENOUGH_DATA_THRESHOLD: u32 = 1024;
/// Frequent characters needed before a confidence above [`SURE_NO`] is reported, unless the
/// language is preferred.
pub const MINIMUM_DATA_THRESHOLD: u32 = 4;

/// Confidence reported when the data rules the encoding out.
pub const SURE_NO: f32 = 0.01;
/// Highest confidence a statistical prober reports.
pub const SURE_YES: f32 = 0.99;

/// The multi-byte CJK encodings with a frequency model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CjkEncoding {
    /// Shift_JIS.
    ShiftJis,
    /// EUC-JP.
    EucJp,
    /// GB18030, analysed through its GB2312 subset.
    Gb18030,
    /// EUC-KR.
    EucKr,
    /// Big5.
    Big5,
    /// EUC-TW.
    EucTw,
}

impl CjkEncoding {
    /// Coding state machine of the encoding.
    pub fn model(self) -> &'static SmModel {
        match self {
            Self::ShiftJis => &models::SHIFT_JIS,
            Self::EucJp => &models::EUC_JP,
            Self::Gb18030 => &models::GB18030,
            Self::EucKr => &models::EUC_KR,
            Self::Big5 => &models::BIG5,
            Self::EucTw => &models::EUC_TW,
        }
    }

    /// Whether Japanese context analysis applies.
    pub fn is_japanese(self) -> bool {
        matches!(self, Self::ShiftJis | Self::EucJp)
    }

    fn typical_ratio(self) -> f32 {
        match self {
            Self::ShiftJis | Self::EucJp => 3.0,
            Self::Gb18030 => 0.9,
            Self::EucKr => 6.0,
            Self::Big5 | Self::EucTw => 0.75,
        }
    }

    fn char_to_freq_order(self) -> &'static [u16] {
        match self {
            Self::ShiftJis | Self::EucJp => &JIS_CHAR_TO_FREQ_ORDER,
            Self::Gb18030 => &GB2312_CHAR_TO_FREQ_ORDER,
            Self::EucKr => &EUC_KR_CHAR_TO_FREQ_ORDER,
            Self::Big5 => &BIG5_CHAR_TO_FREQ_ORDER,
            Self::EucTw => &EUC_TW_CHAR_TO_FREQ_ORDER,
        }
    }

    /// Whether the character of `order` is among the most frequent of the language.
    pub fn is_frequent(self, order: u16) -> bool {
        self.char_to_freq_order()
            .get(usize::from(order))
            .is_some_and(|&rank| rank < FREQUENT_RANK)
    }

    /// Order of a two-byte character, `None` when the character is outside the model.
    pub fn order(self, [lead, trail]: [u8; 2]) -> Option<u16> {
        let (lead, trail) = (u16::from(lead), u16::from(trail));
        match self {
            Self::ShiftJis => {
                let row = match lead {
                    0x81..=0x9F => lead - 0x81,
                    0xE0..=0xEF => lead - 0xE0 + 31,
                    _ => return None,
                };
                let cell = trail.checked_sub(0x40)?;
                let order = 188 * row + cell;
                Some(if trail > 0x7F { order.checked_sub(1)? } else { order })
            }
            Self::EucJp => {
                (lead >= 0xA1 && trail >= 0xA1).then(|| 94 * (lead - 0xA1) + trail - 0xA1)
            }
            Self::Gb18030 => {
                (lead >= 0xB0 && trail >= 0xA1).then(|| 94 * (lead - 0xB0) + trail - 0xA1)
            }
            Self::EucKr => {
                (lead >= 0xB0 && trail >= 0xA1).then(|| 94 * (lead - 0xB0) + trail - 0xA1)
            }
            Self::EucTw => {
                (lead >= 0xC4 && trail >= 0xA1).then(|| 94 * (lead - 0xC4) + trail - 0xA1)
            }
            Self::Big5 => {
                if lead < 0xA4 {
                    return None;
                }
                let cell = if trail >= 0xA1 {
                    trail - 0xA1 + 63
                } else {
                    trail.checked_sub(0x40)?
                };
                Some(157 * (lead - 0xA4) + cell)
            }
        }
    }
}

/// Running count of frequent versus all two-byte characters.
#[derive(Debug, Clone)]
pub struct CharDistributionAnalysis {
    encoding: CjkEncoding,
    total_chars: u32,
    freq_chars: u32,
    data_threshold: u32,
}

impl CharDistributionAnalysis {
    /// Create an analysis; a preferred language reports a confidence from the first frequent
    /// character.
    pub fn new(encoding: CjkEncoding, preferred: bool) -> Self {
        Self {
            encoding,
            total_chars: 0,
            freq_chars: 0,
            data_threshold: if preferred { 0 } else { MINIMUM_DATA_THRESHOLD },
        }
    }

    /// Forget all counts.
    pub fn reset(&mut self) {
        self.total_chars = 0;
        self.freq_chars = 0;
    }

    /// Account for one complete character whose last two bytes are `window`.
    pub fn handle_one_char(&mut self, window: [u8; 2], char_len: usize) {
        if char_len != 2 {
            return;
        }
        let Some(order) = self.encoding.order(window) else {
            return;
        };
        self.total_chars += 1;
        if self.encoding.is_frequent(order) {
            self.freq_chars += 1;
        }
    }

    /// Ratio of frequent characters scaled by the language's typical ratio, in
    /// `[SURE_NO, SURE_YES]`.
    pub fn confidence(&self) -> f32 {
        if self.total_chars == 0 || self.freq_chars <= self.data_threshold {
            return SURE_NO;
        }
        if self.total_chars != self.freq_chars {
            let rare = (self.total_chars - self.freq_chars) as f32;
            let ratio = self.freq_chars as f32 / (rare * self.encoding.typical_ratio());
            if ratio < SURE_YES {
                return ratio;
            }
        }
        SURE_YES
    }

    /// Whether enough characters were seen for the confidence to be final.
    pub fn got_enough_data(&self) -> bool {
        self.total_chars > ENOUGH_DATA_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders() {
        assert_eq!(CjkEncoding::Gb18030.order([0xB0, 0xA1]), Some(0));
        assert_eq!(CjkEncoding::Gb18030.order([0xA1, 0xA1]), None);
        assert_eq!(CjkEncoding::Big5.order([0xA4, 0x40]), Some(0));
        assert_eq!(CjkEncoding::Big5.order([0xA4, 0xA1]), Some(63));
        assert_eq!(CjkEncoding::ShiftJis.order([0x88, 0x9F]), Some(188 * 7 + 0x9F - 0x40 - 1));
        assert_eq!(CjkEncoding::ShiftJis.order([0xA0, 0x40]), None);
    }

    #[test]
    fn test_table_sizes() {
        for (encoding, size) in [
            (CjkEncoding::ShiftJis, 4368),
            (CjkEncoding::EucJp, 4368),
            (CjkEncoding::Gb18030, 3760),
            (CjkEncoding::EucKr, 2352),
            (CjkEncoding::Big5, 5376),
            (CjkEncoding::EucTw, 5376),
        ] {
            assert_eq!(encoding.char_to_freq_order().len(), size, "{encoding:?}");
        }
    }

    #[test]
    fn test_frequent_characters() {
        for (encoding, bytes) in [
            // "的"
            (CjkEncoding::Gb18030, [0xB5, 0xC4]),
            (CjkEncoding::Big5, [0xAA, 0xBA]),
            (CjkEncoding::EucTw, [0xCE, 0xFB]),
            // "이"
            (CjkEncoding::EucKr, [0xC0, 0xCC]),
            // "の"
            (CjkEncoding::EucJp, [0xA4, 0xCE]),
            (CjkEncoding::ShiftJis, [0x82, 0xCC]),
        ] {
            let order = encoding.order(bytes).unwrap();
            assert!(encoding.is_frequent(order), "{encoding:?}");
        }
        // Big5 level 1 and CNS 11643 plane 1 share their character order.
        assert_eq!(CjkEncoding::Big5.order([0xAA, 0xBA]), Some(1030));
        assert_eq!(CjkEncoding::EucTw.order([0xCE, 0xFB]), Some(1030));
        // Orders past the end of the table are never frequent.
        assert!(!CjkEncoding::EucKr.is_frequent(u16::MAX));
    }

    #[test]
    fn test_confidence_needs_data() {
        let mut analysis = CharDistributionAnalysis::new(CjkEncoding::Gb18030, false);
        assert_eq!(analysis.confidence(), SURE_NO);
        // "的" is frequent in GB2312.
        let de = [0xB5, 0xC4];
        for _ in 0..4 {
            analysis.handle_one_char(de, 2);
        }
        assert_eq!(analysis.confidence(), SURE_NO);
        analysis.handle_one_char(de, 2);
        assert_eq!(analysis.confidence(), SURE_YES);
    }

    #[test]
    fn test_preferred_language_reports_early() {
        let mut analysis = CharDistributionAnalysis::new(CjkEncoding::Gb18030, true);
        analysis.handle_one_char([0xB5, 0xC4], 2);
        assert_eq!(analysis.confidence(), SURE_YES);
        analysis.handle_one_char([0xB5, 0xC4], 1);
        assert!(!analysis.got_enough_data());
    }
}
