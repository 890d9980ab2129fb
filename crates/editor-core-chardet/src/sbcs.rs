//! Single-byte charset prober driven by caller-supplied language models.

use tracing::debug;

use crate::distribution::{SURE_NO, SURE_YES};
use crate::filter::{filter_with_english_letters, filter_without_english_letters};
use crate::prober::{CharsetProber, ProbingState};

/// Orders below this are the frequent letters the precedence matrix covers.
pub const SAMPLE_SIZE: usize = 64;
/// Sequences seen before the prober may decide early.
pub const SB_ENOUGH_REL_THRESHOLD: u32 = 1024;
/// Confidence above which the prober claims its charset early.
pub const POSITIVE_SHORTCUT_THRESHOLD: f32 = 0.95;
/// Confidence below which the prober gives up early.
pub const NEGATIVE_SHORTCUT_THRESHOLD: f32 = 0.05;
/// Orders at or above this are not characters of the language.
pub const SYMBOL_CAT_ORDER: u8 = 250;
/// Number of precedence categories; the highest is the "very likely" one.
pub const NUMBER_OF_SEQ_CAT: usize = 4;

/// Order for control characters that do not occur in text.
pub const CTR: u8 = 255;
/// Order for line ends.
pub const RET: u8 = 254;
/// Order for symbols and punctuation.
pub const SYM: u8 = 253;
/// Order for digits.
pub const NUM: u8 = 252;

/// Letter frequency model of one language in one single-byte charset.
#[derive(Debug, Clone, Copy)]
pub struct SequenceModel {
    /// Frequency order of every byte; see [`CTR`], [`RET`], [`SYM`] and [`NUM`].
    pub char_to_order_map: &'static [u8; 256],
    /// Category (`0..NUMBER_OF_SEQ_CAT`) of each pair of the `SAMPLE_SIZE` most frequent letters,
    /// indexed by `first * SAMPLE_SIZE + second`.
    pub precedence_matrix: &'static [u8],
    /// Share of "very likely" pairs in typical text.
    pub typical_positive_ratio: f32,
    /// Whether ASCII letters belong to the language, so input is not stripped of them.
    pub keep_english_letter: bool,
    /// Charset name reported on a match.
    pub charset_name: &'static str,
}

/// Scores text by how often consecutive frequent letters form likely pairs.
#[derive(Debug, Clone)]
pub struct SingleByteCharsetProber {
    model: &'static SequenceModel,
    reversed: bool,
    state: ProbingState,
    last_order: u8,
    total_seqs: u32,
    seq_counters: [u32; NUMBER_OF_SEQ_CAT],
    total_char: u32,
    freq_char: u32,
}

impl SingleByteCharsetProber {
    /// Create a prober reading pairs in text order.
    pub fn new(model: &'static SequenceModel) -> Self {
        Self::with_reversed(model, false)
    }

    /// Create a prober; `reversed` reads every pair back to front, which turns a logical-order
    /// model into a visual-order one.
    pub fn with_reversed(model: &'static SequenceModel, reversed: bool) -> Self {
        Self {
            model,
            reversed,
            state: ProbingState::Detecting,
            last_order: CTR,
            total_seqs: 0,
            seq_counters: [0; NUMBER_OF_SEQ_CAT],
            total_char: 0,
            freq_char: 0,
        }
    }

    fn category(&self, first: u8, second: u8) -> usize {
        let (first, second) = if self.reversed { (second, first) } else { (first, second) };
        let index = usize::from(first) * SAMPLE_SIZE + usize::from(second);
        self.model
            .precedence_matrix
            .get(index)
            .map_or(0, |&cat| usize::from(cat).min(NUMBER_OF_SEQ_CAT - 1))
    }

    fn set_state(&mut self, state: ProbingState) {
        debug!(
            charset = self.model.charset_name,
            reversed = self.reversed,
            %state,
            "prober state changed"
        );
        self.state = state;
    }
}

impl CharsetProber for SingleByteCharsetProber {
    fn charset_name(&self) -> Option<&'static str> {
        Some(self.model.charset_name)
    }

    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        if self.state.is_terminal() {
            return self.state;
        }
        let filtered = if self.model.keep_english_letter {
            filter_with_english_letters(buf)
        } else {
            filter_without_english_letters(buf)
        };
        for b in filtered {
            let order = self.model.char_to_order_map[usize::from(b)];
            if order < SYMBOL_CAT_ORDER {
                self.total_char += 1;
            }
            if usize::from(order) < SAMPLE_SIZE {
                self.freq_char += 1;
                if usize::from(self.last_order) < SAMPLE_SIZE {
                    self.total_seqs += 1;
                    let category = self.category(self.last_order, order);
                    self.seq_counters[category] += 1;
                }
            }
            self.last_order = order;
        }
        if self.total_seqs > SB_ENOUGH_REL_THRESHOLD {
            let confidence = self.confidence();
            if confidence > POSITIVE_SHORTCUT_THRESHOLD {
                self.set_state(ProbingState::FoundIt);
            } else if confidence < NEGATIVE_SHORTCUT_THRESHOLD {
                self.set_state(ProbingState::NotMe);
            }
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn reset(&mut self) {
        *self = Self::with_reversed(self.model, self.reversed);
    }

    fn confidence(&self) -> f32 {
        if self.total_seqs == 0 || self.total_char == 0 {
            return SURE_NO;
        }
        let positive = self.seq_counters[NUMBER_OF_SEQ_CAT - 1] as f32;
        let ratio = positive / self.total_seqs as f32 / self.model.typical_positive_ratio;
        let ratio = ratio * self.freq_char as f32 / self.total_char as f32;
        ratio.min(SURE_YES)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A toy model over windows-1251 Cyrillic: the 32 lower-case letters 0xE0..=0xFF are
    /// frequent, and any two of them form a likely pair except a doubled letter.
    pub(crate) fn cyrillic_map() -> [u8; 256] {
        let mut map = [SYM; 256];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = match i {
                0x0A | 0x0D => RET,
                0x00..=0x1F => CTR,
                0x30..=0x39 => NUM,
                0xC0..=0xDF => (i - 0xC0) as u8,
                0xE0..=0xFF => (i - 0xE0) as u8,
                _ => SYM,
            };
        }
        map
    }

    pub(crate) fn cyrillic_matrix() -> Vec<u8> {
        let mut matrix = vec![0u8; SAMPLE_SIZE * SAMPLE_SIZE];
        for first in 0..32 {
            for second in 0..32 {
                matrix[first * SAMPLE_SIZE + second] = if first == second { 1 } else { 3 };
            }
        }
        matrix
    }

    pub(crate) fn cyrillic_model() -> &'static SequenceModel {
        let map: &'static [u8; 256] = Box::leak(Box::new(cyrillic_map()));
        let matrix: &'static [u8] = Box::leak(cyrillic_matrix().into_boxed_slice());
        Box::leak(Box::new(SequenceModel {
            char_to_order_map: map,
            precedence_matrix: matrix,
            typical_positive_ratio: 0.9,
            keep_english_letter: false,
            charset_name: "windows-1251",
        }))
    }

    #[test]
    fn test_likely_pairs_score_high() {
        let mut prober = SingleByteCharsetProber::new(cyrillic_model());
        // "привет мир" in windows-1251.
        prober.handle_data(b"\xef\xf0\xe8\xe2\xe5\xf2 \xec\xe8\xf0");
        assert_eq!(prober.state(), ProbingState::Detecting);
        assert_eq!(prober.confidence(), SURE_YES);
        assert_eq!(prober.charset_name(), Some("windows-1251"));
    }

    #[test]
    fn test_doubled_letters_score_low() {
        let mut prober = SingleByteCharsetProber::new(cyrillic_model());
        prober.handle_data(b"\xe0\xe0\xe0\xe0 \xe1\xe1\xe1");
        assert!(prober.confidence() < 0.05);
    }

    #[test]
    fn test_reset_clears_counts() {
        let mut prober = SingleByteCharsetProber::new(cyrillic_model());
        prober.handle_data(b"\xef\xf0\xe8\xe2\xe5\xf2");
        prober.reset();
        assert_eq!(prober.confidence(), SURE_NO);
    }
}
