//! Logical versus visual Hebrew.
//!
//! windows-1255 stores Hebrew in logical (reading) order and ISO-8859-8 usually in visual
//! order, reversed on each line. Both use the same letter codes, so one language model read
//! forwards and backwards scores the two, and final letter forms break ties: a final letter ends a
//! word in logical text but starts one in visual text.

use tracing::debug;

use crate::filter::filter_without_english_letters;
use crate::prober::{CharsetProber, ProbingState};
use crate::sbcs::{SequenceModel, SingleByteCharsetProber};

const FINAL_KAF: u8 = 0xEA;
const NORMAL_KAF: u8 = 0xEB;
const FINAL_MEM: u8 = 0xED;
const NORMAL_MEM: u8 = 0xEE;
const FINAL_NUN: u8 = 0xEF;
const NORMAL_NUN: u8 = 0xF0;
const FINAL_PE: u8 = 0xF3;
const NORMAL_PE: u8 = 0xF4;
const FINAL_TSADI: u8 = 0xF5;

/// Final letter score difference that decides on its own.
const MIN_FINAL_CHAR_DISTANCE: i32 = 5;
/// Model confidence difference that decides when final letters do not.
const MIN_MODEL_DISTANCE: f32 = 0.01;

/// Charset of visual Hebrew.
pub const VISUAL_HEBREW_NAME: &str = "ISO-8859-8";
/// Charset of logical Hebrew.
pub const LOGICAL_HEBREW_NAME: &str = "windows-1255";

fn is_final(b: u8) -> bool {
    matches!(b, FINAL_KAF | FINAL_MEM | FINAL_NUN | FINAL_PE | FINAL_TSADI)
}

fn is_non_final(b: u8) -> bool {
    matches!(b, NORMAL_KAF | NORMAL_MEM | NORMAL_NUN | NORMAL_PE)
}

/// Decides between [`LOGICAL_HEBREW_NAME`] and [`VISUAL_HEBREW_NAME`].
#[derive(Debug, Clone)]
pub struct HebrewProber {
    logical: SingleByteCharsetProber,
    visual: SingleByteCharsetProber,
    final_char_logical_score: i32,
    final_char_visual_score: i32,
    prev: u8,
    before_prev: u8,
}

impl HebrewProber {
    /// Create a prober from the logical-order windows-1255 model.
    pub fn new(model: &'static SequenceModel) -> Self {
        Self {
            logical: SingleByteCharsetProber::new(model),
            visual: SingleByteCharsetProber::with_reversed(model, true),
            final_char_logical_score: 0,
            final_char_visual_score: 0,
            prev: b' ',
            before_prev: b' ',
        }
    }

    fn score_final_letters(&mut self, buf: &[u8]) {
        for b in filter_without_english_letters(buf) {
            if b == b' ' {
                // A word just ended; one-letter words say nothing.
                if self.before_prev != b' ' {
                    if is_final(self.prev) {
                        self.final_char_logical_score += 1;
                    } else if is_non_final(self.prev) {
                        self.final_char_visual_score += 1;
                    }
                }
            } else if self.before_prev == b' ' && is_final(self.prev) {
                self.final_char_visual_score += 1;
            }
            self.before_prev = self.prev;
            self.prev = b;
        }
    }
}

impl CharsetProber for HebrewProber {
    fn charset_name(&self) -> Option<&'static str> {
        let final_sub = self.final_char_logical_score - self.final_char_visual_score;
        if final_sub >= MIN_FINAL_CHAR_DISTANCE {
            return Some(LOGICAL_HEBREW_NAME);
        }
        if final_sub <= -MIN_FINAL_CHAR_DISTANCE {
            return Some(VISUAL_HEBREW_NAME);
        }
        let model_sub = self.logical.confidence() - self.visual.confidence();
        if model_sub > MIN_MODEL_DISTANCE {
            return Some(LOGICAL_HEBREW_NAME);
        }
        if model_sub < -MIN_MODEL_DISTANCE || final_sub < 0 {
            return Some(VISUAL_HEBREW_NAME);
        }
        Some(LOGICAL_HEBREW_NAME)
    }

    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        if self.state().is_terminal() {
            return self.state();
        }
        self.logical.handle_data(buf);
        self.visual.handle_data(buf);
        self.score_final_letters(buf);
        let state = self.state();
        if state.is_terminal() {
            debug!(
                logical = self.final_char_logical_score,
                visual = self.final_char_visual_score,
                %state,
                "hebrew prober state changed"
            );
        }
        state
    }

    fn state(&self) -> ProbingState {
        match (self.logical.state(), self.visual.state()) {
            (ProbingState::NotMe, ProbingState::NotMe) => ProbingState::NotMe,
            (ProbingState::FoundIt, _) | (_, ProbingState::FoundIt) => ProbingState::FoundIt,
            _ => ProbingState::Detecting,
        }
    }

    fn reset(&mut self) {
        self.logical.reset();
        self.visual.reset();
        self.final_char_logical_score = 0;
        self.final_char_visual_score = 0;
        self.prev = b' ';
        self.before_prev = b' ';
    }

    fn confidence(&self) -> f32 {
        self.logical.confidence().max(self.visual.confidence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbcs::{SAMPLE_SIZE, SYM};

    /// Hebrew letters 0xE0..=0xFA as frequent orders; every pair is likely in logical order
    /// when the second letter sorts after the first.
    fn model() -> &'static SequenceModel {
        let mut map = [SYM; 256];
        for (i, slot) in map.iter_mut().enumerate().skip(0xE0).take(27) {
            *slot = (i - 0xE0) as u8;
        }
        let mut matrix = vec![0u8; SAMPLE_SIZE * SAMPLE_SIZE];
        for first in 0..27 {
            for second in 0..27 {
                matrix[first * SAMPLE_SIZE + second] = if second > first { 3 } else { 1 };
            }
        }
        Box::leak(Box::new(SequenceModel {
            char_to_order_map: Box::leak(Box::new(map)),
            precedence_matrix: Box::leak(matrix.into_boxed_slice()),
            typical_positive_ratio: 0.9,
            keep_english_letter: false,
            charset_name: LOGICAL_HEBREW_NAME,
        }))
    }

    #[test]
    fn test_final_letters_at_word_end_are_logical() {
        let mut prober = HebrewProber::new(model());
        // Words ending in final mem and final nun.
        let word_end = b"\xe0\xe1\xed \xe2\xe3\xef ";
        for _ in 0..3 {
            prober.handle_data(word_end);
        }
        assert_eq!(prober.state(), ProbingState::Detecting);
        assert_eq!(prober.charset_name(), Some(LOGICAL_HEBREW_NAME));
    }

    #[test]
    fn test_final_letters_at_word_start_are_visual() {
        let mut prober = HebrewProber::new(model());
        let word_start = b"\xed\xe1\xe0 \xef\xe3\xe2 ";
        for _ in 0..3 {
            prober.handle_data(word_start);
        }
        assert_eq!(prober.charset_name(), Some(VISUAL_HEBREW_NAME));
    }

    #[test]
    fn test_reset() {
        let mut prober = HebrewProber::new(model());
        prober.handle_data(b"\xe0\xe1\xed ");
        prober.reset();
        assert_eq!(prober.final_char_logical_score, 0);
        assert_eq!(prober.state(), ProbingState::Detecting);
    }
}
