//! windows-1252 prober.

use tracing::debug;

use crate::distribution::SURE_NO;
use crate::filter::filter_with_english_letters;
use crate::prober::{CharsetProber, ProbingState};

const UDF: u8 = 0; // undefined in windows-1252
const OTH: u8 = 1; // other
const ASC: u8 = 2; // ascii capital letter
const ASS: u8 = 3; // ascii small letter
const ACV: u8 = 4; // accented capital vowel
const ACO: u8 = 5; // accented capital other
const ASV: u8 = 6; // accented small vowel
const ASO: u8 = 7; // accented small other
const CLASS_COUNT: usize = 8;

#[rustfmt::skip]
const CHAR_TO_CLASS: [u8; 256] = [
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 00
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 10
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 20
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 30
    OTH, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, // 40
    ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, OTH, OTH, OTH, OTH, OTH, // 50
    OTH, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, // 60
    ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, OTH, OTH, OTH, OTH, OTH, // 70
    OTH, UDF, OTH, ASO, OTH, OTH, OTH, OTH, OTH, OTH, ACO, OTH, ACO, UDF, ACO, UDF, // 80
    UDF, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, ASO, OTH, ASO, UDF, ASO, ACO, // 90
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // a0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // b0
    ACV, ACV, ACV, ACV, ACV, ACV, ACO, ACO, ACV, ACV, ACV, ACV, ACV, ACV, ACV, ACV, // c0
    ACO, ACO, ACV, ACV, ACV, ACV, ACV, OTH, ACV, ACV, ACV, ACV, ACV, ACO, ACO, ACO, // d0
    ASV, ASV, ASV, ASV, ASV, ASV, ASO, ASO, ASV, ASV, ASV, ASV, ASV, ASV, ASV, ASV, // e0
    ASO, ASO, ASV, ASV, ASV, ASV, ASV, OTH, ASV, ASV, ASV, ASV, ASV, ASO, ASO, ASO, // f0
];

/// Likelihood of a class pair: 0 illegal, 1 very unlikely, 2 normal, 3 very likely.
#[rustfmt::skip]
const CLASS_MODEL: [u8; CLASS_COUNT * CLASS_COUNT] = [
    // UDF OTH ASC ASS ACV ACO ASV ASO
    0, 0, 0, 0, 0, 0, 0, 0, // UDF
    0, 3, 3, 3, 3, 3, 3, 3, // OTH
    0, 3, 3, 3, 3, 3, 3, 3, // ASC
    0, 3, 3, 3, 1, 1, 3, 3, // ASS
    0, 3, 3, 3, 1, 2, 1, 2, // ACV
    0, 3, 3, 3, 3, 3, 3, 3, // ACO
    0, 3, 1, 3, 1, 1, 1, 3, // ASV
    0, 3, 1, 3, 1, 1, 3, 3, // ASO
];

/// Scores windows-1252 text by the plausibility of letter class pairs.
///
/// Its confidence is halved so that any more specific prober wins a tie.
#[derive(Debug, Clone)]
pub struct Latin1Prober {
    state: ProbingState,
    last_class: u8,
    freq_counter: [u32; 4],
}

impl Default for Latin1Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl Latin1Prober {
    /// Create a prober.
    pub fn new() -> Self {
        Self {
            state: ProbingState::Detecting,
            last_class: OTH,
            freq_counter: [0; 4],
        }
    }
}

impl CharsetProber for Latin1Prober {
    fn charset_name(&self) -> Option<&'static str> {
        Some("windows-1252")
    }

    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        if self.state.is_terminal() {
            return self.state;
        }
        for b in filter_with_english_letters(buf) {
            let class = CHAR_TO_CLASS[usize::from(b)];
            let index = usize::from(self.last_class) * CLASS_COUNT + usize::from(class);
            let freq = CLASS_MODEL[index];
            if freq == 0 {
                debug!(
                    charset = "windows-1252",
                    state = %ProbingState::NotMe,
                    "prober state changed"
                );
                self.state = ProbingState::NotMe;
                break;
            }
            self.freq_counter[usize::from(freq)] += 1;
            self.last_class = class;
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn confidence(&self) -> f32 {
        if self.state == ProbingState::NotMe {
            return SURE_NO;
        }
        let total: u32 = self.freq_counter.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let total = total as f32;
        let confidence =
            (self.freq_counter[3] as f32 - self.freq_counter[1] as f32 * 20.0) / total;
        confidence.max(0.0) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_text() {
        let mut prober = Latin1Prober::new();
        prober.handle_data(b"Le caf\xe9 est tr\xe8s bon, merci beaucoup.");
        assert_eq!(prober.state(), ProbingState::Detecting);
        let confidence = prober.confidence();
        assert!(confidence > 0.4 && confidence <= 0.5, "{confidence}");
    }

    #[test]
    fn test_undefined_byte_is_not_me() {
        let mut prober = Latin1Prober::new();
        assert_eq!(prober.handle_data(b"ab\x81cd"), ProbingState::NotMe);
        assert_eq!(prober.confidence(), SURE_NO);
        assert_eq!(prober.handle_data(b"plain"), ProbingState::NotMe);
    }

    #[test]
    fn test_empty_input_has_no_confidence() {
        assert_eq!(Latin1Prober::new().confidence(), 0.0);
    }
}
