//! The universal detector sequencing every prober over a byte stream.

use std::fmt;

use tracing::debug;

use crate::esc::EscCharsetProber;
use crate::filter::LanguageFilter;
use crate::group::{MbcsGroupProber, SbcsGroupProber, SingleByteModels};
use crate::latin1::Latin1Prober;
use crate::prober::{CharsetProber, ProbingState};

/// Confidence a prober needs at the end of input for its charset to be reported.
pub const MINIMUM_THRESHOLD: f32 = 0.60;

/// Name reported for input that never left 7-bit ASCII.
pub const ASCII_NAME: &str = "ASCII";

const ESC: u8 = 0x1B;
/// No-break space; common in otherwise ASCII pages, so it does not count as a high byte.
const NBSP: u8 = 0xA0;

/// What the input has looked like so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputState {
    /// Only 7-bit bytes.
    #[default]
    PureAscii,
    /// 7-bit bytes including an escape or HZ `~{` introducer.
    EscAscii,
    /// At least one high byte.
    HighByte,
}

impl fmt::Display for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PureAscii => "pure_ascii",
            Self::EscAscii => "esc_ascii",
            Self::HighByte => "high_byte",
        })
    }
}

/// Guesses the charset of a byte stream fed chunk by chunk.
///
/// A byte order mark decides immediately. Otherwise 7-bit input goes to the escape-sequence
/// prober once an escape introducer shows up, and the first high byte switches over to the
/// multi-byte group, the single-byte group and the windows-1252 prober. [`data_end`] settles on
/// the most confident candidate if nothing claimed the input earlier.
///
/// [`data_end`]: UniversalDetector::data_end
#[derive(Debug)]
pub struct UniversalDetector {
    filter: LanguageFilter,
    single_byte_models: SingleByteModels,
    input_state: InputState,
    start: bool,
    got_data: bool,
    done: bool,
    all_ascii: bool,
    last_char: u8,
    esc: Option<EscCharsetProber>,
    probers: Vec<Box<dyn CharsetProber>>,
    detected: Option<&'static str>,
    confidence: f32,
}

impl Default for UniversalDetector {
    fn default() -> Self {
        Self::new(LanguageFilter::ALL)
    }
}

impl UniversalDetector {
    /// Create a detector with the built-in single-byte language models.
    pub fn new(filter: LanguageFilter) -> Self {
        Self::with_single_byte_models(filter, SingleByteModels::default())
    }

    /// Create a detector whose single-byte group probes `models`.
    ///
    /// The group only runs when `filter` contains [`LanguageFilter::NON_CJK`].
    pub fn with_single_byte_models(filter: LanguageFilter, models: SingleByteModels) -> Self {
        Self {
            filter,
            single_byte_models: models,
            input_state: InputState::PureAscii,
            start: true,
            got_data: false,
            done: false,
            all_ascii: true,
            last_char: 0,
            esc: None,
            probers: Vec::new(),
            detected: None,
            confidence: 0.0,
        }
    }

    /// Input state reached so far.
    pub fn input_state(&self) -> InputState {
        self.input_state
    }

    /// Whether the charset is decided and further input is ignored.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Detected charset, once decided by a prober or by [`data_end`](Self::data_end).
    pub fn charset(&self) -> Option<&'static str> {
        self.detected
    }

    /// Confidence in [`charset`](Self::charset); 0 while undecided.
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    fn report(&mut self, charset: &'static str, confidence: f32) {
        self.detected = Some(charset);
        self.confidence = confidence;
        self.done = true;
    }

    fn check_bom(buf: &[u8]) -> Option<&'static str> {
        match buf {
            [0xEF, 0xBB, 0xBF, ..] => Some("UTF-8"),
            [0xFE, 0xFF, _, ..] | [0xFF, 0xFE, _, ..] => Some("UTF-16"),
            _ => None,
        }
    }

    fn set_input_state(&mut self, state: InputState) {
        debug!(from = %self.input_state, to = %state, "input state changed");
        self.input_state = state;
    }

    fn start_high_byte_probers(&mut self) {
        self.set_input_state(InputState::HighByte);
        self.esc = None;
        if !self.probers.is_empty() {
            return;
        }
        self.probers.push(Box::new(MbcsGroupProber::new(self.filter)));
        if self.filter.contains(LanguageFilter::NON_CJK) {
            self.probers
                .push(Box::new(SbcsGroupProber::new(&self.single_byte_models)));
        }
        self.probers.push(Box::new(Latin1Prober::new()));
    }

    /// Consume the next chunk of the stream.
    pub fn handle_data(&mut self, buf: &[u8]) {
        if self.done {
            return;
        }
        if !buf.is_empty() {
            self.got_data = true;
        }
        if self.start {
            self.start = false;
            if buf.len() > 2
                && let Some(charset) = Self::check_bom(buf)
            {
                debug!(charset, "byte order mark found");
                self.report(charset, 1.0);
                return;
            }
        }

        for &b in buf {
            if b & 0x80 != 0 {
                self.all_ascii = false;
            }
            if b & 0x80 != 0 && b != NBSP {
                if self.input_state != InputState::HighByte {
                    self.start_high_byte_probers();
                }
            } else {
                if self.input_state == InputState::PureAscii
                    && (b == ESC || (b == b'{' && self.last_char == b'~'))
                {
                    self.set_input_state(InputState::EscAscii);
                }
                self.last_char = b;
            }
        }

        match self.input_state {
            InputState::EscAscii => {
                let filter = self.filter;
                let esc = self.esc.get_or_insert_with(|| EscCharsetProber::new(filter));
                if esc.handle_data(buf) == ProbingState::FoundIt
                    && let Some(charset) = esc.charset_name()
                {
                    let confidence = esc.confidence();
                    self.report(charset, confidence);
                }
            }
            InputState::HighByte => {
                let mut found = None;
                for prober in &mut self.probers {
                    if prober.handle_data(buf) == ProbingState::FoundIt {
                        found = prober.charset_name().map(|name| (name, prober.confidence()));
                        break;
                    }
                }
                if let Some((charset, confidence)) = found {
                    self.report(charset, confidence);
                }
            }
            InputState::PureAscii => {}
        }
    }

    /// Signal the end of the stream and settle on a charset if none was found yet.
    pub fn data_end(&mut self) {
        if !self.got_data {
            return;
        }
        if let Some(charset) = self.detected {
            self.done = true;
            debug!(charset, confidence = self.confidence, "charset detected");
            return;
        }
        match self.input_state {
            InputState::HighByte => {
                let mut best: Option<(&'static str, f32)> = None;
                for prober in &self.probers {
                    let confidence = prober.confidence();
                    if best.is_none_or(|(_, top)| confidence > top)
                        && let Some(charset) = prober.charset_name()
                    {
                        best = Some((charset, confidence));
                    }
                }
                if let Some((charset, confidence)) = best
                    && confidence > MINIMUM_THRESHOLD
                {
                    self.report(charset, confidence);
                }
            }
            InputState::PureAscii | InputState::EscAscii => {
                if self.all_ascii {
                    self.report(ASCII_NAME, 1.0);
                }
            }
        }
        match self.detected {
            Some(charset) => debug!(charset, confidence = self.confidence, "charset detected"),
            None => debug!(input_state = %self.input_state, "no charset detected"),
        }
    }

    /// Forget the stream; probers already created are kept and reset.
    pub fn reset(&mut self) {
        self.input_state = InputState::PureAscii;
        self.start = true;
        self.got_data = false;
        self.done = false;
        self.all_ascii = true;
        self.last_char = 0;
        self.detected = None;
        self.confidence = 0.0;
        if let Some(esc) = &mut self.esc {
            esc.reset();
        }
        for prober in &mut self.probers {
            prober.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_needs_three_bytes() {
        let mut detector = UniversalDetector::default();
        detector.handle_data(b"\xff\xfe");
        assert!(!detector.is_done());
        assert_eq!(detector.input_state(), InputState::HighByte);
    }

    #[test]
    fn test_nbsp_is_not_a_high_byte() {
        let mut detector = UniversalDetector::default();
        detector.handle_data(b"a\xa0b");
        assert_eq!(detector.input_state(), InputState::PureAscii);
        detector.data_end();
        assert_eq!(detector.charset(), None);
    }

    #[test]
    fn test_hz_introducer_switches_to_escape_ascii() {
        let mut detector = UniversalDetector::default();
        detector.handle_data(b"abc ~");
        assert_eq!(detector.input_state(), InputState::PureAscii);
        detector.handle_data(b"{");
        assert_eq!(detector.input_state(), InputState::EscAscii);
    }

    #[test]
    fn test_data_end_without_data_reports_nothing() {
        let mut detector = UniversalDetector::default();
        detector.data_end();
        assert!(!detector.is_done());
        assert_eq!(detector.charset(), None);
    }

    #[test]
    fn test_reset() {
        let mut detector = UniversalDetector::default();
        detector.handle_data(b"\xef\xbb\xbfabc");
        assert_eq!(detector.charset(), Some("UTF-8"));
        detector.reset();
        assert!(!detector.is_done());
        assert_eq!(detector.charset(), None);
        detector.handle_data(b"plain");
        detector.data_end();
        assert_eq!(detector.charset(), Some(ASCII_NAME));
    }
}
