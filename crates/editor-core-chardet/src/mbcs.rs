//! Multi-byte CJK probers.

use tracing::debug;

use crate::distribution::{CharDistributionAnalysis, CjkEncoding};
use crate::jp_context::JapaneseContextAnalysis;
use crate::prober::{CharsetProber, ProbingState, SHORTCUT_THRESHOLD};
use crate::state_machine::{CodingStateMachine, MachineState};

/// Validates one CJK encoding and scores its character distribution.
///
/// Shift_JIS and EUC-JP also run hiragana context analysis; their confidence is the larger of
/// the two scores.
#[derive(Debug, Clone)]
pub struct MultiByteProber {
    encoding: CjkEncoding,
    sm: CodingStateMachine,
    distribution: CharDistributionAnalysis,
    context: Option<JapaneseContextAnalysis>,
    state: ProbingState,
    last_byte: u8,
}

impl MultiByteProber {
    /// Create a prober; `preferred` marks the only language the caller is interested in.
    pub fn new(encoding: CjkEncoding, preferred: bool) -> Self {
        Self {
            encoding,
            sm: CodingStateMachine::new(encoding.model()),
            distribution: CharDistributionAnalysis::new(encoding, preferred),
            context: encoding
                .is_japanese()
                .then(|| JapaneseContextAnalysis::new(encoding)),
            state: ProbingState::Detecting,
            last_byte: 0,
        }
    }

    /// The encoding probed for.
    pub fn encoding(&self) -> CjkEncoding {
        self.encoding
    }

    fn set_state(&mut self, state: ProbingState) {
        debug!(charset = self.sm.name(), %state, "prober state changed");
        self.state = state;
    }

    fn got_enough_data(&self) -> bool {
        match &self.context {
            Some(context) => context.got_enough_data(),
            None => self.distribution.got_enough_data(),
        }
    }
}

impl CharsetProber for MultiByteProber {
    fn charset_name(&self) -> Option<&'static str> {
        Some(self.sm.name())
    }

    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        if self.state.is_terminal() || buf.is_empty() {
            return self.state;
        }
        for (i, &b) in buf.iter().enumerate() {
            match self.sm.next_state(b) {
                MachineState::ItsMe => {
                    self.set_state(ProbingState::FoundIt);
                    return self.state;
                }
                MachineState::Error => {
                    self.set_state(ProbingState::NotMe);
                    return self.state;
                }
                MachineState::Start => {
                    let char_len = self.sm.current_char_len();
                    let window = match i {
                        0 => [self.last_byte, b],
                        _ => [buf[i - 1], b],
                    };
                    if let Some(context) = &mut self.context {
                        context.handle_one_char(window, char_len);
                    }
                    self.distribution.handle_one_char(window, char_len);
                }
                MachineState::Pending(_) => {}
            }
        }
        self.last_byte = buf[buf.len() - 1];
        if self.got_enough_data() && self.confidence() > SHORTCUT_THRESHOLD {
            self.set_state(ProbingState::FoundIt);
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn reset(&mut self) {
        self.sm.reset();
        self.state = ProbingState::Detecting;
        self.distribution.reset();
        if let Some(context) = &mut self.context {
            context.reset();
        }
        self.last_byte = 0;
    }

    fn confidence(&self) -> f32 {
        let distribution = self.distribution.confidence();
        match self.context.as_ref().and_then(JapaneseContextAnalysis::confidence) {
            Some(context) => context.max(distribution),
            None => distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "的是不了在人有我他这个们中来上大为和国地到以说时" in GB2312.
    const GB2312_TEXT: &[u8] = b"\xb5\xc4\xca\xc7\xb2\xbb\xc1\xcb\xd4\xda\xc8\xcb\xd3\xd0\xce\xd2\xcb\xfb\xd5\xe2\xb8\xf6\xc3\xc7\xd6\xd0\xc0\xb4\xc9\xcf\xb4\xf3\xce\xaa\xba\xcd\xb9\xfa\xb5\xd8\xb5\xbd\xd2\xd4\xcb\xb5\xca\xb1";

    #[test]
    fn test_gb18030_frequent_text() {
        let mut prober = MultiByteProber::new(CjkEncoding::Gb18030, false);
        assert_eq!(prober.handle_data(GB2312_TEXT), ProbingState::Detecting);
        assert_eq!(prober.confidence(), 0.99);
        assert_eq!(prober.charset_name(), Some("GB18030"));
    }

    #[test]
    fn test_split_character_keeps_window() {
        let mut whole = MultiByteProber::new(CjkEncoding::Gb18030, false);
        whole.handle_data(GB2312_TEXT);
        let mut split = MultiByteProber::new(CjkEncoding::Gb18030, false);
        split.handle_data(&GB2312_TEXT[..7]);
        split.handle_data(&GB2312_TEXT[7..]);
        assert_eq!(split.confidence(), whole.confidence());
    }

    #[test]
    fn test_sjis_lead_then_ascii_control_is_not_me() {
        let mut prober = MultiByteProber::new(CjkEncoding::ShiftJis, false);
        assert_eq!(prober.handle_data(b"\x88\x0a"), ProbingState::NotMe);
        assert_eq!(prober.handle_data(b"abc"), ProbingState::NotMe);
    }

    #[test]
    fn test_japanese_context_contributes() {
        // "これはにほんごのてきすとです" in EUC-JP.
        let text = "これはにほんごのてきすとです";
        let bytes: Vec<u8> = text
            .chars()
            .flat_map(|c| [0xA4, (0xA1 + (c as u32 - 0x3041)) as u8])
            .collect();
        let mut prober = MultiByteProber::new(CjkEncoding::EucJp, false);
        prober.handle_data(&bytes);
        assert_eq!(prober.state(), ProbingState::Detecting);
        assert!(prober.confidence() > 0.9);
    }
}
