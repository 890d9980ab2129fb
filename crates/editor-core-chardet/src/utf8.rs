//! UTF-8 validity prober.

use tracing::debug;

use crate::models;
use crate::prober::{CharsetProber, ProbingState, SHORTCUT_THRESHOLD};
use crate::state_machine::{CodingStateMachine, MachineState};

/// Multi-byte characters after which the confidence stops growing.
const MULTI_BYTE_SATURATION: u32 = 6;

/// Confirms UTF-8 by decoding, with confidence growing with each multi-byte character.
#[derive(Debug, Clone)]
pub struct Utf8Prober {
    sm: CodingStateMachine,
    state: ProbingState,
    multi_byte_chars: u32,
}

impl Default for Utf8Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl Utf8Prober {
    /// Create a prober.
    pub fn new() -> Self {
        Self {
            sm: CodingStateMachine::new(&models::UTF8),
            state: ProbingState::Detecting,
            multi_byte_chars: 0,
        }
    }

    fn set_state(&mut self, state: ProbingState) {
        debug!(charset = "UTF-8", %state, "prober state changed");
        self.state = state;
    }
}

impl CharsetProber for Utf8Prober {
    fn charset_name(&self) -> Option<&'static str> {
        Some("UTF-8")
    }

    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        if self.state.is_terminal() {
            return self.state;
        }
        for &b in buf {
            match self.sm.next_state(b) {
                MachineState::ItsMe => {
                    self.set_state(ProbingState::FoundIt);
                    return self.state;
                }
                MachineState::Error => {
                    self.set_state(ProbingState::NotMe);
                    return self.state;
                }
                MachineState::Start if self.sm.current_char_len() >= 2 => {
                    self.multi_byte_chars += 1;
                }
                _ => {}
            }
        }
        if self.confidence() > SHORTCUT_THRESHOLD {
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
        self.multi_byte_chars = 0;
    }

    fn confidence(&self) -> f32 {
        if self.multi_byte_chars < MULTI_BYTE_SATURATION {
            1.0 - 0.99 * 0.5f32.powi(self.multi_byte_chars as i32)
        } else {
            0.99
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_grows_with_multi_byte_chars() {
        let mut prober = Utf8Prober::new();
        assert!((prober.confidence() - 0.01).abs() < 1e-6);
        assert_eq!(prober.handle_data("héllo".as_bytes()), ProbingState::Detecting);
        assert!((prober.confidence() - 0.505).abs() < 1e-6);
        prober.handle_data("wörld".as_bytes());
        assert!((prober.confidence() - 0.7525).abs() < 1e-6);
    }

    #[test]
    fn test_six_multi_byte_chars_is_found() {
        let mut prober = Utf8Prober::new();
        assert_eq!(prober.handle_data("日本語のテキ".as_bytes()), ProbingState::FoundIt);
        assert_eq!(prober.confidence(), 0.99);
    }

    #[test]
    fn test_invalid_sequence_is_not_me() {
        let mut prober = Utf8Prober::new();
        assert_eq!(prober.handle_data(b"caf\xe9 au lait"), ProbingState::NotMe);
        assert_eq!(prober.handle_data("é".as_bytes()), ProbingState::NotMe);
        prober.reset();
        assert_eq!(prober.state(), ProbingState::Detecting);
    }

    #[test]
    fn test_sequence_split_across_chunks() {
        let mut prober = Utf8Prober::new();
        let bytes = "é".as_bytes();
        prober.handle_data(&bytes[..1]);
        assert_eq!(prober.handle_data(&bytes[1..]), ProbingState::Detecting);
        assert!((prober.confidence() - 0.505).abs() < 1e-6);
    }
}
