//! The prober protocol shared by every charset detector.

use std::fmt;

/// Confidence above which a prober may claim its charset before the input ends.
pub const SHORTCUT_THRESHOLD: f32 = 0.95;

/// Progress of a prober.
///
/// `FoundIt` and `NotMe` are terminal: once reached, [`CharsetProber::handle_data`] returns the
/// same state again and [`CharsetProber::confidence`] stops changing until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProbingState {
    /// Still looking.
    #[default]
    Detecting,
    /// The input is in this prober's charset.
    FoundIt,
    /// The input is not in this prober's charset.
    NotMe,
}

impl ProbingState {
    /// Whether the state is terminal.
    pub fn is_terminal(self) -> bool {
        self != Self::Detecting
    }
}

impl fmt::Display for ProbingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Detecting => "detecting",
            Self::FoundIt => "found_it",
            Self::NotMe => "not_me",
        })
    }
}

/// One charset detector fed with successive chunks of a stream.
pub trait CharsetProber: fmt::Debug {
    /// Charset name reported when this prober wins, `None` for a group that has no candidate.
    fn charset_name(&self) -> Option<&'static str>;

    /// Consume the next chunk and return the resulting state.
    fn handle_data(&mut self, buf: &[u8]) -> ProbingState;

    /// Current state.
    fn state(&self) -> ProbingState;

    /// Forget everything seen so far.
    fn reset(&mut self);

    /// Confidence in `[0, 1]`; defined before any data is seen.
    fn confidence(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!ProbingState::Detecting.is_terminal());
        assert!(ProbingState::FoundIt.is_terminal());
        assert!(ProbingState::NotMe.is_terminal());
        assert_eq!(ProbingState::default(), ProbingState::Detecting);
        assert_eq!(ProbingState::NotMe.to_string(), "not_me");
    }
}
