//! Escape-sequence encodings: HZ-GB-2312 and the ISO-2022 family.

use tracing::debug;

use crate::distribution::{SURE_NO, SURE_YES};
use crate::filter::LanguageFilter;
use crate::models;
use crate::prober::{CharsetProber, ProbingState};
use crate::state_machine::{CodingStateMachine, MachineState};

/// Runs one state machine per escape encoding allowed by the filter; the first to recognise
/// its designator sequence wins.
#[derive(Debug, Clone)]
pub struct EscCharsetProber {
    machines: Vec<CodingStateMachine>,
    active: Vec<bool>,
    state: ProbingState,
    detected: Option<&'static str>,
}

impl EscCharsetProber {
    /// Create a prober with the machines `filter` allows.
    pub fn new(filter: LanguageFilter) -> Self {
        let mut machines = Vec::new();
        if filter.contains(LanguageFilter::CHINESE_SIMPLIFIED) {
            machines.push(CodingStateMachine::new(&models::HZ_GB_2312));
            machines.push(CodingStateMachine::new(&models::ISO_2022_CN));
        }
        if filter.contains(LanguageFilter::JAPANESE) {
            machines.push(CodingStateMachine::new(&models::ISO_2022_JP));
        }
        if filter.contains(LanguageFilter::KOREAN) {
            machines.push(CodingStateMachine::new(&models::ISO_2022_KR));
        }
        let active = vec![true; machines.len()];
        let state = if machines.is_empty() {
            ProbingState::NotMe
        } else {
            ProbingState::Detecting
        };
        Self {
            machines,
            active,
            state,
            detected: None,
        }
    }

    fn set_state(&mut self, state: ProbingState) {
        debug!(charset = ?self.detected, %state, "escape prober state changed");
        self.state = state;
    }
}

impl CharsetProber for EscCharsetProber {
    fn charset_name(&self) -> Option<&'static str> {
        self.detected
    }

    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        for &b in buf {
            if self.state.is_terminal() {
                break;
            }
            let mut found = None;
            for (sm, active) in self.machines.iter_mut().zip(self.active.iter_mut()) {
                if !*active {
                    continue;
                }
                match sm.next_state(b) {
                    MachineState::ItsMe => {
                        found = Some(sm.name());
                        break;
                    }
                    MachineState::Error => *active = false,
                    _ => {}
                }
            }
            if found.is_some() {
                self.detected = found;
                self.set_state(ProbingState::FoundIt);
                return self.state;
            }
            if !self.active.contains(&true) {
                self.set_state(ProbingState::NotMe);
            }
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn reset(&mut self) {
        for sm in &mut self.machines {
            sm.reset();
        }
        self.active.fill(true);
        self.detected = None;
        self.state = if self.machines.is_empty() {
            ProbingState::NotMe
        } else {
            ProbingState::Detecting
        };
    }

    fn confidence(&self) -> f32 {
        match self.state {
            ProbingState::FoundIt => SURE_YES,
            _ => SURE_NO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_2022_jp() {
        let mut prober = EscCharsetProber::new(LanguageFilter::ALL);
        assert_eq!(prober.handle_data(b"abc \x1b$B$3$s"), ProbingState::FoundIt);
        assert_eq!(prober.charset_name(), Some("ISO-2022-JP"));
        assert_eq!(prober.confidence(), SURE_YES);
    }

    #[test]
    fn test_iso_2022_kr_split_across_chunks() {
        let mut prober = EscCharsetProber::new(LanguageFilter::KOREAN);
        assert_eq!(prober.handle_data(b"x\x1b$"), ProbingState::Detecting);
        assert_eq!(prober.handle_data(b")C"), ProbingState::FoundIt);
        assert_eq!(prober.charset_name(), Some("ISO-2022-KR"));
    }

    #[test]
    fn test_no_machines_is_not_me() {
        let mut prober = EscCharsetProber::new(LanguageFilter::NON_CJK);
        assert_eq!(prober.state(), ProbingState::NotMe);
        assert_eq!(prober.handle_data(b"\x1b$B"), ProbingState::NotMe);
        assert_eq!(prober.charset_name(), None);
    }
}
