//! Byte-level coding state machines.

/// Machine state: ready for the first byte of a character.
pub const START: u8 = 0;
/// Machine state: the bytes seen cannot be in this encoding.
pub const ERROR: u8 = 1;
/// Machine state: the bytes seen can only be in this encoding.
pub const ITS_ME: u8 = 2;

/// Transition tables for one encoding.
#[derive(Debug, Clone, Copy)]
pub struct SmModel {
    /// Byte class for every byte value.
    pub class_table: &'static [u8; 256],
    /// Number of byte classes; the width of one state row.
    pub class_factor: usize,
    /// Next state, indexed by `state * class_factor + class`.
    pub state_table: &'static [u8],
    /// Character length implied by the class of a character's first byte.
    pub char_len_table: &'static [u8],
    /// Canonical charset name.
    pub name: &'static str,
}

/// Outcome of feeding one byte, see [`CodingStateMachine::next_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    /// A character boundary was reached.
    Start,
    /// The byte is illegal here.
    Error,
    /// The byte sequence identifies the encoding.
    ItsMe,
    /// Inside a multi-byte character or escape sequence.
    Pending(u8),
}

impl MachineState {
    fn from_raw(raw: u8) -> Self {
        match raw {
            START => Self::Start,
            ERROR => Self::Error,
            ITS_ME => Self::ItsMe,
            other => Self::Pending(other),
        }
    }
}

/// Runs an [`SmModel`] over a byte stream.
#[derive(Debug, Clone)]
pub struct CodingStateMachine {
    model: &'static SmModel,
    current: u8,
    char_len: usize,
}

impl CodingStateMachine {
    /// Create a machine in the start state.
    pub fn new(model: &'static SmModel) -> Self {
        Self {
            model,
            current: START,
            char_len: 0,
        }
    }

    /// Return to the start state.
    pub fn reset(&mut self) {
        self.current = START;
    }

    /// Feed one byte.
    ///
    /// Table entries that fall outside the model are treated as [`MachineState::Error`].
    pub fn next_state(&mut self, byte: u8) -> MachineState {
        let class = usize::from(self.model.class_table[usize::from(byte)]);
        if self.current == START {
            self.char_len = self
                .model
                .char_len_table
                .get(class)
                .map_or(0, |&len| usize::from(len));
        }
        let index = usize::from(self.current) * self.model.class_factor + class;
        self.current = self.model.state_table.get(index).copied().unwrap_or(ERROR);
        MachineState::from_raw(self.current)
    }

    /// Length of the character being decoded, as implied by its first byte.
    pub fn current_char_len(&self) -> usize {
        self.char_len
    }

    /// Charset name of the model.
    pub fn name(&self) -> &'static str {
        self.model.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;

    fn run(model: &'static SmModel, bytes: &[u8]) -> Vec<MachineState> {
        let mut sm = CodingStateMachine::new(model);
        bytes.iter().map(|&b| sm.next_state(b)).collect()
    }

    #[test]
    fn test_utf8_two_byte_sequence() {
        let states = run(&models::UTF8, "é".as_bytes());
        assert_eq!(states.last(), Some(&MachineState::Start));
        assert!(matches!(states[0], MachineState::Pending(_)));
    }

    #[test]
    fn test_utf8_rejects_lone_continuation() {
        assert_eq!(run(&models::UTF8, &[0x80]), vec![MachineState::Error]);
    }

    #[test]
    fn test_char_len_follows_lead_byte() {
        let mut sm = CodingStateMachine::new(&models::UTF8);
        sm.next_state(0xE4);
        assert_eq!(sm.current_char_len(), 3);
        sm.next_state(0xB8);
        sm.next_state(0xAD);
        sm.next_state(b'a');
        assert_eq!(sm.current_char_len(), 1);
    }

    #[test]
    fn test_iso_2022_jp_escape_is_its_me() {
        let states = run(&models::ISO_2022_JP, b"\x1b$B");
        assert_eq!(states.last(), Some(&MachineState::ItsMe));
    }

    #[test]
    fn test_models_are_consistent() {
        for model in [
            &models::UTF8,
            &models::SHIFT_JIS,
            &models::EUC_JP,
            &models::GB18030,
            &models::EUC_KR,
            &models::BIG5,
            &models::EUC_TW,
            &models::HZ_GB_2312,
            &models::ISO_2022_CN,
            &models::ISO_2022_JP,
            &models::ISO_2022_KR,
        ] {
            assert_eq!(model.char_len_table.len(), model.class_factor, "{}", model.name);
            assert_eq!(model.state_table.len() % model.class_factor, 0, "{}", model.name);
            let states = model.state_table.len() / model.class_factor;
            assert!(model.class_table.iter().all(|&c| usize::from(c) < model.class_factor));
            assert!(model.state_table.iter().all(|&s| usize::from(s) < states), "{}", model.name);
        }
    }
}
