//! Built-in single-byte language models.
//!
//! Every model pairs a byte-to-order map for one charset with the letter pair categories of its
//! language; charsets of the same language share the pair table. All of them treat ASCII letters
//! as foreign, so plain English never scores.

mod bulgarian;
mod cyrillic;
mod greek;
mod hebrew;
mod thai;

use crate::sbcs::SequenceModel;

pub use bulgarian::{ISO_8859_5_BULGARIAN, WINDOWS_1251_BULGARIAN};
pub use cyrillic::{
    IBM855_RUSSIAN, IBM866_RUSSIAN, ISO_8859_5_RUSSIAN, KOI8_R_RUSSIAN, MAC_CYRILLIC_RUSSIAN,
    WINDOWS_1251_RUSSIAN,
};
pub use greek::{ISO_8859_7_GREEK, WINDOWS_1253_GREEK};
pub use hebrew::WINDOWS_1255_HEBREW;
pub use thai::TIS_620_THAI;

/// Models probed in text order by the default single-byte group, in tie-breaking order.
pub static BUILTIN: [&SequenceModel; 11] = [
    &WINDOWS_1251_RUSSIAN,
    &KOI8_R_RUSSIAN,
    &ISO_8859_5_RUSSIAN,
    &MAC_CYRILLIC_RUSSIAN,
    &IBM866_RUSSIAN,
    &IBM855_RUSSIAN,
    &ISO_8859_7_GREEK,
    &WINDOWS_1253_GREEK,
    &ISO_8859_5_BULGARIAN,
    &WINDOWS_1251_BULGARIAN,
    &TIS_620_THAI,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbcs::{SAMPLE_SIZE, SYMBOL_CAT_ORDER};

    #[test]
    fn test_models_are_well_formed() {
        for model in BUILTIN.iter().copied().chain([&WINDOWS_1255_HEBREW]) {
            assert_eq!(model.precedence_matrix.len(), SAMPLE_SIZE * SAMPLE_SIZE);
            assert!(model.precedence_matrix.iter().all(|&cat| cat < 4), "{}", model.charset_name);
            // Orders count from 1, and almost every frequent order belongs to some byte.
            assert!(!model.char_to_order_map.contains(&0));
            let reachable = (1..SAMPLE_SIZE as u8)
                .filter(|order| model.char_to_order_map.contains(order))
                .count();
            assert!(reachable >= 60, "{}: {reachable}", model.charset_name);
            // ASCII digits never count as letters.
            assert!(model.char_to_order_map[usize::from(b'7')] >= SYMBOL_CAT_ORDER);
        }
    }
}
