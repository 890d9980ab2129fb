#![warn(missing_docs)]
//! `editor-core-chardet` - charset detection for files of unknown encoding.
//!
//! # Overview
//!
//! Independent probers each track one charset (or one family) over a stream of byte chunks and
//! report a [`ProbingState`] and a confidence:
//!
//! - [`Utf8Prober`] and the CJK [`MultiByteProber`]s validate byte sequences with a
//!   [`CodingStateMachine`] and score two-byte characters by frequency
//!   ([`CharDistributionAnalysis`], plus [`JapaneseContextAnalysis`] for Japanese).
//! - [`EscCharsetProber`] recognises HZ-GB-2312 and the ISO-2022 family by their escape sequences.
//! - [`Latin1Prober`], [`SingleByteCharsetProber`] and [`HebrewProber`] score single-byte text
//!   against the letter pair models in [`lang_models`].
//!
//! [`MbcsGroupProber`] and [`SbcsGroupProber`] fan chunks out to their members, and
//! [`UniversalDetector`] sequences everything and names the result.
//!
//! ```
//! use editor_core_chardet::detect;
//!
//! let detection = detect("Grüße aus Köln".as_bytes()).unwrap();
//! assert_eq!(detection.charset, "UTF-8");
//! ```

pub mod detector;
pub mod distribution;
pub mod esc;
pub mod filter;
mod freq_tables;
pub mod group;
pub mod hebrew;
pub mod jp_context;
pub mod lang_models;
pub mod latin1;
pub mod mbcs;
pub mod models;
pub mod prober;
pub mod sbcs;
pub mod state_machine;
pub mod utf8;

pub use detector::{ASCII_NAME, InputState, MINIMUM_THRESHOLD, UniversalDetector};
pub use distribution::{CharDistributionAnalysis, CjkEncoding};
pub use esc::EscCharsetProber;
pub use filter::{LanguageFilter, filter_with_english_letters, filter_without_english_letters};
pub use group::{MbcsGroupProber, SbcsGroupProber, SingleByteModels};
pub use hebrew::{HebrewProber, LOGICAL_HEBREW_NAME, VISUAL_HEBREW_NAME};
pub use jp_context::JapaneseContextAnalysis;
pub use latin1::Latin1Prober;
pub use mbcs::MultiByteProber;
pub use prober::{CharsetProber, ProbingState, SHORTCUT_THRESHOLD};
pub use sbcs::{SequenceModel, SingleByteCharsetProber};
pub use state_machine::{CodingStateMachine, MachineState, SmModel};
pub use utf8::Utf8Prober;

/// Result of [`detect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Charset name, such as `"UTF-8"`, `"Shift_JIS"` or `"ASCII"`.
    pub charset: &'static str,
    /// Confidence in `[0, 1]`.
    pub confidence: f32,
}

/// Detect the charset of a whole buffer with every language enabled.
///
/// Returns `None` when no charset is confident enough, including for empty input.
pub fn detect(bytes: &[u8]) -> Option<Detection> {
    let mut detector = UniversalDetector::new(LanguageFilter::ALL);
    detector.handle_data(bytes);
    detector.data_end();
    detector.charset().map(|charset| Detection {
        charset,
        confidence: detector.confidence(),
    })
}
