//! Group probers fanning input out to their members.

use tracing::debug;

use crate::distribution::{CjkEncoding, SURE_NO, SURE_YES};
use crate::filter::{LanguageFilter, filter_without_english_letters};
use crate::hebrew::HebrewProber;
use crate::lang_models;
use crate::mbcs::MultiByteProber;
use crate::prober::{CharsetProber, ProbingState};
use crate::sbcs::{SequenceModel, SingleByteCharsetProber};
use crate::utf8::Utf8Prober;

/// Members of a group with their activity flags and the group state.
#[derive(Debug)]
struct Members {
    group: &'static str,
    probers: Vec<Box<dyn CharsetProber>>,
    active: Vec<bool>,
    best_guess: Option<usize>,
    state: ProbingState,
}

impl Members {
    fn new(group: &'static str, probers: Vec<Box<dyn CharsetProber>>) -> Self {
        let mut members = Self {
            group,
            active: vec![true; probers.len()],
            probers,
            best_guess: None,
            state: ProbingState::Detecting,
        };
        members.reset();
        members
    }

    fn reset(&mut self) {
        for (prober, active) in self.probers.iter_mut().zip(self.active.iter_mut()) {
            prober.reset();
            *active = true;
        }
        self.best_guess = None;
        self.state = if self.probers.is_empty() {
            ProbingState::NotMe
        } else {
            ProbingState::Detecting
        };
    }

    fn set_state(&mut self, state: ProbingState) {
        debug!(
            group = self.group,
            charset = ?self.charset_name(),
            %state,
            "group state changed"
        );
        self.state = state;
    }

    /// Feed `buf` to every active member.
    fn feed(&mut self, buf: &[u8]) -> ProbingState {
        for i in 0..self.probers.len() {
            if !self.active[i] {
                continue;
            }
            match self.probers[i].handle_data(buf) {
                ProbingState::FoundIt => {
                    self.best_guess = Some(i);
                    self.set_state(ProbingState::FoundIt);
                    return self.state;
                }
                ProbingState::NotMe => {
                    self.active[i] = false;
                    if !self.active.contains(&true) {
                        self.set_state(ProbingState::NotMe);
                        return self.state;
                    }
                }
                ProbingState::Detecting => {}
            }
        }
        self.state
    }

    /// Index of the most confident active member; the first wins ties.
    fn best(&self) -> Option<usize> {
        if self.state == ProbingState::FoundIt {
            return self.best_guess;
        }
        let mut best: Option<(usize, f32)> = None;
        for (i, prober) in self.probers.iter().enumerate() {
            if !self.active[i] {
                continue;
            }
            let confidence = prober.confidence();
            if best.is_none_or(|(_, top)| top < confidence) {
                best = Some((i, confidence));
            }
        }
        best.map(|(i, _)| i)
    }

    fn charset_name(&self) -> Option<&'static str> {
        self.best()
            .or(if self.probers.is_empty() { None } else { Some(0) })
            .and_then(|i| self.probers[i].charset_name())
    }

    fn confidence(&self) -> f32 {
        match self.state {
            ProbingState::FoundIt => SURE_YES,
            ProbingState::NotMe => SURE_NO,
            ProbingState::Detecting => self
                .best()
                .map_or(0.0, |i| self.probers[i].confidence()),
        }
    }
}

/// UTF-8 and the CJK multi-byte probers the language filter allows.
///
/// Only runs of high bytes, plus up to two bytes after each, reach the members.
#[derive(Debug)]
pub struct MbcsGroupProber {
    members: Members,
    keep_next: usize,
}

impl MbcsGroupProber {
    /// Create the group for `filter`.
    pub fn new(filter: LanguageFilter) -> Self {
        let mut probers: Vec<Box<dyn CharsetProber>> = vec![Box::new(Utf8Prober::new())];
        let mut add = |language: LanguageFilter, encodings: &[CjkEncoding]| {
            if filter.contains(language) {
                let preferred = filter == language;
                for &encoding in encodings {
                    probers.push(Box::new(MultiByteProber::new(encoding, preferred)));
                }
            }
        };
        add(LanguageFilter::JAPANESE, &[CjkEncoding::ShiftJis, CjkEncoding::EucJp]);
        add(LanguageFilter::CHINESE_SIMPLIFIED, &[CjkEncoding::Gb18030]);
        add(LanguageFilter::KOREAN, &[CjkEncoding::EucKr]);
        add(
            LanguageFilter::CHINESE_TRADITIONAL,
            &[CjkEncoding::Big5, CjkEncoding::EucTw],
        );
        Self {
            members: Members::new("mbcs", probers),
            keep_next: 0,
        }
    }

    /// Number of member probers.
    pub fn len(&self) -> usize {
        self.members.probers.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.probers.is_empty()
    }
}

impl CharsetProber for MbcsGroupProber {
    fn charset_name(&self) -> Option<&'static str> {
        self.members.charset_name()
    }

    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        if self.members.state.is_terminal() {
            return self.members.state;
        }
        let mut start = 0;
        let mut keep_next = self.keep_next;
        for (pos, &b) in buf.iter().enumerate() {
            if b & 0x80 != 0 {
                if keep_next == 0 {
                    start = pos;
                }
                keep_next = 2;
            } else if keep_next > 0 {
                keep_next -= 1;
                if keep_next == 0 && self.members.feed(&buf[start..=pos]).is_terminal() {
                    return self.members.state;
                }
            }
        }
        if keep_next > 0 && self.members.feed(&buf[start..]).is_terminal() {
            return self.members.state;
        }
        self.keep_next = keep_next;
        self.members.state
    }

    fn state(&self) -> ProbingState {
        self.members.state
    }

    fn reset(&mut self) {
        self.members.reset();
        self.keep_next = 0;
    }

    fn confidence(&self) -> f32 {
        self.members.confidence()
    }
}

/// Models for the single-byte group.
///
/// The default set is [`SingleByteModels::builtin`].
#[derive(Debug, Clone)]
pub struct SingleByteModels {
    /// Language models probed in text order.
    pub models: Vec<&'static SequenceModel>,
    /// windows-1255 model used for logical and visual Hebrew.
    pub hebrew: Option<&'static SequenceModel>,
}

impl SingleByteModels {
    /// Russian, Greek, Bulgarian, Thai and Hebrew.
    pub fn builtin() -> Self {
        Self {
            models: lang_models::BUILTIN.to_vec(),
            hebrew: Some(&lang_models::WINDOWS_1255_HEBREW),
        }
    }

    /// No models; the single-byte group rejects everything.
    pub fn none() -> Self {
        Self {
            models: Vec::new(),
            hebrew: None,
        }
    }
}

impl Default for SingleByteModels {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Single-byte probers over a set of language models.
///
/// Chunks without any high byte are skipped; the members see the chunk only if some word in it
/// has one.
#[derive(Debug)]
pub struct SbcsGroupProber {
    members: Members,
}

impl SbcsGroupProber {
    /// Create the group; it is `NotMe` from the start when `models` is empty.
    pub fn new(models: &SingleByteModels) -> Self {
        let mut probers: Vec<Box<dyn CharsetProber>> = models
            .models
            .iter()
            .map(|&model| Box::new(SingleByteCharsetProber::new(model)) as Box<dyn CharsetProber>)
            .collect();
        if let Some(hebrew) = models.hebrew {
            probers.push(Box::new(HebrewProber::new(hebrew)));
        }
        Self {
            members: Members::new("sbcs", probers),
        }
    }
}

impl CharsetProber for SbcsGroupProber {
    fn charset_name(&self) -> Option<&'static str> {
        self.members.charset_name()
    }

    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        if self.members.state.is_terminal() {
            return self.members.state;
        }
        if filter_without_english_letters(buf).is_empty() {
            return self.members.state;
        }
        self.members.feed(buf)
    }

    fn state(&self) -> ProbingState {
        self.members.state
    }

    fn reset(&mut self) {
        self.members.reset();
    }

    fn confidence(&self) -> f32 {
        self.members.confidence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbcs::tests::cyrillic_model;

    #[test]
    fn test_mbcs_members_follow_filter() {
        assert_eq!(MbcsGroupProber::new(LanguageFilter::ALL).len(), 7);
        assert_eq!(MbcsGroupProber::new(LanguageFilter::KOREAN).len(), 2);
        assert_eq!(MbcsGroupProber::new(LanguageFilter::NON_CJK).len(), 1);
    }

    #[test]
    fn test_mbcs_prefers_utf8_on_ties() {
        let group = MbcsGroupProber::new(LanguageFilter::ALL);
        assert_eq!(group.charset_name(), Some("UTF-8"));
    }

    #[test]
    fn test_mbcs_utf8_found() {
        let mut group = MbcsGroupProber::new(LanguageFilter::ALL);
        let state = group.handle_data("Grüße aus Köln, schöne Größe".as_bytes());
        assert_eq!(state, ProbingState::FoundIt);
        assert_eq!(group.charset_name(), Some("UTF-8"));
        assert_eq!(group.confidence(), SURE_YES);
    }

    #[test]
    fn test_mbcs_all_members_rejected() {
        let mut group = MbcsGroupProber::new(LanguageFilter::NON_CJK);
        assert_eq!(group.handle_data(b"caf\xe9 au lait"), ProbingState::NotMe);
        assert_eq!(group.confidence(), SURE_NO);
        assert_eq!(group.handle_data("é".as_bytes()), ProbingState::NotMe);
    }

    #[test]
    fn test_sbcs_without_models_is_not_me() {
        let group = SbcsGroupProber::new(&SingleByteModels::none());
        assert_eq!(group.state(), ProbingState::NotMe);
        assert_eq!(group.charset_name(), None);
    }

    #[test]
    fn test_default_models_are_builtin() {
        let models = SingleByteModels::default();
        assert_eq!(models.models.len(), lang_models::BUILTIN.len());
        assert_eq!(models.hebrew.map(|model| model.charset_name), Some("windows-1255"));
        let group = SbcsGroupProber::new(&models);
        assert_eq!(group.state(), ProbingState::Detecting);
    }

    #[test]
    fn test_sbcs_skips_plain_ascii() {
        let mut group = SbcsGroupProber::new(&SingleByteModels {
            models: vec![cyrillic_model()],
            hebrew: None,
        });
        assert_eq!(group.handle_data(b"plain ascii"), ProbingState::Detecting);
        assert_eq!(group.confidence(), SURE_NO);
        group.handle_data(b"\xef\xf0\xe8\xe2\xe5\xf2 \xec\xe8\xf0");
        assert_eq!(group.charset_name(), Some("windows-1251"));
        assert_eq!(group.confidence(), SURE_YES);
    }
}
