//! Sub-styles: extra style numbers carved out for chosen identifier groups.
//!
//! A lexer names the base styles that can be subdivided (usually its identifier style). A host
//! allocates a block of style numbers for a base, then assigns a word list to each allocated
//! style. While lexing, a word styled with the base is looked up in the block's
//! [`WordClassifier`] and gets the sub-style when found.

use std::collections::HashMap;

/// First style number handed out by default.
pub const SUB_STYLES_FIRST: u8 = 0x80;
/// Number of style numbers available by default.
pub const SUB_STYLES_AVAILABLE: u8 = 0x40;

/// Word to sub-style mapping for one base style.
#[derive(Debug, Clone, Default)]
pub struct WordClassifier {
    base_style: u8,
    first_style: u8,
    len_styles: u8,
    word_to_style: HashMap<String, u8>,
}

impl WordClassifier {
    /// Create an empty classifier for `base_style`.
    pub fn new(base_style: u8) -> Self {
        Self {
            base_style,
            ..Self::default()
        }
    }

    fn allocate(&mut self, first_style: u8, len_styles: u8) {
        self.first_style = first_style;
        self.len_styles = len_styles;
        self.word_to_style.clear();
    }

    /// The style this classifier refines.
    pub fn base(&self) -> u8 {
        self.base_style
    }

    /// First allocated style.
    pub fn start(&self) -> u8 {
        self.first_style
    }

    /// Last allocated style; only meaningful when [`WordClassifier::length`] is non-zero.
    pub fn last(&self) -> u8 {
        (self.first_style + self.len_styles).saturating_sub(1)
    }

    /// Number of allocated styles.
    pub fn length(&self) -> u8 {
        self.len_styles
    }

    fn clear(&mut self) {
        self.first_style = 0;
        self.len_styles = 0;
        self.word_to_style.clear();
    }

    /// Sub-style assigned to `word`.
    pub fn value_for(&self, word: &str) -> Option<u8> {
        self.word_to_style.get(word).copied()
    }

    /// Whether `style` is inside the allocated block.
    pub fn includes_style(&self, style: u8) -> bool {
        style >= self.first_style && u16::from(style) < u16::from(self.first_style) + u16::from(self.len_styles)
    }

    /// Forget every word mapped to `style`.
    pub fn remove_style(&mut self, style: u8) {
        self.word_to_style.retain(|_, s| *s != style);
    }

    /// Map each whitespace-separated word of `identifiers` to `style`, replacing the words
    /// previously mapped to it.
    pub fn set_identifiers(&mut self, style: u8, identifiers: &str, lower_case: bool) {
        self.remove_style(style);
        for word in identifiers.split([' ', '\t', '\r', '\n']).filter(|w| !w.is_empty()) {
            let word = if lower_case {
                word.to_ascii_lowercase()
            } else {
                word.to_string()
            };
            self.word_to_style.insert(word, style);
        }
    }
}

/// Sub-style blocks for every sub-stylable base style of a lexer.
#[derive(Debug, Clone)]
pub struct SubStyles {
    style_first: u8,
    styles_available: u8,
    secondary_distance: u8,
    allocated: u8,
    classifiers: Vec<WordClassifier>,
}

impl SubStyles {
    /// Sub-styles for `bases` allocated from the default range.
    pub fn new(bases: &[u8]) -> Self {
        Self::with_range(bases, SUB_STYLES_FIRST, SUB_STYLES_AVAILABLE, 0)
    }

    /// Sub-styles for `bases` allocated from `style_first..style_first + styles_available`.
    pub fn with_range(bases: &[u8], style_first: u8, styles_available: u8, secondary_distance: u8) -> Self {
        Self {
            style_first,
            styles_available,
            secondary_distance,
            allocated: 0,
            classifiers: bases.iter().copied().map(WordClassifier::new).collect(),
        }
    }

    fn block_from_base_style(&self, base: u8) -> Option<usize> {
        self.classifiers.iter().position(|wc| wc.base() == base)
    }

    fn block_from_style(&self, style: u8) -> Option<usize> {
        self.classifiers.iter().position(|wc| wc.includes_style(style))
    }

    /// Base styles that can be subdivided.
    pub fn bases(&self) -> Vec<u8> {
        self.classifiers.iter().map(WordClassifier::base).collect()
    }

    /// Allocate `count` styles for `base`, returning the first. Fails when `base` is not
    /// sub-stylable or the range is exhausted.
    pub fn allocate(&mut self, base: u8, count: u8) -> Option<u8> {
        let block = self.block_from_base_style(base)?;
        if u16::from(self.allocated) + u16::from(count) > u16::from(self.styles_available) {
            return None;
        }
        let start = self.style_first + self.allocated;
        self.allocated += count;
        self.classifiers[block].allocate(start, count);
        Some(start)
    }

    /// First style allocated for `base`.
    pub fn start(&self, base: u8) -> Option<u8> {
        self.block_from_base_style(base)
            .map(|block| self.classifiers[block].start())
    }

    /// Number of styles allocated for `base`.
    pub fn length(&self, base: u8) -> u8 {
        self.block_from_base_style(base)
            .map_or(0, |block| self.classifiers[block].length())
    }

    /// Base of `sub_style`, or `sub_style` itself when it is not allocated.
    pub fn base_style(&self, sub_style: u8) -> u8 {
        self.block_from_style(sub_style)
            .map_or(sub_style, |block| self.classifiers[block].base())
    }

    /// Offset from a primary style to its secondary variant, 0 when there are none.
    pub fn distance_to_secondary_styles(&self) -> u8 {
        self.secondary_distance
    }

    /// Lowest allocated style.
    pub fn first_allocated(&self) -> Option<u8> {
        self.classifiers
            .iter()
            .filter(|wc| wc.length() > 0)
            .map(WordClassifier::start)
            .min()
    }

    /// Highest allocated style.
    pub fn last_allocated(&self) -> Option<u8> {
        self.classifiers
            .iter()
            .filter(|wc| wc.length() > 0)
            .map(WordClassifier::last)
            .max()
    }

    /// Assign `identifiers` to the allocated `style`. Unallocated styles are ignored.
    pub fn set_identifiers(&mut self, style: u8, identifiers: &str) {
        if let Some(block) = self.block_from_style(style) {
            self.classifiers[block].set_identifiers(style, identifiers, false);
        }
    }

    /// Release every allocation.
    pub fn free(&mut self) {
        self.allocated = 0;
        for wc in &mut self.classifiers {
            wc.clear();
        }
    }

    /// The classifier for `base`.
    pub fn classifier(&self, base: u8) -> Option<&WordClassifier> {
        self.block_from_base_style(base)
            .map(|block| &self.classifiers[block])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_classify() {
        let mut ss = SubStyles::new(&[11, 17]);
        assert_eq!(ss.allocate(5, 2), None);
        assert_eq!(ss.first_allocated(), None);

        let start = ss.allocate(11, 3).unwrap();
        assert_eq!(start, SUB_STYLES_FIRST);
        assert_eq!(ss.allocate(17, 1), Some(SUB_STYLES_FIRST + 3));
        assert_eq!(ss.length(11), 3);
        assert_eq!(ss.start(17), Some(SUB_STYLES_FIRST + 3));
        assert_eq!(ss.base_style(start + 2), 11);
        assert_eq!(ss.base_style(4), 4);
        assert_eq!(ss.first_allocated(), Some(SUB_STYLES_FIRST));
        assert_eq!(ss.last_allocated(), Some(SUB_STYLES_FIRST + 3));

        ss.set_identifiers(start, "vector map");
        ss.set_identifiers(start + 1, "string");
        let wc = ss.classifier(11).unwrap();
        assert_eq!(wc.value_for("map"), Some(start));
        assert_eq!(wc.value_for("string"), Some(start + 1));
        assert_eq!(wc.value_for("list"), None);

        ss.set_identifiers(start, "list");
        assert_eq!(ss.classifier(11).unwrap().value_for("map"), None);
    }

    #[test]
    fn test_exhaustion_and_free() {
        let mut ss = SubStyles::new(&[11]);
        assert!(ss.allocate(11, SUB_STYLES_AVAILABLE).is_some());
        assert_eq!(ss.allocate(11, 1), None);
        ss.free();
        assert_eq!(ss.length(11), 0);
        assert_eq!(ss.allocate(11, 1), Some(SUB_STYLES_FIRST));
    }
}
