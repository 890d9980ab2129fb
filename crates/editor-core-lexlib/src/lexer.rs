//! The lexer object protocol and the adapter for function-style lexers.

use crate::accessor::LexAccessor;
use crate::document::Document;
use crate::module::LexerModule;
use crate::option_set::PropertyType;
use crate::property_set::PropertySet;
use crate::sub_styles::SubStyles;
use crate::word_list::WordList;
use tracing::{debug, trace};

/// Styling entry point of a function-style lexer.
///
/// Called with the range to style, the style in effect just before `start` and the lexer's
/// keyword lists.
pub type LexFunction = fn(start: usize, length: usize, init_style: u8, keywords: &[WordList], styler: &mut LexAccessor<'_>);

/// Folding entry point of a function-style lexer. Same arguments as [`LexFunction`].
pub type FoldFunction = LexFunction;

/// A configured lexer instance.
///
/// Every instance owns its configuration, so two documents in the same language can be set up
/// independently.
///
/// `property_set` and `word_list_set` return the position from which the document must be
/// re-lexed, or `None` when the change has no effect on styling.
pub trait Lexer: Send {
    /// Language name, as registered in the catalogue.
    fn name(&self) -> &'static str;

    /// Numeric language identifier.
    fn id(&self) -> i32;

    /// Properties the lexer understands. Function-style lexers accept any property and report
    /// none.
    fn property_names(&self) -> &[&'static str];

    /// Type of property `name`.
    fn property_type(&self, name: &str) -> PropertyType;

    /// Description of property `name`.
    fn describe_property(&self, name: &str) -> &str;

    /// Set property `key` to `val`.
    fn property_set(&mut self, key: &str, val: &str) -> Option<usize>;

    /// Current text of property `key`.
    fn property_get(&self, key: &str) -> Option<String>;

    /// Descriptions of the keyword lists, in index order.
    fn describe_word_list_sets(&self) -> &[&'static str];

    /// Replace keyword list `index`.
    fn word_list_set(&mut self, index: usize, words: &str) -> Option<usize>;

    /// Style `start..start + length`, beginning in `init_style`.
    fn lex(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document);

    /// Compute fold levels for the lines of `start..start + length`.
    fn fold(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document);

    /// Number of named styles.
    fn named_styles(&self) -> usize;

    /// Name of `style`, empty when unnamed.
    fn name_of_style(&self, style: u8) -> &'static str;

    /// Sub-style blocks, when the lexer supports them.
    fn sub_styles(&self) -> Option<&SubStyles> {
        None
    }

    /// Mutable sub-style blocks, when the lexer supports them.
    fn sub_styles_mut(&mut self) -> Option<&mut SubStyles> {
        None
    }

    /// Base styles that can be subdivided.
    fn sub_style_bases(&self) -> Vec<u8> {
        self.sub_styles().map(SubStyles::bases).unwrap_or_default()
    }

    /// Allocate `count` sub-styles of `base`, returning the first.
    fn allocate_sub_styles(&mut self, base: u8, count: u8) -> Option<u8> {
        self.sub_styles_mut()?.allocate(base, count)
    }

    /// First sub-style allocated for `base`.
    fn sub_styles_start(&self, base: u8) -> Option<u8> {
        self.sub_styles()?.start(base)
    }

    /// Number of sub-styles allocated for `base`.
    fn sub_styles_length(&self, base: u8) -> u8 {
        self.sub_styles().map_or(0, |ss| ss.length(base))
    }

    /// Base style of `sub_style`.
    fn style_from_sub_style(&self, sub_style: u8) -> u8 {
        self.sub_styles()
            .map_or(sub_style, |ss| ss.base_style(sub_style))
    }

    /// The primary style of a possibly secondary style.
    fn primary_style_from_style(&self, style: u8) -> u8 {
        style
    }

    /// Release all sub-styles.
    fn free_sub_styles(&mut self) {
        if let Some(ss) = self.sub_styles_mut() {
            ss.free();
        }
    }

    /// Assign the words of `identifiers` to sub-style `style`.
    fn set_identifiers(&mut self, style: u8, identifiers: &str) {
        if let Some(ss) = self.sub_styles_mut() {
            ss.set_identifiers(style, identifiers);
        }
    }
}

/// [`Lexer`] adapter for a function-style [`LexerModule`].
///
/// Properties are kept in a [`PropertySet`] made available to the functions through
/// [`LexAccessor::get_property_int`]. Folding only runs while the `fold` property is set.
pub struct LexerSimple {
    module: &'static LexerModule,
    lex: LexFunction,
    fold: Option<FoldFunction>,
    props: PropertySet,
    word_lists: Vec<WordList>,
}

impl LexerSimple {
    /// Create an unconfigured instance of `module`.
    pub fn new(module: &'static LexerModule, lex: LexFunction, fold: Option<FoldFunction>) -> Self {
        Self {
            module,
            lex,
            fold,
            props: PropertySet::new(),
            word_lists: vec![WordList::new(); module.word_list_descriptions().len()],
        }
    }

    /// The instance's properties.
    pub fn properties(&self) -> &PropertySet {
        &self.props
    }

    /// The instance's keyword lists.
    pub fn word_lists(&self) -> &[WordList] {
        &self.word_lists
    }
}

impl Lexer for LexerSimple {
    fn name(&self) -> &'static str {
        self.module.name()
    }

    fn id(&self) -> i32 {
        self.module.id()
    }

    fn property_names(&self) -> &[&'static str] {
        &[]
    }

    fn property_type(&self, _name: &str) -> PropertyType {
        PropertyType::Boolean
    }

    fn describe_property(&self, _name: &str) -> &str {
        ""
    }

    fn property_set(&mut self, key: &str, val: &str) -> Option<usize> {
        if self.props.set(key, val) {
            debug!(lexer = self.module.name(), key, val, "property changed");
            Some(0)
        } else {
            None
        }
    }

    fn property_get(&self, key: &str) -> Option<String> {
        self.props.get(key).map(str::to_string)
    }

    fn describe_word_list_sets(&self) -> &[&'static str] {
        self.module.word_list_descriptions()
    }

    fn word_list_set(&mut self, index: usize, words: &str) -> Option<usize> {
        let list = self.word_lists.get_mut(index)?;
        if list.set(words, false) {
            debug!(lexer = self.module.name(), index, words = list.len(), "word list changed");
            Some(0)
        } else {
            None
        }
    }

    fn lex(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document) {
        trace!(lexer = self.module.name(), start, length, init_style, "lex");
        let mut styler = LexAccessor::with_properties(doc, &self.props);
        (self.lex)(start, length, init_style, &self.word_lists, &mut styler);
        styler.flush();
    }

    fn fold(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document) {
        let Some(fold) = self.fold else {
            return;
        };
        if self.props.get_int("fold", 0) == 0 {
            return;
        }
        trace!(lexer = self.module.name(), start, length, init_style, "fold");
        let mut styler = LexAccessor::with_properties(doc, &self.props);
        fold(start, length, init_style, &self.word_lists, &mut styler);
        styler.flush();
    }

    fn named_styles(&self) -> usize {
        self.module.named_styles()
    }

    fn name_of_style(&self, style: u8) -> &'static str {
        self.module.name_of_style(style)
    }
}
