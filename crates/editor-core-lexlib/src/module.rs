//! Lexer registration: [`LexerModule`] describes one language, [`Catalogue`] maps names and ids
//! to modules.

use crate::config::{ConfigError, LexerConfig};
use crate::lexer::{FoldFunction, LexFunction, Lexer, LexerSimple};
use crate::style_context::LexState;
use tracing::{debug, warn};

/// How instances of a module are made.
#[derive(Clone, Copy)]
pub enum LexerKind {
    /// A styling function and an optional folding function, wrapped in [`LexerSimple`].
    Functions {
        /// Styling entry point.
        lex: LexFunction,
        /// Folding entry point.
        fold: Option<FoldFunction>,
    },
    /// A constructor for an object-style lexer.
    Factory(fn() -> Box<dyn Lexer>),
}

/// Static description of a language's lexer.
pub struct LexerModule {
    id: i32,
    name: &'static str,
    word_list_descriptions: &'static [&'static str],
    named_styles: usize,
    style_name: fn(u8) -> &'static str,
    kind: LexerKind,
}

impl LexerModule {
    /// A function-style module whose styles are the states of `S`.
    pub const fn new<S: LexState>(
        id: i32,
        name: &'static str,
        lex: LexFunction,
        fold: Option<FoldFunction>,
        word_list_descriptions: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            name,
            word_list_descriptions,
            named_styles: S::ALL.len(),
            style_name: S::name_of_style,
            kind: LexerKind::Functions { lex, fold },
        }
    }

    /// An object-style module created by `factory`.
    pub const fn with_factory<S: LexState>(
        id: i32,
        name: &'static str,
        factory: fn() -> Box<dyn Lexer>,
        word_list_descriptions: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            name,
            word_list_descriptions,
            named_styles: S::ALL.len(),
            style_name: S::name_of_style,
            kind: LexerKind::Factory(factory),
        }
    }

    /// Numeric language identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Language name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Descriptions of the keyword lists.
    pub fn word_list_descriptions(&self) -> &'static [&'static str] {
        self.word_list_descriptions
    }

    /// Number of named styles.
    pub fn named_styles(&self) -> usize {
        self.named_styles
    }

    /// Name of `style`, empty when unnamed.
    pub fn name_of_style(&self, style: u8) -> &'static str {
        (self.style_name)(style)
    }

    /// How instances are made.
    pub fn kind(&self) -> LexerKind {
        self.kind
    }

    /// A fresh, independently configured instance.
    pub fn create(&'static self) -> Box<dyn Lexer> {
        match self.kind {
            LexerKind::Functions { lex, fold } => Box::new(LexerSimple::new(self, lex, fold)),
            LexerKind::Factory(factory) => factory(),
        }
    }
}

impl std::fmt::Debug for LexerModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexerModule")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Registry of lexer modules, built once by the embedder and passed where needed.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    modules: Vec<&'static LexerModule>,
}

impl Catalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `module`. Later registrations do not shadow earlier ones with the same name.
    pub fn add(&mut self, module: &'static LexerModule) {
        self.modules.push(module);
    }

    /// The module called `name`.
    pub fn find(&self, name: &str) -> Option<&'static LexerModule> {
        let found = self.modules.iter().copied().find(|m| m.name() == name);
        if found.is_none() {
            debug!(name, "no lexer registered for language");
        }
        found
    }

    /// The module with identifier `id`.
    pub fn find_by_id(&self, id: i32) -> Option<&'static LexerModule> {
        let found = self.modules.iter().copied().find(|m| m.id() == id);
        if found.is_none() {
            debug!(id, "no lexer registered for language id");
        }
        found
    }

    /// Number of registered modules.
    pub fn count(&self) -> usize {
        self.modules.len()
    }

    /// Name of the module at `index`.
    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.modules.get(index).map(|m| m.name())
    }

    /// Registered modules in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &'static LexerModule> + '_ {
        self.modules.iter().copied()
    }

    /// A fresh instance of the module at `index`.
    pub fn create(&self, index: usize) -> Option<Box<dyn Lexer>> {
        self.modules.get(index).map(|m| m.create())
    }

    /// A fresh instance of the module called `name`.
    pub fn create_by_name(&self, name: &str) -> Option<Box<dyn Lexer>> {
        self.find(name).map(LexerModule::create)
    }

    /// A fresh instance set up from `config`.
    pub fn configure(&self, config: &LexerConfig) -> Result<Box<dyn Lexer>, ConfigError> {
        let language = config.language.as_str();
        let mut lexer = self
            .create_by_name(language)
            .ok_or_else(|| ConfigError::UnknownLanguage(language.to_string()))?;

        for (key, value) in &config.properties {
            let names = lexer.property_names();
            if !names.is_empty() && !names.contains(&key.as_str()) {
                warn!(language, key = key.as_str(), "unknown lexer property");
                return Err(ConfigError::UnknownProperty {
                    language: language.to_string(),
                    key: key.clone(),
                });
            }
            lexer.property_set(key, &value.to_string());
        }

        let count = lexer.describe_word_list_sets().len();
        for (index, words) in config.keywords.iter().enumerate() {
            if index >= count {
                return Err(ConfigError::WordListOutOfRange {
                    language: language.to_string(),
                    index,
                    count,
                });
            }
            lexer.word_list_set(index, words);
        }

        for sub in &config.substyles {
            if lexer.sub_styles().is_none() {
                return Err(ConfigError::SubStylesUnsupported(language.to_string()));
            }
            let exhausted = || ConfigError::SubStylesExhausted {
                language: language.to_string(),
                base: sub.base,
                requested: sub.identifiers.len(),
            };
            let requested = u8::try_from(sub.identifiers.len()).map_err(|_| exhausted())?;
            let start = lexer
                .allocate_sub_styles(sub.base, requested)
                .ok_or_else(exhausted)?;
            for (identifiers, style) in sub.identifiers.iter().zip(start..) {
                lexer.set_identifiers(style, identifiers);
            }
        }

        debug!(language, "lexer configured");
        Ok(lexer)
    }
}
