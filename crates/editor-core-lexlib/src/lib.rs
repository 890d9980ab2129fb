#![warn(missing_docs)]
//! `editor-core-lexlib` - the incremental lexer framework.
//!
//! # Overview
//!
//! Lexers turn document text into one style byte per position and one fold level per line.
//! They run over an arbitrary edited range, starting from the style carried in from just before
//! the range, so an editor only re-lexes what changed.
//!
//! - [`Document`] is the storage boundary; [`TextDocument`] is an in-memory implementation.
//! - [`LexAccessor`] is the buffered reader and style writer a lexer uses for one call.
//! - [`StyleContext`] is the per-character cursor most lexers iterate with, parameterised over a
//!   lexer's style enum declared with [`lexer_styles!`].
//! - [`WordList`], [`CharacterSet`], [`SparseState`] and [`SubStyles`] are the helpers lexers
//!   classify with.
//! - [`Lexer`] is the object protocol; [`LexerModule`] and [`Catalogue`] register and create
//!   lexers by name or id, optionally from a YAML [`LexerConfig`].

pub mod accessor;
pub mod character_set;
pub mod config;
pub mod document;
pub mod fold;
pub mod lexer;
pub mod module;
pub mod option_set;
pub mod property_set;
pub mod sparse_state;
pub mod style_context;
pub mod sub_styles;
pub mod word_list;

pub use accessor::{EncodingType, LexAccessor, indent_flags};
pub use character_set::{CharacterCategory, CharacterSet, SetBase};
pub use config::{ConfigError, LexerConfig, PropertyValue, SubStyleConfig};
pub use document::{CP_UTF8, Document, TextDocument};
pub use fold::{
    FOLD_LEVEL_BASE, FOLD_LEVEL_HEADER_FLAG, FOLD_LEVEL_NUMBER_MASK, FOLD_LEVEL_WHITE_FLAG,
};
pub use lexer::{FoldFunction, LexFunction, Lexer, LexerSimple};
pub use module::{Catalogue, LexerKind, LexerModule};
pub use option_set::{OptionSet, PropertyType};
pub use property_set::PropertySet;
pub use sparse_state::SparseState;
pub use style_context::{LexState, StyleContext};
pub use sub_styles::{SubStyles, WordClassifier};
pub use word_list::WordList;
