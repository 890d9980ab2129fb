#![warn(missing_docs)]
//! `editor-core-lexers` - language lexers for `editor-core-lexlib`.
//!
//! Each module declares a style enum, its keyword list descriptions and a static
//! [`LexerModule`](editor_core_lexlib::LexerModule). [`catalogue`] registers all of them.
//!
//! ```
//! use editor_core_lexlib::{Lexer, TextDocument};
//!
//! let catalogue = editor_core_lexers::catalogue();
//! let mut lexer = catalogue.create_by_name("cpp").unwrap();
//! lexer.word_list_set(0, "int return");
//!
//! let mut doc = TextDocument::new("int x; // done\n");
//! let len = doc.text().len();
//! lexer.lex(0, len, 0, &mut doc);
//! assert_eq!(doc.styles()[0], 5);
//! ```

pub mod batch;
pub mod cpp;
pub mod diff;
pub mod json;
pub mod lua;
pub mod makefile;
pub mod null;
pub mod props;
pub mod python;
pub mod toml;
pub mod yaml;

use editor_core_lexlib::Catalogue;

/// A catalogue holding every lexer of this crate.
pub fn catalogue() -> Catalogue {
    let mut catalogue = Catalogue::new();
    for module in [
        &null::LEXER_NULL,
        &python::LEXER_PYTHON,
        &cpp::LEXER_CPP,
        &props::LEXER_PROPS,
        &makefile::LEXER_MAKEFILE,
        &batch::LEXER_BATCH,
        &lua::LEXER_LUA,
        &diff::LEXER_DIFF,
        &yaml::LEXER_YAML,
        &json::LEXER_JSON,
        &toml::LEXER_TOML,
    ] {
        catalogue.add(module);
    }
    catalogue
}
