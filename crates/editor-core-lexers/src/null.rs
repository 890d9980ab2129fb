//! The `null` lexer: plain text.

use editor_core_lexlib::{LexAccessor, LexerModule, WordList, lexer_styles};

lexer_styles! {
    /// Styles of the `null` lexer.
    pub enum NullStyle {
        DEFAULT = 0,
    }
}

fn lex_null(start: usize, length: usize, _init_style: u8, _keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    if length > 0 {
        styler.start_at(start);
        styler.start_segment(start);
        styler.colour_to(start + length - 1, NullStyle::DEFAULT as u8);
    }
}

/// Plain text: every position gets style 0.
pub static LEXER_NULL: LexerModule = LexerModule::new::<NullStyle>(1, "null", lex_null, None, &[]);
