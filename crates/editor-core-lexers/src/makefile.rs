//! The `makefile` lexer.

use editor_core_lexlib::character_set::is_space_char;
use editor_core_lexlib::{LexAccessor, LexState, LexerModule, WordList, lexer_styles};

lexer_styles! {
    /// Styles of the `makefile` lexer.
    pub enum MakeStyle {
        DEFAULT = 0,
        COMMENT = 1,
        PREPROCESSOR = 2,
        IDENTIFIER = 3,
        OPERATOR = 4,
        TARGET = 5,
        /// A `$(` reference still open at the end of the line.
        IDEOL = 9,
    }
}

fn at_eol(styler: &mut LexAccessor<'_>, i: usize) -> bool {
    let ch = styler.safe_byte_at(i, b' ');
    ch == b'\n' || (ch == b'\r' && styler.safe_byte_at(i + 1, b' ') != b'\n')
}

/// Colour through `line_start + offset - 1`, i.e. everything before `offset`.
fn colour_before(styler: &mut LexAccessor<'_>, line_start: usize, offset: usize, style: MakeStyle) {
    let end = line_start + offset;
    if end > styler.get_start_segment() {
        styler.colour_to(end - 1, style.style());
    }
}

fn colourise_line(line: &[u8], line_start: usize, end: usize, directives: &WordList, styler: &mut LexAccessor<'_>) {
    let is_space = |b: u8| is_space_char(char::from(b));
    let mut i = 0;
    let mut last_non_space: Option<usize> = None;
    let mut state = MakeStyle::DEFAULT;
    let mut special = false;
    // Recipe lines start with a tab and have no targets or assignments.
    let command = line.first() == Some(&b'\t');

    while i < line.len() && is_space(line[i]) {
        i += 1;
    }
    if let Some(&first) = line.get(i) {
        if first == b'#' {
            styler.colour_to(end, MakeStyle::COMMENT.style());
            return;
        }
        if first == b'!' {
            styler.colour_to(end, MakeStyle::PREPROCESSOR.style());
            return;
        }
        if first.is_ascii_alphabetic() && !line.iter().any(|&b| b == b':' || b == b'=') {
            let word_len = line[i..].iter().take_while(|b| b.is_ascii_alphabetic()).count();
            let word = String::from_utf8_lossy(&line[i..i + word_len]);
            if directives.in_list(&word) {
                styler.colour_to(line_start + i + word_len - 1, MakeStyle::PREPROCESSOR.style());
                i += word_len;
            }
        }
    }

    let mut var_count = 0;
    while i < line.len() {
        let ch = line[i];
        if line[i..].starts_with(b"$(") {
            colour_before(styler, line_start, i, state);
            state = MakeStyle::IDENTIFIER;
            var_count += 1;
        } else if state == MakeStyle::IDENTIFIER && ch == b')' {
            var_count -= 1;
            if var_count == 0 {
                styler.colour_to(line_start + i, state.style());
                state = MakeStyle::DEFAULT;
            }
        }

        // Only the first ':' or '=' of a non-recipe line separates target or variable.
        if !special && !command && (ch == b':' || ch == b'=') {
            let colon = ch == b':';
            let immediate = colon && line.get(i + 1) == Some(&b'=');
            if let Some(last) = last_non_space
                && line_start + last + 1 >= styler.get_start_segment()
            {
                let style = if colon && !immediate {
                    MakeStyle::TARGET
                } else {
                    MakeStyle::IDENTIFIER
                };
                styler.colour_to(line_start + last, style.style());
            }
            colour_before(styler, line_start, i, MakeStyle::DEFAULT);
            styler.colour_to(line_start + i + usize::from(immediate), MakeStyle::OPERATOR.style());
            special = true;
            state = MakeStyle::DEFAULT;
        }
        if !is_space(ch) {
            last_non_space = Some(i);
        }
        i += 1;
    }

    let style = if state == MakeStyle::IDENTIFIER {
        MakeStyle::IDEOL
    } else {
        MakeStyle::DEFAULT
    };
    styler.colour_to(end, style.style());
}

fn lex_make(start: usize, length: usize, _init_style: u8, keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    let empty = WordList::new();
    let directives = keywords.first().unwrap_or(&empty);
    styler.start_at(start);
    styler.start_segment(start);
    let mut line = Vec::new();
    let mut line_start = start;
    for i in start..start + length {
        line.push(styler.safe_byte_at(i, b' '));
        if at_eol(styler, i) {
            colourise_line(&line, line_start, i, directives, styler);
            line.clear();
            line_start = i + 1;
        }
    }
    if !line.is_empty() {
        colourise_line(&line, line_start, start + length - 1, directives, styler);
    }
}

/// GNU and nmake makefiles.
pub static LEXER_MAKEFILE: LexerModule =
    LexerModule::new::<MakeStyle>(11, "makefile", lex_make, None, &["Directives"]);

#[cfg(test)]
mod tests {
    use super::*;
    use editor_core_lexlib::TextDocument;
    use pretty_assertions::assert_eq;

    fn styles(text: &str) -> Vec<u8> {
        let mut lexer = LEXER_MAKEFILE.create();
        lexer.word_list_set(0, "include ifeq endif");
        let mut doc = TextDocument::new(text);
        lexer.lex(0, text.len(), 0, &mut doc);
        doc.styles().to_vec()
    }

    #[test]
    fn test_target_and_assignment() {
        assert_eq!(styles("all: x\n"), vec![5, 5, 5, 4, 0, 0, 0]);
        assert_eq!(styles("A := 1"), vec![3, 0, 4, 4, 0, 0]);
        assert_eq!(styles("\tcc a:b"), vec![0; 7]);
    }

    #[test]
    fn test_references_and_directives() {
        assert_eq!(styles("$(CC)"), vec![3, 3, 3, 3, 3]);
        assert_eq!(styles("x $(A"), vec![0, 0, 9, 9, 9]);
        assert_eq!(styles("include x"), vec![2, 2, 2, 2, 2, 2, 2, 0, 0]);
        assert_eq!(styles("# c"), vec![1, 1, 1]);
        assert_eq!(styles("!if"), vec![2, 2, 2]);
    }
}
