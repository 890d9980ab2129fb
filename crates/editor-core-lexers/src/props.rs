//! The `props` lexer: `.properties` and `.ini` style files.

use editor_core_lexlib::character_set::is_space_char;
use editor_core_lexlib::{
    FOLD_LEVEL_BASE, FOLD_LEVEL_HEADER_FLAG, FOLD_LEVEL_NUMBER_MASK, FOLD_LEVEL_WHITE_FLAG, LexAccessor, LexState,
    LexerModule, WordList, lexer_styles,
};

lexer_styles! {
    /// Styles of the `props` lexer.
    pub enum PropsStyle {
        DEFAULT = 0,
        COMMENT = 1,
        SECTION = 2,
        ASSIGNMENT = 3,
        DEFVAL = 4,
        KEY = 5,
    }
}

fn is_assign_char(ch: u8) -> bool {
    ch == b'=' || ch == b':'
}

fn at_eol(styler: &mut LexAccessor<'_>, i: usize) -> bool {
    let ch = styler.safe_byte_at(i, b' ');
    ch == b'\n' || (ch == b'\r' && styler.safe_byte_at(i + 1, b' ') != b'\n')
}

/// Style one line, including its line end, which occupies `line_start..=end`.
fn colourise_line(line: &[u8], line_start: usize, end: usize, styler: &mut LexAccessor<'_>, allow_initial_spaces: bool) {
    let is_space = |b: u8| is_space_char(char::from(b));
    let mut i = 0;
    if allow_initial_spaces {
        while i < line.len() && is_space(line[i]) {
            i += 1;
        }
    } else if line.first().is_some_and(|&b| is_space(b)) {
        i = line.len();
    }

    let Some(&first) = line.get(i) else {
        styler.colour_to(end, PropsStyle::DEFAULT.style());
        return;
    };
    match first {
        b'#' | b'!' | b';' => styler.colour_to(end, PropsStyle::COMMENT.style()),
        b'[' => styler.colour_to(end, PropsStyle::SECTION.style()),
        b'@' => {
            styler.colour_to(line_start + i, PropsStyle::DEFVAL.style());
            if line.get(i + 1).copied().is_some_and(is_assign_char) {
                styler.colour_to(line_start + i + 1, PropsStyle::ASSIGNMENT.style());
            }
            styler.colour_to(end, PropsStyle::DEFAULT.style());
        }
        _ => match line[i..].iter().position(|&b| is_assign_char(b)) {
            Some(offset) => {
                let assign = line_start + i + offset;
                if assign > styler.get_start_segment() {
                    styler.colour_to(assign - 1, PropsStyle::KEY.style());
                }
                styler.colour_to(assign, PropsStyle::ASSIGNMENT.style());
                styler.colour_to(end, PropsStyle::DEFAULT.style());
            }
            None => styler.colour_to(end, PropsStyle::DEFAULT.style()),
        },
    }
}

fn lex_props(start: usize, length: usize, _init_style: u8, _keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    styler.start_at(start);
    styler.start_segment(start);
    let allow_initial_spaces = styler.get_property_int("lexer.props.allow.initial.spaces", 1) != 0;
    let mut line = Vec::new();
    let mut line_start = start;
    for i in start..start + length {
        line.push(styler.safe_byte_at(i, b' '));
        if at_eol(styler, i) {
            colourise_line(&line, line_start, i, styler, allow_initial_spaces);
            line.clear();
            line_start = i + 1;
        }
    }
    if !line.is_empty() {
        colourise_line(&line, line_start, start + length - 1, styler, allow_initial_spaces);
    }
}

/// Level of a line following `line`, from the level stored for `line`.
fn level_after(styler: &LexAccessor<'_>, line: Option<usize>) -> i32 {
    match line {
        Some(line) => {
            let level = styler.level_at(line);
            if level & FOLD_LEVEL_HEADER_FLAG != 0 {
                FOLD_LEVEL_BASE + 1
            } else {
                level & FOLD_LEVEL_NUMBER_MASK
            }
        }
        None => FOLD_LEVEL_BASE,
    }
}

fn fold_props(start: usize, length: usize, _init_style: u8, _keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    let compact = styler.get_property_int("fold.compact", 1) != 0;
    let end = start + length;
    let mut line = styler.get_line(start);
    let mut visible_chars = 0;
    let mut header_point = false;
    let mut ch_next = styler.safe_byte_at(start, b' ');

    for i in start..end {
        let ch = ch_next;
        ch_next = styler.safe_byte_at(i + 1, b' ');
        if PropsStyle::from_style(styler.style_at(i)) == PropsStyle::SECTION {
            header_point = true;
        }
        let at_eol = (ch == b'\r' && ch_next != b'\n') || ch == b'\n';
        if at_eol {
            let mut level = if header_point {
                FOLD_LEVEL_BASE
            } else {
                level_after(styler, line.checked_sub(1))
            };
            if visible_chars == 0 && compact {
                level |= FOLD_LEVEL_WHITE_FLAG;
            }
            if header_point {
                level |= FOLD_LEVEL_HEADER_FLAG;
            }
            styler.set_level(line, level);
            line += 1;
            visible_chars = 0;
            header_point = false;
        }
        if !is_space_char(char::from(ch)) {
            visible_chars += 1;
        }
    }

    // The line after the range continues the current section; keep its flags.
    let level = level_after(styler, line.checked_sub(1));
    let flags_next = styler.level_at(line) & !FOLD_LEVEL_NUMBER_MASK;
    styler.set_level(line, level | flags_next);
}

/// Properties, INI and similar `key=value` files.
pub static LEXER_PROPS: LexerModule = LexerModule::new::<PropsStyle>(9, "props", lex_props, Some(fold_props), &[]);

#[cfg(test)]
mod tests {
    use super::*;
    use editor_core_lexlib::{Lexer, TextDocument};
    use pretty_assertions::assert_eq;

    fn styles(text: &str, props: &[(&str, &str)]) -> Vec<u8> {
        let mut lexer = LEXER_PROPS.create();
        for (key, val) in props {
            lexer.property_set(key, val);
        }
        let mut doc = TextDocument::new(text);
        lexer.lex(0, text.len(), 0, &mut doc);
        doc.styles().to_vec()
    }

    #[test]
    fn test_key_value_lines() {
        assert_eq!(styles("a=1\n", &[]), vec![5, 3, 0, 0]);
        assert_eq!(styles("# c\n", &[]), vec![1, 1, 1, 1]);
        assert_eq!(styles("[s]\n", &[]), vec![2, 2, 2, 2]);
        assert_eq!(styles("@=x", &[]), vec![4, 3, 0]);
        assert_eq!(styles("=x", &[]), vec![3, 0]);
        assert_eq!(styles("plain", &[]), vec![0; 5]);
    }

    #[test]
    fn test_initial_spaces() {
        assert_eq!(styles(" a=1", &[]), vec![5, 5, 3, 0]);
        assert_eq!(styles(" a=1", &[("lexer.props.allow.initial.spaces", "0")]), vec![0; 4]);
    }
}
