//! The `toml` lexer.
//!
//! Every line is `key = value`, a table header or a comment. Nesting of inline tables and arrays
//! is carried across lines in the line state, together with the line's kind and its table depth
//! which drive folding:
//!
//! ```text
//! bits 0..2   line kind (none, table, comment)
//! bits 2..10  table depth (dots in the header)
//! bits 10..18 open brackets and braces
//! ```

use editor_core_lexlib::character_set::{is_a_digit, is_a_hex_digit, is_alpha_numeric, is_lower_case, is_space_char};
use editor_core_lexlib::{
    FOLD_LEVEL_BASE, FOLD_LEVEL_HEADER_FLAG, FOLD_LEVEL_NUMBER_MASK, LexAccessor, LexState, LexerModule, StyleContext,
    WordList, lexer_styles,
};

lexer_styles! {
    /// Styles of the `toml` lexer.
    pub enum TomlStyle {
        DEFAULT = 0,
        COMMENT = 1,
        IDENTIFIER = 2,
        KEYWORD = 3,
        NUMBER = 4,
        TABLE = 5,
        KEY = 6,
        ERROR = 7,
        OPERATOR = 8,
        STRING_SQ = 9,
        STRING_DQ = 10,
        TRIPLE_STRING_SQ = 11,
        TRIPLE_STRING_DQ = 12,
        ESCAPECHAR = 13,
        DATETIME = 14,
        STRINGEOL = 15,
    }
}

const WORD_LIST_DESCRIPTIONS: &[&str] = &["Keywords"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineType {
    None = 0,
    Table = 1,
    CommentLine = 2,
}

impl LineType {
    fn from_line_state(line_state: i32) -> Self {
        match line_state & 3 {
            1 => LineType::Table,
            2 => LineType::CommentLine,
            _ => LineType::None,
        }
    }
}

fn table_level(line_state: i32) -> i32 {
    (line_state >> 2) & 0xFF
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyState {
    Unquoted,
    /// Inside `'...'`.
    Literal,
    /// Inside `"..."`.
    Quoted,
    End,
}

fn is_eol_char(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}

fn is_identifier_char(ch: char) -> bool {
    is_alpha_numeric(ch) || ch == '_'
}

fn is_number_continue(ch_prev: char, ch: char, ch_next: char) -> bool {
    ((ch == '+' || ch == '-') && (ch_prev == 'e' || ch_prev == 'E')) || (ch == '.' && ch_next != '.')
}

fn is_decimal_number(ch_prev: char, ch: char, ch_next: char) -> bool {
    is_identifier_char(ch) || is_number_continue(ch_prev, ch, ch_next)
}

fn is_iso_date_time(ch: char, ch_next: char) -> bool {
    (matches!(ch, '+' | '-' | ':' | '.') && is_a_digit(ch_next))
        || (ch == ' ' && (ch_next == '+' || ch_next == '-' || is_a_digit(ch_next)))
}

fn is_toml_operator(ch: char) -> bool {
    matches!(ch, '[' | ']' | '{' | '}' | ',' | '=' | '.' | '+' | '-')
}

fn is_unquoted_key(ch: char) -> bool {
    is_identifier_char(ch) || ch == '-'
}

fn is_white_space(ch: char) -> bool {
    ch == ' ' || ('\t'..='\r').contains(&ch)
}

fn is_triple_string(state: TomlStyle) -> bool {
    matches!(state, TomlStyle::TRIPLE_STRING_SQ | TomlStyle::TRIPLE_STRING_DQ)
}

fn is_double_quoted(state: TomlStyle) -> bool {
    matches!(state, TomlStyle::STRING_DQ | TomlStyle::TRIPLE_STRING_DQ)
}

/// First non-blank character from the cursor to the end of the line, `'\0'` when there is none.
fn line_next_char(sc: &mut StyleContext<'_, '_, TomlStyle>) -> char {
    let mut n = 0;
    loop {
        let ch = sc.get_relative_char(n);
        if ch == '\0' || is_eol_char(ch) {
            return '\0';
        }
        if !is_white_space(ch) {
            return ch;
        }
        n += 1;
    }
}

/// End the current token. Inside brackets a token followed by `=`, `.` or `-` turns out to be a
/// key; outside, identifiers are checked against `keywords`. Returns whether it was a key.
fn end_token(sc: &mut StyleContext<'_, '_, TomlStyle>, brace_count: i32, keywords: Option<&WordList>) -> bool {
    if brace_count > 0 {
        let ch_next = line_next_char(sc);
        if matches!(ch_next, '=' | '.' | '-') {
            sc.change_state(TomlStyle::KEY);
            return true;
        }
    }
    if sc.state() == TomlStyle::IDENTIFIER
        && let Some(keywords) = keywords
        && keywords.in_list(&sc.get_current_lowered())
    {
        sc.change_state(TomlStyle::KEYWORD);
    }
    sc.set_state(TomlStyle::DEFAULT);
    false
}

/// Progress through an escape sequence in a basic string.
struct EscapeSequence {
    outer_state: TomlStyle,
    digits_left: i32,
}

impl EscapeSequence {
    /// Any character may be escaped; `\x`, `\u` and `\U` take 2, 4 and 8 hex digits.
    fn reset(&mut self, state: TomlStyle, ch_next: char) -> bool {
        if is_eol_char(ch_next) {
            return false;
        }
        self.outer_state = state;
        self.digits_left = match ch_next {
            'x' => 3,
            'u' => 5,
            'U' => 9,
            _ => 1,
        };
        true
    }

    fn at_escape_end(&mut self, ch: char) -> bool {
        self.digits_left -= 1;
        self.digits_left <= 0 || !is_a_hex_digit(ch)
    }
}

fn lex_toml(start: usize, length: usize, init_style: u8, keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    let keyword_list = keywords.first();
    let mut visible_chars = 0;
    let mut ch_prev_non_white = '\0';
    let mut table_depth = 0;
    let mut brace_count = 0;
    let mut line_type = LineType::None;
    let mut key_state = KeyState::Unquoted;
    let mut escape = EscapeSequence {
        outer_state: TomlStyle::DEFAULT,
        digits_left: 0,
    };

    let mut init = TomlStyle::from_style(init_style);
    if init == TomlStyle::STRINGEOL {
        init = TomlStyle::DEFAULT;
    }
    let mut sc = StyleContext::with_state(start, length, init, styler);
    if sc.current_line() > 0 {
        let line = sc.current_line() - 1;
        brace_count = (sc.styler().get_line_state(line) >> 10) & 0xFF;
    }

    while sc.more() {
        match sc.state() {
            TomlStyle::OPERATOR => sc.set_state(TomlStyle::DEFAULT),
            TomlStyle::NUMBER => {
                if !is_decimal_number(sc.ch_prev(), sc.ch(), sc.ch_next()) {
                    if is_iso_date_time(sc.ch(), sc.ch_next()) {
                        sc.change_state(TomlStyle::DATETIME);
                    } else if end_token(&mut sc, brace_count, None) {
                        key_state = KeyState::Unquoted;
                        continue;
                    }
                }
            }
            TomlStyle::DATETIME => {
                if !(is_identifier_char(sc.ch()) || is_iso_date_time(sc.ch(), sc.ch_next()))
                    && end_token(&mut sc, brace_count, None)
                {
                    key_state = KeyState::Unquoted;
                    continue;
                }
            }
            TomlStyle::IDENTIFIER => {
                if !is_identifier_char(sc.ch()) && end_token(&mut sc, brace_count, keyword_list) {
                    key_state = KeyState::Unquoted;
                    continue;
                }
            }
            TomlStyle::TABLE | TomlStyle::KEY => {
                if sc.at_line_start() {
                    sc.set_state(TomlStyle::DEFAULT);
                } else {
                    match key_state {
                        KeyState::Literal if sc.ch() == '\'' => {
                            key_state = KeyState::Unquoted;
                            sc.forward();
                        }
                        KeyState::Quoted if sc.ch() == '\\' => sc.forward(),
                        KeyState::Quoted if sc.ch() == '"' => {
                            key_state = KeyState::Unquoted;
                            sc.forward();
                        }
                        _ => {}
                    }
                    if key_state == KeyState::Unquoted {
                        if sc.ch() == '\'' {
                            key_state = KeyState::Literal;
                        } else if sc.ch() == '"' {
                            key_state = KeyState::Quoted;
                        } else if sc.ch() == '.' {
                            if sc.state() == TomlStyle::TABLE {
                                table_depth += 1;
                            } else {
                                ch_prev_non_white = '.';
                                sc.set_state(TomlStyle::OPERATOR);
                                sc.forward_set_state(TomlStyle::KEY);
                                continue;
                            }
                        } else if sc.state() == TomlStyle::TABLE && sc.ch() == ']' {
                            key_state = KeyState::End;
                            sc.forward();
                            if sc.ch() == ']' {
                                sc.forward();
                            }
                            if line_next_char(&mut sc) == '#' {
                                sc.set_state(TomlStyle::DEFAULT);
                            }
                        } else if sc.state() == TomlStyle::KEY && !is_unquoted_key(sc.ch()) {
                            let ch_next = line_next_char(&mut sc);
                            if ch_next == '=' || (ch_next != '.' && ch_prev_non_white != '.') {
                                key_state = KeyState::End;
                                sc.set_state(TomlStyle::DEFAULT);
                            }
                        }
                    }
                }
            }
            state @ (TomlStyle::STRING_SQ
            | TomlStyle::STRING_DQ
            | TomlStyle::TRIPLE_STRING_SQ
            | TomlStyle::TRIPLE_STRING_DQ) => {
                let quote = if is_double_quoted(state) { '"' } else { '\'' };
                if sc.at_line_start() && !is_triple_string(state) {
                    sc.set_state(TomlStyle::DEFAULT);
                } else if sc.at_line_end() && !is_triple_string(state) {
                    sc.change_state(TomlStyle::STRINGEOL);
                } else if sc.ch() == '\\' && is_double_quoted(state) {
                    if escape.reset(state, sc.ch_next()) {
                        sc.set_state(TomlStyle::ESCAPECHAR);
                        sc.forward();
                    }
                } else if sc.ch() == quote
                    && (!is_triple_string(state) || sc.matches(if quote == '"' { "\"\"\"" } else { "'''" }))
                {
                    // Quotes directly before the closing delimiter belong to the string.
                    while sc.ch() == sc.ch_next() {
                        sc.forward();
                    }
                    sc.forward();
                    if !is_triple_string(state) && end_token(&mut sc, brace_count, None) {
                        key_state = KeyState::Unquoted;
                        continue;
                    }
                    sc.set_state(TomlStyle::DEFAULT);
                }
            }
            TomlStyle::STRINGEOL | TomlStyle::COMMENT => {
                if sc.at_line_start() {
                    sc.set_state(TomlStyle::DEFAULT);
                }
            }
            TomlStyle::ESCAPECHAR => {
                if escape.at_escape_end(sc.ch()) {
                    sc.set_state(escape.outer_state);
                    continue;
                }
            }
            TomlStyle::ERROR => {
                if sc.at_line_start() {
                    sc.set_state(TomlStyle::DEFAULT);
                } else if sc.ch() == '#' {
                    sc.set_state(TomlStyle::COMMENT);
                }
            }
            TomlStyle::DEFAULT | TomlStyle::KEYWORD => {}
        }

        if sc.state() == TomlStyle::DEFAULT {
            let ch = sc.ch();
            if ch == '#' {
                sc.set_state(TomlStyle::COMMENT);
                if visible_chars == 0 {
                    line_type = LineType::CommentLine;
                }
            } else if visible_chars == 0 && brace_count == 0 {
                if ch == '[' {
                    table_depth = 0;
                    sc.set_state(TomlStyle::TABLE);
                    if sc.ch_next() == '[' {
                        sc.forward();
                    }
                    key_state = KeyState::Unquoted;
                    line_type = LineType::Table;
                } else if ch == '\'' || ch == '"' {
                    key_state = if ch == '\'' { KeyState::Literal } else { KeyState::Quoted };
                    sc.set_state(TomlStyle::KEY);
                } else if is_unquoted_key(ch) {
                    key_state = KeyState::Unquoted;
                    sc.set_state(TomlStyle::KEY);
                } else if !is_space_char(ch) {
                    sc.set_state(TomlStyle::ERROR);
                }
            } else if ch == '\'' {
                if sc.matches("'''") {
                    sc.set_state(TomlStyle::TRIPLE_STRING_SQ);
                    sc.forward_n(2);
                } else {
                    sc.set_state(TomlStyle::STRING_SQ);
                }
            } else if ch == '"' {
                if sc.matches("\"\"\"") {
                    sc.set_state(TomlStyle::TRIPLE_STRING_DQ);
                    sc.forward_n(2);
                } else {
                    sc.set_state(TomlStyle::STRING_DQ);
                }
            } else if is_a_digit(ch) {
                sc.set_state(TomlStyle::NUMBER);
            } else if is_lower_case(ch) {
                sc.set_state(TomlStyle::IDENTIFIER);
            } else if is_toml_operator(ch) {
                sc.set_state(TomlStyle::OPERATOR);
                match ch {
                    '[' | '{' => brace_count += 1,
                    ']' | '}' if brace_count > 0 => brace_count -= 1,
                    _ => {}
                }
            } else if brace_count > 0 && is_unquoted_key(ch) {
                // Key of an inline table.
                key_state = KeyState::Unquoted;
                sc.set_state(TomlStyle::KEY);
            }
        }

        if !is_space_char(sc.ch()) {
            ch_prev_non_white = sc.ch();
            visible_chars += 1;
        }
        if sc.at_line_end() {
            let line_state = (table_depth << 2) | (brace_count << 10) | line_type as i32;
            let line = sc.current_line();
            sc.styler().set_line_state(line, line_state);
            line_type = LineType::None;
            visible_chars = 0;
            ch_prev_non_white = '\0';
            table_depth = 0;
            key_state = KeyState::Unquoted;
        }
        sc.forward();
    }
    sc.complete();
}

/// Tables fold by depth; a run of comment lines folds on its own and a comment directly above a
/// table becomes part of the table's header.
fn fold_toml(start: usize, length: usize, _init_style: u8, _keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    let end = start + length;
    let max_line = styler.get_line(if end == styler.length() { end } else { end.saturating_sub(1) });
    let mut line = styler.get_line(start);
    // Comment and table levels are rewritten by the line after them, so resume below a plain line.
    while line > 0 && LineType::from_line_state(styler.get_line_state(line - 1)) != LineType::None {
        line -= 1;
    }

    let mut prev_level = FOLD_LEVEL_BASE;
    let mut prev_type = LineType::None;
    let mut prev2_type = LineType::None;
    if line > 0 {
        prev_level = styler.level_at(line - 1);
        prev_type = LineType::from_line_state(styler.get_line_state(line - 1));
        if line >= 2 {
            prev2_type = LineType::from_line_state(styler.get_line_state(line - 2));
        }
    }

    let mut comment_head = prev_type == LineType::CommentLine && prev_level & FOLD_LEVEL_HEADER_FLAG != 0;
    while line <= max_line {
        let line_state = styler.get_line_state(line);
        let line_type = LineType::from_line_state(line_state);
        let mut next_level;

        if line_type == LineType::CommentLine {
            next_level = if prev_level & FOLD_LEVEL_HEADER_FLAG != 0 {
                (prev_level & FOLD_LEVEL_NUMBER_MASK) + 1
            } else {
                prev_level
            };
            comment_head = prev_type != LineType::CommentLine;
            if comment_head {
                next_level |= FOLD_LEVEL_HEADER_FLAG;
            }
        } else {
            if line_type == LineType::Table {
                next_level = FOLD_LEVEL_BASE + table_level(line_state);
                if prev_type == LineType::CommentLine && prev_level <= next_level {
                    // Comment above a nested table.
                    comment_head = true;
                    prev_level = next_level - 1;
                } else if prev_type == LineType::Table && (prev_level & FOLD_LEVEL_NUMBER_MASK) >= next_level {
                    // Empty table.
                    comment_head = true;
                }
                next_level |= FOLD_LEVEL_HEADER_FLAG;
            } else if comment_head {
                next_level = prev_level & FOLD_LEVEL_NUMBER_MASK;
            } else if prev_level & FOLD_LEVEL_HEADER_FLAG != 0 {
                next_level = (prev_level & FOLD_LEVEL_NUMBER_MASK) + 1;
            } else if prev_type == LineType::CommentLine && prev2_type == LineType::CommentLine {
                next_level = prev_level - 1;
            } else {
                next_level = prev_level;
            }

            if comment_head {
                comment_head = false;
                if let Some(prev_line) = line.checked_sub(1) {
                    styler.set_level(prev_line, prev_level & FOLD_LEVEL_NUMBER_MASK);
                }
            }
        }

        styler.set_level(line, next_level);
        prev_level = next_level;
        prev2_type = prev_type;
        prev_type = line_type;
        line += 1;
    }
}

/// TOML configuration files.
pub static LEXER_TOML: LexerModule =
    LexerModule::new::<TomlStyle>(133, "toml", lex_toml, Some(fold_toml), WORD_LIST_DESCRIPTIONS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_lengths() {
        let mut escape = EscapeSequence {
            outer_state: TomlStyle::DEFAULT,
            digits_left: 0,
        };
        assert!(!escape.reset(TomlStyle::STRING_DQ, '\n'));
        assert!(escape.reset(TomlStyle::STRING_DQ, 'u'));
        assert_eq!(escape.outer_state, TomlStyle::STRING_DQ);
        // Called from the first hex digit on; the escape ends on the character after the fourth.
        for _ in 0..4 {
            assert!(!escape.at_escape_end('a'));
        }
        assert!(escape.at_escape_end('f'));
        assert!(escape.reset(TomlStyle::STRING_DQ, 'x'));
        assert!(!escape.at_escape_end('0'));
        assert!(escape.at_escape_end('z'));
        assert!(escape.reset(TomlStyle::STRING_DQ, 'n'));
        assert!(escape.at_escape_end('a'));
    }

    #[test]
    fn test_date_time_continuation() {
        assert!(is_iso_date_time('-', '0'));
        assert!(is_iso_date_time(' ', '1'));
        assert!(!is_iso_date_time(' ', '#'));
        assert!(is_decimal_number('e', '-', '5'));
        assert!(!is_decimal_number('1', '.', '.'));
    }

    #[test]
    fn test_line_state_fields() {
        let state = (2 << 2) | (3 << 10) | LineType::Table as i32;
        assert_eq!(LineType::from_line_state(state), LineType::Table);
        assert_eq!(table_level(state), 2);
        assert_eq!((state >> 10) & 0xFF, 3);
    }
}
