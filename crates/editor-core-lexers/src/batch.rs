//! The `batch` lexer: Windows `.bat` / `.cmd` scripts.
//!
//! Lines are styled independently, except that a trailing `^` continues a command on the next
//! line; re-lexing backs up to the first line of such a group. Block parentheses are styled as
//! operators so the fold pass can nest on them.

use editor_core_lexlib::fold::line_level;
use editor_core_lexlib::{FOLD_LEVEL_BASE, FOLD_LEVEL_NUMBER_MASK, LexAccessor, LexState, LexerModule, WordList, lexer_styles};

lexer_styles! {
    /// Styles of the `batch` lexer.
    pub enum BatchStyle {
        DEFAULT = 0,
        COMMENT = 1,
        WORD = 2,
        LABEL = 3,
        HIDE = 4,
        COMMAND = 5,
        IDENTIFIER = 6,
        OPERATOR = 7,
        AFTER_LABEL = 8,
    }
}

const WORD_LIST_DESCRIPTIONS: &[&str] = &["Internal Commands", "External Commands"];

fn is_blank(ch: u8) -> bool {
    ch == b' ' || ch == b'\t'
}

fn is_word_end(ch: u8) -> bool {
    is_blank(ch) || b"\"|&<>()=,;%!^".contains(&ch)
}

fn is_label_end(ch: u8) -> bool {
    is_blank(ch) || b"&+:<>|".contains(&ch)
}

fn at_eol(styler: &mut LexAccessor<'_>, i: usize) -> bool {
    let ch = styler.safe_byte_at(i, b' ');
    ch == b'\n' || (ch == b'\r' && styler.safe_byte_at(i + 1, b' ') != b'\n')
}

fn ends_with_caret(styler: &mut LexAccessor<'_>, line: usize) -> bool {
    let start = styler.line_start(line);
    let end = styler.line_end(line);
    end > start && styler.safe_byte_at(end - 1, b' ') == b'^'
}

/// End of a variable reference starting at `i`: `%1`, `%*`, `%~dp0`, `%%i`, `%%~nxi`, `%name%`
/// or `!name!`.
fn variable_end(line: &[u8], i: usize) -> Option<usize> {
    let letters_from = |j: usize| j + line[j.min(line.len())..].iter().take_while(|b| b.is_ascii_alphabetic()).count();
    match line.get(i)? {
        b'%' => match line.get(i + 1)? {
            b'0'..=b'9' | b'*' => Some(i + 2),
            b'%' => {
                let j = if line.get(i + 2) == Some(&b'~') {
                    letters_from(i + 3)
                } else {
                    i + 3
                };
                (j > i + 2 && line.get(j - 1).is_some_and(u8::is_ascii_alphabetic)).then_some(j)
            }
            b'~' => {
                let j = letters_from(i + 2);
                line.get(j).is_some_and(u8::is_ascii_digit).then_some(j + 1)
            }
            _ => {
                let close = line[i + 1..].iter().position(|&b| b == b'%')?;
                (close > 0).then_some(i + close + 2)
            }
        },
        b'!' => {
            let close = line[i + 1..].iter().position(|&b| b == b'!' || is_blank(b))?;
            (close > 0 && line[i + 1 + close] == b'!').then_some(i + close + 2)
        }
        _ => None,
    }
}

/// Tokenizer state of one logical line, carried across `^` continuations.
struct CommandState {
    started: bool,
    keywords_enabled: bool,
    /// Words still to pass before the next word is a command name.
    expect_command: Option<u8>,
    assignment_pending: bool,
    redirect_target: bool,
    for_set: bool,
    in_quote: bool,
}

impl CommandState {
    fn new() -> Self {
        Self {
            started: false,
            keywords_enabled: true,
            expect_command: Some(0),
            assignment_pending: false,
            redirect_target: false,
            for_set: false,
            in_quote: false,
        }
    }

    fn new_command(&mut self) {
        self.keywords_enabled = true;
        self.expect_command = Some(0);
        self.assignment_pending = false;
        self.redirect_target = false;
    }

    fn classify_word(&mut self, word: &[u8], internal: &WordList, external: &WordList) -> BatchStyle {
        let at_command = self.expect_command == Some(0);
        self.expect_command = self.expect_command.and_then(|n| n.checked_sub(1));
        if std::mem::take(&mut self.redirect_target) || !self.keywords_enabled {
            return BatchStyle::DEFAULT;
        }
        let lower = String::from_utf8_lossy(word).to_ascii_lowercase();
        if internal.in_list(&lower) {
            match lower.as_str() {
                "echo" | "goto" | "prompt" | "title" => self.keywords_enabled = false,
                "set" => {
                    self.keywords_enabled = false;
                    self.assignment_pending = true;
                }
                "call" | "do" | "else" | "loadhigh" | "lh" => self.expect_command = Some(0),
                "exist" | "errorlevel" | "defined" => self.expect_command = Some(1),
                "in" => self.for_set = true,
                _ => {}
            }
            return BatchStyle::WORD;
        }
        let stem = lower.rsplit_once('.').map_or(lower.as_str(), |(stem, _)| stem);
        if at_command && (external.is_empty() || external.in_list(&lower) || external.in_list(stem)) {
            BatchStyle::COMMAND
        } else {
            BatchStyle::DEFAULT
        }
    }
}

/// Colour everything before `end`.
fn paint(styler: &mut LexAccessor<'_>, end: usize, style: BatchStyle) {
    styler.colour_to(end - 1, style.style());
}

/// Style one physical line `line` (including its line end) starting at `line_start`; returns
/// whether it continues onto the next line.
fn colourise_line(
    line: &[u8],
    line_start: usize,
    state: &mut CommandState,
    internal: &WordList,
    external: &WordList,
    styler: &mut LexAccessor<'_>,
) -> bool {
    let eol = line.iter().rev().take_while(|&&b| b == b'\r' || b == b'\n').count();
    let len = line.len() - eol;
    let mut continued = false;
    let mut i = 0;

    if !state.started {
        while i < len && is_blank(line[i]) {
            i += 1;
        }
        if i > 0 {
            paint(styler, line_start + i, BatchStyle::DEFAULT);
        }
        let rest = &line[i..len];
        if rest.starts_with(b"::") {
            paint(styler, line_start + line.len(), BatchStyle::COMMENT);
            return false;
        }
        if rest.first() == Some(&b':') {
            let end = i + 1 + rest[1..].iter().take_while(|&&b| !is_label_end(b)).count();
            paint(styler, line_start + end, BatchStyle::LABEL);
            if end < len {
                paint(styler, line_start + len, BatchStyle::AFTER_LABEL);
            }
            if eol > 0 {
                paint(styler, line_start + line.len(), BatchStyle::DEFAULT);
            }
            return false;
        }
        if rest.len() >= 2 && rest[0].is_ascii_alphabetic() && rest[1] == b':' && rest.get(2).is_none_or(|&b| is_blank(b)) {
            paint(styler, line_start + i + 2, BatchStyle::WORD);
            i += 2;
            state.started = true;
        } else if rest.first() == Some(&b'@') {
            paint(styler, line_start + i + 1, BatchStyle::HIDE);
            i += 1;
        }
    }

    while i < len {
        let ch = line[i];
        let (end, style) = if is_blank(ch) {
            let end = i + line[i..len].iter().take_while(|&&b| is_blank(b)).count();
            (end, BatchStyle::DEFAULT)
        } else if state.in_quote {
            if ch == b'"' {
                state.in_quote = false;
                (i + 1, BatchStyle::DEFAULT)
            } else if let Some(end) = variable_end(&line[..len], i) {
                (end, BatchStyle::IDENTIFIER)
            } else {
                let run = line[i + 1..len].iter().take_while(|&&b| !matches!(b, b'"' | b'%' | b'!')).count();
                (i + 1 + run, BatchStyle::DEFAULT)
            }
        } else if ch == b'^' {
            if i + 1 == len {
                continued = true;
            }
            ((i + 2).min(len), BatchStyle::DEFAULT)
        } else if let Some(end) = variable_end(&line[..len], i) {
            state.expect_command = state.expect_command.and_then(|n| n.checked_sub(1));
            (end, BatchStyle::IDENTIFIER)
        } else {
            let next = line[..len].get(i + 1).copied();
            match ch {
                b'"' => {
                    state.in_quote = true;
                    (i + 1, BatchStyle::DEFAULT)
                }
                b'|' | b'&' => {
                    state.new_command();
                    (if next == Some(ch) { i + 2 } else { i + 1 }, BatchStyle::OPERATOR)
                }
                b'<' | b'>' => {
                    state.redirect_target = true;
                    (if matches!(next, Some(b'>' | b'&')) { i + 2 } else { i + 1 }, BatchStyle::OPERATOR)
                }
                b'(' => {
                    state.new_command();
                    if std::mem::take(&mut state.for_set) {
                        state.expect_command = None;
                    }
                    (i + 1, BatchStyle::OPERATOR)
                }
                b')' => {
                    state.new_command();
                    state.expect_command = None;
                    (i + 1, BatchStyle::OPERATOR)
                }
                b'=' if next == Some(b'=') => (i + 2, BatchStyle::OPERATOR),
                b'=' if state.assignment_pending => {
                    state.assignment_pending = false;
                    (i + 1, BatchStyle::OPERATOR)
                }
                b'=' | b',' | b';' | b'%' | b'!' => (i + 1, BatchStyle::DEFAULT),
                _ => {
                    let end = i + 1 + line[i + 1..len].iter().take_while(|&&b| !is_word_end(b)).count();
                    let word = &line[i..end];
                    if state.keywords_enabled && word.eq_ignore_ascii_case(b"rem") {
                        paint(styler, line_start + line.len(), BatchStyle::COMMENT);
                        return false;
                    }
                    (end, state.classify_word(word, internal, external))
                }
            }
        };
        if !is_blank(ch) {
            state.started = true;
        }
        paint(styler, line_start + end, style);
        i = end;
    }
    if eol > 0 {
        paint(styler, line_start + line.len(), BatchStyle::DEFAULT);
    }
    continued
}

fn lex_batch(start: usize, length: usize, _init_style: u8, keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    let empty = WordList::new();
    let internal = keywords.first().unwrap_or(&empty);
    let external = keywords.get(1).unwrap_or(&empty);
    let end = start + length;

    let mut line = styler.get_line(start);
    while line > 0 && ends_with_caret(styler, line - 1) {
        line -= 1;
    }
    let start = styler.line_start(line).min(start);

    styler.start_at(start);
    styler.start_segment(start);
    let mut state = CommandState::new();
    let mut buffer = Vec::new();
    let mut line_start = start;
    for i in start..end {
        buffer.push(styler.safe_byte_at(i, b' '));
        if at_eol(styler, i) || i + 1 == end {
            if !colourise_line(&buffer, line_start, &mut state, internal, external, styler) {
                state = CommandState::new();
            }
            buffer.clear();
            line_start = i + 1;
        }
    }
}

fn fold_batch(start: usize, length: usize, _init_style: u8, _keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    let compact = styler.get_property_int("fold.compact", 1) != 0;
    let mut line = styler.get_line(start);
    let mut level_prev = styler.level_at(line) & FOLD_LEVEL_NUMBER_MASK;
    let mut level_current = level_prev;
    let mut visible_chars = 0;
    let mut ch_next = styler.safe_byte_at(start, b' ');

    for i in start..start + length {
        let ch = ch_next;
        ch_next = styler.safe_byte_at(i + 1, b' ');
        if BatchStyle::from_style(styler.style_at(i)) == BatchStyle::OPERATOR {
            match ch {
                b'(' => level_current += 1,
                b')' if level_current > FOLD_LEVEL_BASE => level_current -= 1,
                _ => {}
            }
        }
        if !ch.is_ascii_whitespace() {
            visible_chars += 1;
        }
        if ch == b'\n' || (ch == b'\r' && ch_next != b'\n') {
            styler.set_level(line, line_level(level_prev, level_current, visible_chars, compact));
            line += 1;
            level_prev = level_current;
            visible_chars = 0;
        }
    }
    let flags_next = styler.level_at(line) & !FOLD_LEVEL_NUMBER_MASK;
    styler.set_level(line, level_prev | flags_next);
}

/// Windows batch files.
pub static LEXER_BATCH: LexerModule =
    LexerModule::new::<BatchStyle>(12, "batch", lex_batch, Some(fold_batch), WORD_LIST_DESCRIPTIONS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_references() {
        assert_eq!(variable_end(b"%1", 0), Some(2));
        assert_eq!(variable_end(b"%*", 0), Some(2));
        assert_eq!(variable_end(b"%~dp0\\x", 0), Some(5));
        assert_eq!(variable_end(b"%%i)", 0), Some(3));
        assert_eq!(variable_end(b"%%~nxi ", 0), Some(6));
        assert_eq!(variable_end(b"%PATH%;x", 0), Some(6));
        assert_eq!(variable_end(b"!count!", 0), Some(7));
        assert_eq!(variable_end(b"%%", 0), None);
        assert_eq!(variable_end(b"100%", 3), None);
        assert_eq!(variable_end(b"hi! there!", 2), None);
    }
}
