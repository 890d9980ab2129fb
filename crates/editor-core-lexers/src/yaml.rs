//! The `yaml` lexer.
//!
//! Lines are styled one at a time. Block scalars (`key: |` and `key: >`) are recognised through
//! the line state, which holds the kind of line in the high 16 bits and, for text blocks, the
//! indentation of the parent key in the low 16 bits.

use editor_core_lexlib::character_set::is_space_char;
use editor_core_lexlib::{
    FOLD_LEVEL_BASE, FOLD_LEVEL_HEADER_FLAG, FOLD_LEVEL_NUMBER_MASK, FOLD_LEVEL_WHITE_FLAG, LexAccessor, LexState,
    LexerModule, WordList, lexer_styles,
};

lexer_styles! {
    /// Styles of the `yaml` lexer.
    pub enum YamlStyle {
        DEFAULT = 0,
        COMMENT = 1,
        IDENTIFIER = 2,
        KEYWORD = 3,
        NUMBER = 4,
        /// Anchors `&a` and aliases `*a`.
        REFERENCE = 5,
        /// `---` and `...` markers.
        DOCUMENT = 6,
        /// Content of a block scalar.
        TEXT = 7,
        ERROR = 8,
        OPERATOR = 9,
    }
}

const WORD_LIST_DESCRIPTIONS: &[&str] = &["Keywords"];

const STATE_MASK: i32 = 0xFFFF_0000_u32 as i32;
const STATE_DOCUMENT: i32 = 1 << 16;
const STATE_VALUE: i32 = 2 << 16;
const STATE_COMMENT: i32 = 3 << 16;
const STATE_TEXT_PARENT: i32 = 4 << 16;
const STATE_TEXT: i32 = 5 << 16;

fn at_eol(styler: &mut LexAccessor<'_>, i: usize) -> bool {
    let ch = styler.safe_byte_at(i, b' ');
    ch == b'\n' || (ch == b'\r' && styler.safe_byte_at(i + 1, b' ') != b'\n')
}

fn is_space(b: u8) -> bool {
    is_space_char(char::from(b))
}

fn is_white_space_or_eol(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Colour everything before `line_start + offset`.
fn colour_before(styler: &mut LexAccessor<'_>, line_start: usize, offset: usize, style: YamlStyle) {
    let end = line_start + offset;
    if end > styler.get_start_segment() {
        styler.colour_to(end - 1, style.style());
    }
}

/// Where a scalar value ends: an optional trailing comment runs from `start_comment` to `end`.
struct ValueEnd {
    line_start: usize,
    start_comment: usize,
    comment: bool,
    end: usize,
}

impl ValueEnd {
    fn colour(&self, styler: &mut LexAccessor<'_>, style: YamlStyle) {
        colour_before(styler, self.line_start, self.start_comment, style);
        if self.comment {
            styler.colour_to(self.end, YamlStyle::COMMENT.style());
        }
    }
}

/// Whether `value`, without trailing spaces, is a keyword such as `true` or `null`.
fn keyword_value(value: &[u8], keywords: &WordList) -> bool {
    let trimmed = match value.iter().rposition(|&b| b != b' ') {
        Some(last) => &value[..=last],
        None => return false,
    };
    if trimmed.len() > 99 {
        return false;
    }
    keywords.in_list(&String::from_utf8_lossy(trimmed))
}

/// Style one line, including its line end, which occupies `line_start..=end`.
fn colourise_line(
    line: &[u8],
    current_line: usize,
    line_start: usize,
    end: usize,
    keywords: &WordList,
    styler: &mut LexAccessor<'_>,
) {
    let len = line.len();
    let at = |i: usize| line.get(i).copied().unwrap_or(0);
    let indent = line.iter().take_while(|&&b| b == b' ').count() as i32;

    if current_line > 0 {
        let parent_state = styler.get_line_state(current_line - 1);
        if matches!(parent_state & STATE_MASK, STATE_TEXT | STATE_TEXT_PARENT) {
            let parent_indent = parent_state & !STATE_MASK;
            if indent > parent_indent {
                styler.set_line_state(current_line, STATE_TEXT | parent_indent);
                styler.colour_to(end, YamlStyle::TEXT.style());
                return;
            }
        }
    }
    styler.set_line_state(current_line, 0);
    if line.starts_with(b"---") || line.starts_with(b"...") {
        styler.set_line_state(current_line, STATE_DOCUMENT);
        styler.colour_to(end, YamlStyle::DOCUMENT.style());
        return;
    }

    let mut i = indent as usize;
    // Indentation is spaces only.
    if at(i) == b'\t' {
        styler.colour_to(end, YamlStyle::ERROR.style());
        return;
    }
    if at(i) == b'#' {
        styler.set_line_state(current_line, STATE_COMMENT);
        styler.colour_to(end, YamlStyle::COMMENT.style());
        return;
    }

    let mut in_quotes = false;
    while i < len {
        let ch = line[i];
        if ch == b'\'' || ch == b'"' {
            in_quotes = !in_quotes;
        } else if ch == b'#' && is_space(at(i.wrapping_sub(1))) && !in_quotes {
            colour_before(styler, line_start, i, YamlStyle::DEFAULT);
            styler.colour_to(end, YamlStyle::COMMENT.style());
            return;
        } else if ch == b':' && !in_quotes && (is_white_space_or_eol(at(i + 1)) || i + 1 == len) {
            colour_before(styler, line_start, i, YamlStyle::IDENTIFIER);
            styler.colour_to(line_start + i, YamlStyle::OPERATOR.style());
            i += 1;
            while i < len && is_space(line[i]) {
                i += 1;
            }
            // The value, without trailing blanks and the line end.
            let mut limit = len;
            while limit > i && is_space(line[limit - 1]) {
                limit -= 1;
            }
            let value = |k: usize| if k < limit { line[k] } else { 0 };

            if value(i) == b'|' || value(i) == b'>' {
                i += 1;
                if value(i) == b'+' || value(i) == b'-' {
                    i += 1;
                }
                while i < limit && is_space(value(i)) {
                    i += 1;
                }
                match value(i) {
                    0 => {
                        styler.set_line_state(current_line, STATE_TEXT_PARENT | indent);
                        styler.colour_to(end, YamlStyle::DEFAULT.style());
                    }
                    b'#' => {
                        styler.set_line_state(current_line, STATE_TEXT_PARENT | indent);
                        colour_before(styler, line_start, i, YamlStyle::DEFAULT);
                        styler.colour_to(end, YamlStyle::COMMENT.style());
                    }
                    _ => styler.colour_to(end, YamlStyle::ERROR.style()),
                }
                return;
            } else if value(i) == b'#' {
                colour_before(styler, line_start, i, YamlStyle::DEFAULT);
                styler.colour_to(end, YamlStyle::COMMENT.style());
                return;
            }

            // A trailing comment must be preceded by a blank.
            let mut start_comment = i;
            in_quotes = false;
            while start_comment < len {
                let c = value(start_comment);
                if c == b'\'' || c == b'"' {
                    in_quotes = !in_quotes;
                }
                if c == b'#' && is_space(value(start_comment - 1)) && !in_quotes {
                    break;
                }
                start_comment += 1;
            }
            let value_end = ValueEnd {
                line_start,
                start_comment,
                comment: start_comment < len,
                end,
            };

            styler.set_line_state(current_line, STATE_VALUE);
            if value(i) == b'&' || value(i) == b'*' {
                value_end.colour(styler, YamlStyle::REFERENCE);
                return;
            }
            if start_comment > i && keyword_value(&line[i..start_comment.min(limit).max(i)], keywords) {
                value_end.colour(styler, YamlStyle::KEYWORD);
                return;
            }
            let value_start = i;
            while i < start_comment && value(i) != 0 {
                if !matches!(value(i), b'0'..=b'9' | b'-' | b'.' | b',' | b' ') {
                    value_end.colour(styler, YamlStyle::DEFAULT);
                    return;
                }
                i += 1;
            }
            if i > value_start {
                value_end.colour(styler, YamlStyle::NUMBER);
                return;
            }
            break;
        }
        i += 1;
    }
    styler.colour_to(end, YamlStyle::DEFAULT.style());
}

fn lex_yaml(start: usize, length: usize, _init_style: u8, keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    let empty = WordList::new();
    let keywords = keywords.first().unwrap_or(&empty);
    styler.start_at(start);
    styler.start_segment(start);
    let end = (start + length).min(styler.length());
    let mut current_line = styler.get_line(start);
    let mut line = Vec::new();
    let mut line_start = start;
    for i in start..end {
        line.push(styler.safe_byte_at(i, b' '));
        if at_eol(styler, i) {
            colourise_line(&line, current_line, line_start, i, keywords, styler);
            line.clear();
            line_start = i + 1;
            current_line += 1;
        }
    }
    if !line.is_empty() {
        colourise_line(&line, current_line, line_start, start + length - 1, keywords, styler);
    }
}

fn is_comment_line(styler: &mut LexAccessor<'_>, line: usize) -> bool {
    let pos = styler.line_start(line);
    styler.safe_byte_at(pos, b' ') == b'#'
}

/// Indentation-based folding. Blank and comment lines take the level of the block they sit in;
/// with `fold.comment.yaml` a run of comment lines also folds on its own.
fn fold_yaml(start: usize, length: usize, _init_style: u8, _keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    let max_line = styler.get_line((start + length).saturating_sub(1));
    let doc_lines = styler.get_line(styler.length().saturating_sub(1));
    let fold_comment = styler.get_property_int("fold.comment.yaml", 0) != 0;

    // Back up to a line with content so blank lines get the right level and the preceding line's
    // header flag can be fixed.
    let mut line = styler.get_line(start);
    let mut indent_current = styler.indent_amount(line, None).0;
    while line > 0 {
        line -= 1;
        indent_current = styler.indent_amount(line, None).0;
        if indent_current & FOLD_LEVEL_WHITE_FLAG == 0 && !is_comment_line(styler, line) {
            break;
        }
    }
    let mut indent_current_level = indent_current & FOLD_LEVEL_NUMBER_MASK;

    let mut prev_comment = line >= 1 && fold_comment && is_comment_line(styler, line - 1);

    // A comment block hanging over the end of the range is finished.
    while line <= doc_lines && (line <= max_line || prev_comment) {
        let mut lev = indent_current;
        let mut line_next = line + 1;
        let mut indent_next = indent_current;
        if line_next <= doc_lines {
            indent_next = styler.indent_amount(line_next, None).0;
        }
        let comment = fold_comment && is_comment_line(styler, line);
        let comment_start = comment
            && !prev_comment
            && line_next <= doc_lines
            && is_comment_line(styler, line_next)
            && lev > FOLD_LEVEL_BASE;
        let comment_continue = comment && prev_comment;
        if !comment {
            indent_current_level = indent_current & FOLD_LEVEL_NUMBER_MASK;
        }
        if indent_next & FOLD_LEVEL_WHITE_FLAG != 0 {
            indent_next = FOLD_LEVEL_WHITE_FLAG | indent_current_level;
        }

        if comment_start {
            lev |= FOLD_LEVEL_HEADER_FLAG;
        } else if comment_continue {
            lev += 1;
        }

        // Blank and comment lines do not decide the next level.
        while line_next < doc_lines
            && (indent_next & FOLD_LEVEL_WHITE_FLAG != 0 || is_comment_line(styler, line_next))
        {
            line_next += 1;
            indent_next = styler.indent_amount(line_next, None).0;
        }

        let level_after_comments = indent_next & FOLD_LEVEL_NUMBER_MASK;
        let level_before_comments = indent_current_level.max(level_after_comments);

        // Skipped lines, last to first: those indented deeper than what follows belong to the
        // block before.
        let mut skip_level = level_after_comments;
        for skip_line in (line + 1..line_next).rev() {
            let skip_indent = styler.indent_amount(skip_line, None).0;
            if skip_indent & FOLD_LEVEL_NUMBER_MASK > level_after_comments {
                skip_level = level_before_comments;
            }
            styler.set_level(skip_line, skip_level | (skip_indent & FOLD_LEVEL_WHITE_FLAG));
        }

        if !comment
            && indent_current & FOLD_LEVEL_WHITE_FLAG == 0
            && (indent_current & FOLD_LEVEL_NUMBER_MASK) < (indent_next & FOLD_LEVEL_NUMBER_MASK)
        {
            lev |= FOLD_LEVEL_HEADER_FLAG;
        }

        prev_comment = comment_start || comment_continue;
        styler.set_level(line, lev);
        indent_current = indent_next;
        line = line_next;
    }
}

/// YAML documents.
pub static LEXER_YAML: LexerModule =
    LexerModule::new::<YamlStyle>(48, "yaml", lex_yaml, Some(fold_yaml), WORD_LIST_DESCRIPTIONS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_value_ignores_trailing_spaces() {
        let mut keywords = WordList::new();
        keywords.set("true false null", false);
        assert!(keyword_value(b"true  ", &keywords));
        assert!(!keyword_value(b"truex", &keywords));
        assert!(!keyword_value(b"   ", &keywords));
    }

    #[test]
    fn test_state_layout() {
        let state = STATE_TEXT_PARENT | 4;
        assert_eq!(state & STATE_MASK, STATE_TEXT_PARENT);
        assert_eq!(state & !STATE_MASK, 4);
    }
}
