//! The `diff` lexer: unified, context, normal, p4 and difflib output.
//!
//! Styling is line based. Folding builds a three level hierarchy from the styles: commands
//! (`diff ...`, `Index: ...`) contain file headers, which contain hunk positions.

use editor_core_lexlib::{
    FOLD_LEVEL_BASE, FOLD_LEVEL_HEADER_FLAG, FOLD_LEVEL_NUMBER_MASK, LexAccessor, LexState, LexerModule, WordList,
    lexer_styles,
};

lexer_styles! {
    /// Styles of the `diff` lexer.
    pub enum DiffStyle {
        DEFAULT = 0,
        COMMENT = 1,
        COMMAND = 2,
        HEADER = 3,
        POSITION = 4,
        DELETED = 5,
        ADDED = 6,
        CHANGED = 7,
        PATCH_ADD = 8,
        PATCH_DELETE = 9,
        REMOVED_PATCH_ADD = 10,
        REMOVED_PATCH_DELETE = 11,
    }
}

/// A lone `\r` or a `\n` ends a line; the `\r` of `\r\n` belongs to the line.
fn at_eol(styler: &mut LexAccessor<'_>, i: usize) -> bool {
    let ch = styler.safe_byte_at(i, b' ');
    ch == b'\n' || (ch == b'\r' && styler.safe_byte_at(i + 1, b' ') != b'\n')
}

/// Whether the text starts with a non-zero decimal integer, after optional blanks and sign.
fn has_line_number(text: &[u8]) -> bool {
    let text = text.trim_ascii_start();
    let text = text.strip_prefix(b"-").or_else(|| text.strip_prefix(b"+")).unwrap_or(text);
    text.iter()
        .take_while(|b| b.is_ascii_digit())
        .any(|&b| b != b'0')
}

/// Classify one line of diff output, without its line end.
pub fn classify_line(line: &[u8]) -> DiffStyle {
    let at = |i: usize| line.get(i).copied();
    let position_marker = |line: &[u8]| has_line_number(&line[4.min(line.len())..]) && !line.contains(&b'/');

    if line.starts_with(b"diff ") || line.starts_with(b"Index: ") {
        DiffStyle::COMMAND
    } else if line.starts_with(b"---") && at(3) != Some(b'-') {
        // Context diffs use "---" both for file headers and for hunk positions.
        match at(3) {
            Some(b' ') if position_marker(line) => DiffStyle::POSITION,
            None | Some(b'\r' | b'\n') => DiffStyle::POSITION,
            Some(b' ') => DiffStyle::HEADER,
            _ => DiffStyle::DELETED,
        }
    } else if line.starts_with(b"+++ ") {
        if position_marker(line) {
            DiffStyle::POSITION
        } else {
            DiffStyle::HEADER
        }
    } else if line.starts_with(b"====") {
        DiffStyle::HEADER
    } else if line.starts_with(b"***") {
        match at(3) {
            Some(b' ') if position_marker(line) => DiffStyle::POSITION,
            Some(b'*') => DiffStyle::POSITION,
            _ => DiffStyle::HEADER,
        }
    } else if line.starts_with(b"? ") {
        DiffStyle::HEADER
    } else {
        match (at(0), at(1)) {
            (Some(b'@' | b'0'..=b'9'), _) => DiffStyle::POSITION,
            (Some(b'+'), Some(b'+')) => DiffStyle::PATCH_ADD,
            (Some(b'+'), Some(b'-')) => DiffStyle::PATCH_DELETE,
            (Some(b'-'), Some(b'+')) => DiffStyle::REMOVED_PATCH_ADD,
            (Some(b'-'), Some(b'-')) => DiffStyle::REMOVED_PATCH_DELETE,
            (Some(b'-' | b'<'), _) => DiffStyle::DELETED,
            (Some(b'+' | b'>'), _) => DiffStyle::ADDED,
            (Some(b'!'), _) => DiffStyle::CHANGED,
            (Some(b' '), _) => DiffStyle::DEFAULT,
            _ => DiffStyle::COMMENT,
        }
    }
}

fn lex_diff(start: usize, length: usize, _init_style: u8, _keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    styler.start_at(start);
    styler.start_segment(start);
    let mut line = Vec::new();
    for i in start..start + length {
        if at_eol(styler, i) {
            styler.colour_to(i, classify_line(&line).style());
            line.clear();
        } else {
            line.push(styler.safe_byte_at(i, b' '));
        }
    }
    if !line.is_empty() {
        styler.colour_to(start + length - 1, classify_line(&line).style());
    }
}

fn fold_diff(start: usize, length: usize, _init_style: u8, _keywords: &[WordList], styler: &mut LexAccessor<'_>) {
    let mut line = styler.get_line(start);
    let mut line_start = styler.line_start(line);
    let mut prev_level = if line > 0 {
        styler.level_at(line - 1)
    } else {
        FOLD_LEVEL_BASE
    };

    loop {
        let next_level = match DiffStyle::from_style(styler.style_at(line_start)) {
            DiffStyle::COMMAND => FOLD_LEVEL_BASE | FOLD_LEVEL_HEADER_FLAG,
            DiffStyle::HEADER => (FOLD_LEVEL_BASE + 1) | FOLD_LEVEL_HEADER_FLAG,
            DiffStyle::POSITION if styler.safe_byte_at(line_start, b' ') != b'-' => {
                (FOLD_LEVEL_BASE + 2) | FOLD_LEVEL_HEADER_FLAG
            }
            _ if prev_level & FOLD_LEVEL_HEADER_FLAG != 0 => (prev_level & FOLD_LEVEL_NUMBER_MASK) + 1,
            _ => prev_level,
        };

        // A header directly followed by a header at the same depth has nothing to fold.
        if next_level & FOLD_LEVEL_HEADER_FLAG != 0 && next_level == prev_level && line > 0 {
            styler.set_level(line - 1, prev_level & !FOLD_LEVEL_HEADER_FLAG);
        }
        styler.set_level(line, next_level);
        prev_level = next_level;

        line += 1;
        line_start = styler.line_start(line);
        if start + length <= line_start {
            break;
        }
    }
}

/// Unified and context diffs.
pub static LEXER_DIFF: LexerModule = LexerModule::new::<DiffStyle>(16, "diff", lex_diff, Some(fold_diff), &[]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headers_and_positions() {
        assert_eq!(classify_line(b"diff --git a/x b/x"), DiffStyle::COMMAND);
        assert_eq!(classify_line(b"--- a/src/main.rs"), DiffStyle::HEADER);
        assert_eq!(classify_line(b"--- 12,14 ----"), DiffStyle::POSITION);
        assert_eq!(classify_line(b"---"), DiffStyle::POSITION);
        assert_eq!(classify_line(b"+++ b/src/main.rs"), DiffStyle::HEADER);
        assert_eq!(classify_line(b"*** 1,5 ****"), DiffStyle::POSITION);
        assert_eq!(classify_line(b"***************"), DiffStyle::POSITION);
        assert_eq!(classify_line(b"@@ -1,3 +1,4 @@"), DiffStyle::POSITION);
        assert_eq!(classify_line(b"12c12"), DiffStyle::POSITION);
    }

    #[test]
    fn test_classify_changes() {
        assert_eq!(classify_line(b"-old"), DiffStyle::DELETED);
        assert_eq!(classify_line(b"< old"), DiffStyle::DELETED);
        assert_eq!(classify_line(b"+new"), DiffStyle::ADDED);
        assert_eq!(classify_line(b"> new"), DiffStyle::ADDED);
        assert_eq!(classify_line(b"! changed"), DiffStyle::CHANGED);
        assert_eq!(classify_line(b"++patch"), DiffStyle::PATCH_ADD);
        assert_eq!(classify_line(b"+-patch"), DiffStyle::PATCH_DELETE);
        assert_eq!(classify_line(b"-+patch"), DiffStyle::REMOVED_PATCH_ADD);
        assert_eq!(classify_line(b"--patch"), DiffStyle::REMOVED_PATCH_DELETE);
        assert_eq!(classify_line(b" context"), DiffStyle::DEFAULT);
        assert_eq!(classify_line(b"Only in a: b"), DiffStyle::COMMENT);
        assert_eq!(classify_line(b""), DiffStyle::COMMENT);
    }
}
