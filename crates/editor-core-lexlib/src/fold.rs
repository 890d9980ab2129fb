//! Fold level encoding.
//!
//! A fold level is an `i32` whose low 12 bits hold the nesting depth (offset by
//! [`FOLD_LEVEL_BASE`]) and whose flag bits mark headers and whitespace-only lines.

/// Depth of a top-level line.
pub const FOLD_LEVEL_BASE: i32 = 0x400;
/// Set on lines that contain only whitespace.
pub const FOLD_LEVEL_WHITE_FLAG: i32 = 0x1000;
/// Set on lines that open a foldable block.
pub const FOLD_LEVEL_HEADER_FLAG: i32 = 0x2000;
/// Mask extracting the depth from a level.
pub const FOLD_LEVEL_NUMBER_MASK: i32 = 0x0FFF;

/// The depth part of `level`.
pub fn level_number(level: i32) -> i32 {
    level & FOLD_LEVEL_NUMBER_MASK
}

/// Whether `level` carries [`FOLD_LEVEL_HEADER_FLAG`].
pub fn is_header(level: i32) -> bool {
    level & FOLD_LEVEL_HEADER_FLAG != 0
}

/// Whether `level` carries [`FOLD_LEVEL_WHITE_FLAG`].
pub fn is_white(level: i32) -> bool {
    level & FOLD_LEVEL_WHITE_FLAG != 0
}

/// Compose the level written at the end of a line from the depth the line started at, the depth
/// it leaves open for the next line and whether it had any visible content.
///
/// Blank lines get the whitespace flag when `compact` is set; lines that open more than they
/// close get the header flag.
pub fn line_level(level_prev: i32, level_current: i32, visible_chars: usize, compact: bool) -> i32 {
    let mut lev = level_prev;
    if visible_chars == 0 && compact {
        lev |= FOLD_LEVEL_WHITE_FLAG;
    }
    if level_current > level_prev && visible_chars > 0 {
        lev |= FOLD_LEVEL_HEADER_FLAG;
    }
    lev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_level_flags() {
        let base = FOLD_LEVEL_BASE;
        assert_eq!(line_level(base, base, 0, true), base | FOLD_LEVEL_WHITE_FLAG);
        assert_eq!(line_level(base, base, 0, false), base);
        assert_eq!(line_level(base, base + 1, 3, true), base | FOLD_LEVEL_HEADER_FLAG);
        assert_eq!(line_level(base + 1, base, 3, true), base + 1);
        assert!(is_header(line_level(base, base + 2, 1, false)));
        assert_eq!(level_number(base | FOLD_LEVEL_HEADER_FLAG), base);
    }
}
