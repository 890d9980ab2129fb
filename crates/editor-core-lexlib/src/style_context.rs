//! The per-character cursor lexers iterate with.

use crate::accessor::LexAccessor;
use crate::character_set::make_lower_case;

/// A lexer's style enumeration.
///
/// Implemented by [`lexer_styles!`](crate::lexer_styles) for `#[repr(u8)]` enums.
pub trait LexState: Copy + Eq + 'static {
    /// Every state in style order.
    const ALL: &'static [Self];

    /// The state for a stored style byte. Unknown bytes, such as allocated sub-styles, map to
    /// the first state.
    fn from_style(style: u8) -> Self;

    /// The style byte stored for this state.
    fn style(self) -> u8;

    /// Identifier of this state, e.g. `COMMENTLINE`.
    fn name(self) -> &'static str;

    /// Name of the state stored as `style`, empty when no state uses that byte.
    fn name_of_style(style: u8) -> &'static str {
        Self::ALL
            .iter()
            .find(|state| state.style() == style)
            .map_or("", |state| state.name())
    }
}

/// Declare a `#[repr(u8)]` style enum implementing [`LexState`].
///
/// ```
/// editor_core_lexlib::lexer_styles! {
///     pub enum DemoStyle {
///         DEFAULT = 0,
///         COMMENT = 1,
///         WORD = 2,
///     }
/// }
/// use editor_core_lexlib::LexState;
/// assert_eq!(DemoStyle::from_style(1), DemoStyle::COMMENT);
/// assert_eq!(DemoStyle::from_style(200), DemoStyle::DEFAULT);
/// assert_eq!(DemoStyle::WORD.name(), "WORD");
/// ```
#[macro_export]
macro_rules! lexer_styles {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])* $first:ident = $first_value:literal
            $(, $(#[$variant_meta:meta])* $variant:ident = $value:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(missing_docs, non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $(#[$first_meta])* $first = $first_value,
            $($(#[$variant_meta])* $variant = $value,)*
        }

        impl $crate::LexState for $name {
            const ALL: &'static [Self] = &[$name::$first $(, $name::$variant)*];

            fn from_style(style: u8) -> Self {
                match style {
                    $($value => $name::$variant,)*
                    _ => $name::$first,
                }
            }

            fn style(self) -> u8 {
                self as u8
            }

            fn name(self) -> &'static str {
                match self {
                    $name::$first => stringify!($first),
                    $($name::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

/// Cursor over `start..start + length` of a document.
///
/// The cursor holds the current state and the characters around the current position. Styles
/// are committed to the accessor when the state changes: everything from the start of the
/// current run up to (not including) the current position gets the old state.
///
/// Characters are decoded according to the accessor's encoding; bytes that do not decode read as
/// U+FFFD. Past the end of the range every character reads as `' '`.
pub struct StyleContext<'a, 'b, S: LexState> {
    styler: &'b mut LexAccessor<'a>,
    length_document: usize,
    end_pos: usize,
    line_doc_end: usize,
    line_start_next: usize,
    current_pos: usize,
    current_line: usize,
    at_line_start: bool,
    at_line_end: bool,
    state: S,
    ch_prev: char,
    ch: char,
    width: usize,
    ch_next: char,
    width_next: usize,
}

impl<'a, 'b, S: LexState> StyleContext<'a, 'b, S> {
    /// Start styling `start..start + length` in the state stored as `init_style`.
    pub fn new(start: usize, length: usize, init_style: u8, styler: &'b mut LexAccessor<'a>) -> Self {
        Self::with_state(start, length, S::from_style(init_style), styler)
    }

    /// Start styling `start..start + length` in `state`.
    pub fn with_state(start: usize, length: usize, state: S, styler: &'b mut LexAccessor<'a>) -> Self {
        styler.start_at(start);
        styler.start_segment(start);
        let length_document = styler.length();
        let current_line = styler.get_line(start);
        let line_start_next = styler.line_start(current_line + 1);
        let mut end_pos = start + length;
        if end_pos == length_document {
            end_pos += 1;
        }
        let line_doc_end = styler.get_line(length_document);
        let at_line_start = styler.line_start(current_line) == start;
        let ch_prev = styler.character_before(start);
        let mut sc = Self {
            styler,
            length_document,
            end_pos,
            line_doc_end,
            line_start_next,
            current_pos: start,
            current_line,
            at_line_start,
            at_line_end: false,
            state,
            ch_prev,
            ch: '\0',
            width: 0,
            ch_next: '\0',
            width_next: 1,
        };
        sc.get_next_char();
        sc.ch = sc.ch_next;
        sc.width = sc.width_next;
        sc.get_next_char();
        sc
    }

    fn get_next_char(&mut self) {
        let (ch, width) = self.styler.character_and_width(self.current_pos + self.width);
        self.ch_next = ch;
        self.width_next = width;
        self.at_line_end = if self.current_line < self.line_doc_end {
            self.current_pos + 1 >= self.line_start_next
        } else {
            self.current_pos >= self.line_start_next
        };
    }

    /// Whether the cursor is still inside the range.
    pub fn more(&self) -> bool {
        self.current_pos < self.end_pos
    }

    /// Move one character forward.
    pub fn forward(&mut self) {
        if self.current_pos < self.end_pos {
            self.at_line_start = self.at_line_end;
            if self.at_line_start {
                self.current_line += 1;
                self.line_start_next = self.styler.line_start(self.current_line + 1);
            }
            self.ch_prev = self.ch;
            self.current_pos += self.width;
            self.ch = self.ch_next;
            self.width = self.width_next;
            self.get_next_char();
        } else {
            self.at_line_start = false;
            self.ch_prev = ' ';
            self.ch = ' ';
            self.ch_next = ' ';
            self.at_line_end = true;
        }
    }

    /// Move `n` characters forward.
    pub fn forward_n(&mut self, n: usize) {
        for _ in 0..n {
            self.forward();
        }
    }

    /// Move forward until at least `n` bytes have been passed.
    pub fn forward_bytes(&mut self, n: usize) {
        let target = self.current_pos + n;
        while target > self.current_pos {
            let before = self.current_pos;
            self.forward();
            if self.current_pos == before {
                return;
            }
        }
    }

    fn colour_current(&mut self, style: u8) {
        let end = self.current_pos.min(self.length_document);
        if end > self.styler.get_start_segment() {
            self.styler.colour_to(end - 1, style);
        }
    }

    /// Close the current run in the current state and continue in `state`.
    pub fn set_state(&mut self, state: S) {
        self.colour_current(self.state.style());
        self.state = state;
    }

    /// Close the current run with the raw `style` (usually an allocated sub-style) and continue
    /// in `state`.
    pub fn set_state_with_style(&mut self, style: u8, state: S) {
        self.colour_current(style);
        self.state = state;
    }

    /// Relabel the current run without closing it.
    pub fn change_state(&mut self, state: S) {
        self.state = state;
    }

    /// [`StyleContext::forward`] then [`StyleContext::set_state`].
    pub fn forward_set_state(&mut self, state: S) {
        self.forward();
        self.set_state(state);
    }

    /// Commit the final run and flush pending styles.
    pub fn complete(&mut self) {
        self.colour_current(self.state.style());
        self.styler.flush();
    }

    /// Bytes in the current run.
    pub fn length_current(&self) -> usize {
        self.current_pos - self.styler.get_start_segment()
    }

    /// Current state.
    pub fn state(&self) -> S {
        self.state
    }

    /// Current character.
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Character after the current one.
    pub fn ch_next(&self) -> char {
        self.ch_next
    }

    /// Character before the current one.
    pub fn ch_prev(&self) -> char {
        self.ch_prev
    }

    /// Byte position of the current character.
    pub fn current_pos(&self) -> usize {
        self.current_pos
    }

    /// Line of the current character.
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    /// Whether the current character is the first of its line.
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Whether the current character is the last of its line (the `\n` of a `\r\n` pair).
    pub fn at_line_end(&self) -> bool {
        self.at_line_end
    }

    /// Byte `n` positions away from the current one, `'\0'` outside the document.
    pub fn get_relative(&mut self, n: isize) -> char {
        self.styler.char_at(self.current_pos as isize + n)
    }

    /// Like [`StyleContext::get_relative`] but `n == 0` is the current decoded character.
    pub fn get_relative_char(&mut self, n: isize) -> char {
        if n == 0 {
            self.ch
        } else {
            self.get_relative(n)
        }
    }

    /// Whether the current character is `c0`.
    pub fn match_char(&self, c0: char) -> bool {
        self.ch == c0
    }

    /// Whether the current and next characters are `c0` and `c1`.
    pub fn match_pair(&self, c0: char, c1: char) -> bool {
        self.ch == c0 && self.ch_next == c1
    }

    /// Whether the text at the cursor starts with the ASCII string `s`.
    pub fn matches(&mut self, s: &str) -> bool {
        let mut bytes = s.bytes();
        match bytes.next() {
            Some(b) if u32::from(b) == u32::from(self.ch) => {}
            Some(_) => return false,
            None => return true,
        }
        match bytes.next() {
            Some(b) if u32::from(b) == u32::from(self.ch_next) => {}
            Some(_) => return false,
            None => return true,
        }
        bytes
            .enumerate()
            .all(|(i, b)| self.styler.safe_byte_at(self.current_pos + 2 + i, 0) == b)
    }

    /// [`StyleContext::matches`] comparing the document text lowered; `s` must be lower case.
    pub fn match_ignore_case(&mut self, s: &str) -> bool {
        let mut bytes = s.bytes();
        let lowered = |c: char| u32::from(make_lower_case(c));
        match bytes.next() {
            Some(b) if u32::from(b) == lowered(self.ch) => {}
            Some(_) => return false,
            None => return true,
        }
        match bytes.next() {
            Some(b) if u32::from(b) == lowered(self.ch_next) => {}
            Some(_) => return false,
            None => return true,
        }
        bytes.enumerate().all(|(i, b)| {
            self.styler
                .safe_byte_at(self.current_pos + 2 + i, 0)
                .to_ascii_lowercase()
                == b
        })
    }

    /// Whether the cursor is on the first line end character (or the end of the last line).
    pub fn match_line_end(&self) -> bool {
        self.current_pos == self.styler.line_end(self.current_line)
    }

    /// Text of the current run.
    pub fn get_current(&mut self) -> String {
        let start = self.styler.get_start_segment();
        self.styler.get_range(start, self.current_pos)
    }

    /// Text of the current run with ASCII letters lowered.
    pub fn get_current_lowered(&mut self) -> String {
        let start = self.styler.get_start_segment();
        self.styler.get_range_lowered(start, self.current_pos)
    }

    /// The accessor, for line states and look-ahead beyond the cursor.
    pub fn styler(&mut self) -> &mut LexAccessor<'a> {
        self.styler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;
    use pretty_assertions::assert_eq;

    lexer_styles! {
        enum Demo {
            DEFAULT = 0,
            WORD = 1,
            NUMBER = 2,
        }
    }

    fn run(text: &str) -> Vec<u8> {
        let mut doc = TextDocument::new(text);
        {
            let mut styler = LexAccessor::new(&mut doc);
            let mut sc: StyleContext<'_, '_, Demo> = StyleContext::new(0, text.len(), 0, &mut styler);
            while sc.more() {
                match sc.state() {
                    Demo::WORD if !sc.ch().is_ascii_alphabetic() => sc.set_state(Demo::DEFAULT),
                    Demo::NUMBER if !sc.ch().is_ascii_digit() => sc.set_state(Demo::DEFAULT),
                    _ => {}
                }
                if sc.state() == Demo::DEFAULT {
                    if sc.ch().is_ascii_alphabetic() {
                        sc.set_state(Demo::WORD);
                    } else if sc.ch().is_ascii_digit() {
                        sc.set_state(Demo::NUMBER);
                    }
                }
                sc.forward();
            }
            sc.complete();
        }
        doc.styles().to_vec()
    }

    #[test]
    fn test_runs_are_committed_on_state_change() {
        assert_eq!(run("ab 12"), vec![1, 1, 0, 2, 2]);
        assert_eq!(run(""), Vec::<u8>::new());
        assert_eq!(run("x"), vec![1]);
    }

    #[test]
    fn test_previous_character_seeded_from_document() {
        let mut doc = TextDocument::new("ab\rcé\nd");
        let mut styler = LexAccessor::new(&mut doc);
        let sc: StyleContext<'_, '_, Demo> = StyleContext::new(0, 8, 0, &mut styler);
        assert_eq!(sc.ch_prev(), '\0');
        let sc: StyleContext<'_, '_, Demo> = StyleContext::new(3, 5, 0, &mut styler);
        assert_eq!(sc.ch_prev(), '\r');
        assert_eq!(sc.ch(), 'c');
        let sc: StyleContext<'_, '_, Demo> = StyleContext::new(6, 2, 0, &mut styler);
        assert_eq!(sc.ch_prev(), 'é');
        assert_eq!(sc.ch(), '\n');
    }

    #[test]
    fn test_line_flags_with_crlf() {
        let mut doc = TextDocument::new("a\r\nb");
        let mut styler = LexAccessor::new(&mut doc);
        let mut sc: StyleContext<'_, '_, Demo> = StyleContext::new(0, 4, 0, &mut styler);
        assert!(sc.at_line_start());
        assert!(!sc.at_line_end());
        sc.forward();
        assert_eq!(sc.ch(), '\r');
        assert!(!sc.at_line_end());
        assert!(sc.match_line_end());
        sc.forward();
        assert_eq!(sc.ch(), '\n');
        assert!(sc.at_line_end());
        sc.forward();
        assert!(sc.at_line_start());
        assert_eq!(sc.current_line(), 1);
        assert_eq!(sc.ch(), 'b');
        assert!(!sc.at_line_end());
        sc.forward();
        assert!(sc.at_line_end());
    }

    #[test]
    fn test_matching_and_current_text() {
        let mut doc = TextDocument::new("While(x)");
        let mut styler = LexAccessor::new(&mut doc);
        let mut sc: StyleContext<'_, '_, Demo> = StyleContext::new(0, 8, 0, &mut styler);
        assert!(sc.match_ignore_case("while"));
        assert!(!sc.matches("while"));
        assert!(sc.matches("Whi"));
        assert!(sc.match_pair('W', 'h'));
        sc.forward_n(5);
        assert_eq!(sc.get_current(), "While");
        assert_eq!(sc.get_current_lowered(), "while");
        assert_eq!(sc.length_current(), 5);
        assert_eq!(sc.get_relative(1), 'x');
        assert_eq!(sc.get_relative(-1), 'e');
        assert_eq!(sc.ch_prev(), 'e');
    }

    #[test]
    fn test_multibyte_characters() {
        let mut doc = TextDocument::new("é1");
        let mut styler = LexAccessor::new(&mut doc);
        let mut sc: StyleContext<'_, '_, Demo> = StyleContext::new(0, 3, 0, &mut styler);
        assert_eq!(sc.ch(), 'é');
        assert_eq!(sc.ch_next(), '1');
        sc.forward();
        assert_eq!(sc.current_pos(), 2);
        sc.forward();
        sc.forward();
        assert!(!sc.more());
        assert_eq!(sc.ch(), '\0');
        sc.forward();
        assert_eq!(sc.ch(), ' ');
    }

    #[test]
    fn test_style_names() {
        assert_eq!(Demo::ALL.len(), 3);
        assert_eq!(Demo::NUMBER.name(), "NUMBER");
        assert_eq!(Demo::from_style(2), Demo::NUMBER);
    }
}
