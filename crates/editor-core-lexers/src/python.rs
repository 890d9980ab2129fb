//! The `python` lexer.
//!
//! Handles Python 2 and 3 (and the `cdef` / `cpdef` / `cimport` forms of Cython). Replacement
//! fields inside f-strings are not lexed separately and keep the f-string style.

use editor_core_lexlib::character_set::{is_a_digit, is_alpha_numeric, is_operator, is_xid_continue, is_xid_start};
use editor_core_lexlib::{
    Document, FOLD_LEVEL_HEADER_FLAG, FOLD_LEVEL_NUMBER_MASK, FOLD_LEVEL_WHITE_FLAG, LexAccessor, LexState, Lexer,
    LexerModule, OptionSet, PropertyType, StyleContext, SubStyles, WordList, lexer_styles,
};
use tracing::{debug, trace};

lexer_styles! {
    /// Styles of the `python` lexer.
    pub enum PythonStyle {
        DEFAULT = 0,
        COMMENTLINE = 1,
        NUMBER = 2,
        /// Double quoted string.
        STRING = 3,
        /// Single quoted string.
        CHARACTER = 4,
        WORD = 5,
        TRIPLE = 6,
        TRIPLEDOUBLE = 7,
        CLASSNAME = 8,
        DEFNAME = 9,
        OPERATOR = 10,
        IDENTIFIER = 11,
        /// Comment starting with `##`.
        COMMENTBLOCK = 12,
        STRINGEOL = 13,
        /// Identifier from the second keyword list.
        WORD2 = 14,
        DECORATOR = 15,
        FSTRING = 16,
        FCHARACTER = 17,
        FTRIPLE = 18,
        FTRIPLEDOUBLE = 19,
        ATTRIBUTE = 20,
    }
}

const WORD_LIST_DESCRIPTIONS: &[&str] = &["Keywords", "Highlighted identifiers"];

/// The keyword that decides how the next identifier is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeywordKind {
    Other,
    Class,
    Def,
    Import,
    CDef,
    CPDef,
}

impl KeywordKind {
    fn is_cdef(self) -> bool {
        matches!(self, KeywordKind::CDef | KeywordKind::CPDef)
    }
}

/// String prefixes accepted besides `r`.
#[derive(Debug, Clone, Copy, Default)]
struct Literals {
    u: bool,
    b: bool,
    f: bool,
}

impl Literals {
    fn is_type_char(self, ch: char) -> bool {
        (self.b && matches!(ch, 'b' | 'B')) || (self.u && matches!(ch, 'u' | 'U')) || (self.f && matches!(ch, 'f' | 'F'))
    }
}

#[derive(Debug, Clone)]
struct OptionsPython {
    base2or8_literals: bool,
    strings_u: bool,
    strings_b: bool,
    strings_f: bool,
    strings_over_newline: bool,
    keywords2_no_sub_identifiers: bool,
    fold: bool,
    fold_quotes: bool,
    fold_compact: bool,
    unicode_identifiers: bool,
    identifier_attributes: i32,
    decorator_attributes: i32,
}

impl Default for OptionsPython {
    fn default() -> Self {
        Self {
            base2or8_literals: true,
            strings_u: true,
            strings_b: true,
            strings_f: true,
            strings_over_newline: false,
            keywords2_no_sub_identifiers: false,
            fold: false,
            fold_quotes: false,
            fold_compact: false,
            unicode_identifiers: true,
            identifier_attributes: 0,
            decorator_attributes: 0,
        }
    }
}

impl OptionsPython {
    fn literals(&self) -> Literals {
        Literals {
            u: self.strings_u,
            b: self.strings_b,
            f: self.strings_f,
        }
    }
}

fn option_set() -> OptionSet<OptionsPython> {
    let mut set = OptionSet::new();
    set.define_bool(
        "lexer.python.literals.binary",
        |o: &mut OptionsPython| &mut o.base2or8_literals,
        "Set to 0 to not recognise Python 3 binary and octal literals: 0b1011 0o712.",
    );
    set.define_bool(
        "lexer.python.strings.u",
        |o| &mut o.strings_u,
        "Set to 0 to not recognise Python Unicode literals u\"x\" as used before Python 3.",
    );
    set.define_bool(
        "lexer.python.strings.b",
        |o| &mut o.strings_b,
        "Set to 0 to not recognise Python 3 bytes literals b\"x\".",
    );
    set.define_bool(
        "lexer.python.strings.f",
        |o| &mut o.strings_f,
        "Set to 0 to not recognise Python 3.6 f-string literals f\"var={var}\".",
    );
    set.define_bool(
        "lexer.python.strings.over.newline",
        |o| &mut o.strings_over_newline,
        "Set to 1 to allow strings to span newline characters.",
    );
    set.define_bool(
        "lexer.python.keywords2.no.sub.identifiers",
        |o| &mut o.keywords2_no_sub_identifiers,
        "When enabled, keywords2 items used as a sub-identifier, as in \"foo.open\", are not styled.",
    );
    set.define_bool("fold", |o| &mut o.fold, "Enable folding.");
    set.define_bool(
        "fold.quotes.python",
        |o| &mut o.fold_quotes,
        "Fold multi-line triple quoted strings.",
    );
    set.define_bool(
        "fold.compact",
        |o| &mut o.fold_compact,
        "Include trailing blank lines in the preceding fold.",
    );
    set.define_bool(
        "lexer.python.unicode.identifiers",
        |o| &mut o.unicode_identifiers,
        "Set to 0 to not recognise Python 3 Unicode identifiers.",
    );
    set.define_int(
        "lexer.python.identifier.attributes",
        |o| &mut o.identifier_attributes,
        "Set to 1 to style attributes of identifiers, 2 to also override keyword styles.",
    );
    set.define_int(
        "lexer.python.decorator.attributes",
        |o| &mut o.decorator_attributes,
        "Set to 1 to style attributes of decorators as decorators, 2 to also override keyword styles.",
    );
    set.define_word_list_sets(WORD_LIST_DESCRIPTIONS);
    set
}

fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

fn is_raw_prefix(ch: char) -> bool {
    ch == 'r' || ch == 'R'
}

fn is_space_or_tab(ch: u8) -> bool {
    ch == b' ' || ch == b'\t'
}

/// Whether a string literal starts here. `ur''` is a string but `ru''` is not; `fr''`, `rf''`,
/// `br''` and `rb''` all are.
fn is_string_start(ch: char, ch_next: char, ch_next2: char, allowed: Literals) -> bool {
    if is_quote(ch) {
        return true;
    }
    if allowed.is_type_char(ch) && (is_quote(ch_next) || (is_raw_prefix(ch_next) && is_quote(ch_next2))) {
        return true;
    }
    is_raw_prefix(ch)
        && (is_quote(ch_next) || (allowed.is_type_char(ch_next) && !matches!(ch_next, 'u' | 'U') && is_quote(ch_next2)))
}

fn is_f_string_state(state: PythonStyle) -> bool {
    matches!(
        state,
        PythonStyle::FCHARACTER | PythonStyle::FSTRING | PythonStyle::FTRIPLE | PythonStyle::FTRIPLEDOUBLE
    )
}

fn is_single_quote_string_state(state: PythonStyle) -> bool {
    matches!(
        state,
        PythonStyle::CHARACTER | PythonStyle::STRING | PythonStyle::FCHARACTER | PythonStyle::FSTRING
    )
}

fn is_triple_quote_string_state(state: PythonStyle) -> bool {
    matches!(
        state,
        PythonStyle::TRIPLE | PythonStyle::TRIPLEDOUBLE | PythonStyle::FTRIPLE | PythonStyle::FTRIPLEDOUBLE
    )
}

fn string_quote_char(state: PythonStyle) -> char {
    match state {
        PythonStyle::CHARACTER | PythonStyle::FCHARACTER | PythonStyle::TRIPLE | PythonStyle::FTRIPLE => '\'',
        PythonStyle::STRING | PythonStyle::FSTRING | PythonStyle::TRIPLEDOUBLE | PythonStyle::FTRIPLEDOUBLE => '"',
        _ => '\0',
    }
}

fn byte_char(styler: &mut LexAccessor<'_>, pos: usize) -> char {
    char::from(styler.safe_byte_at(pos, b' '))
}

/// State of the string literal whose prefix starts at `pos`, and the position after its opening
/// quotes.
fn string_state(styler: &mut LexAccessor<'_>, mut pos: usize, allowed: Literals) -> (PythonStyle, usize) {
    let mut ch = byte_char(styler, pos);
    let mut ch_next = byte_char(styler, pos + 1);
    let mut is_f_string = false;

    if is_raw_prefix(ch) {
        pos += 1;
        if allowed.is_type_char(ch_next) {
            is_f_string = matches!(ch_next, 'f' | 'F');
            pos += 1;
        }
        ch = byte_char(styler, pos);
        ch_next = byte_char(styler, pos + 1);
    } else if allowed.is_type_char(ch) {
        is_f_string = matches!(ch, 'f' | 'F');
        pos += if is_raw_prefix(ch_next) { 2 } else { 1 };
        ch = byte_char(styler, pos);
        ch_next = byte_char(styler, pos + 1);
    }

    if !is_quote(ch) {
        return (PythonStyle::DEFAULT, pos + 1);
    }
    if ch == ch_next && ch == byte_char(styler, pos + 2) {
        let state = match (ch, is_f_string) {
            ('"', true) => PythonStyle::FTRIPLEDOUBLE,
            ('"', false) => PythonStyle::TRIPLEDOUBLE,
            (_, true) => PythonStyle::FTRIPLE,
            (_, false) => PythonStyle::TRIPLE,
        };
        (state, pos + 3)
    } else {
        let state = match (ch, is_f_string) {
            ('"', true) => PythonStyle::FSTRING,
            ('"', false) => PythonStyle::STRING,
            (_, true) => PythonStyle::FCHARACTER,
            (_, false) => PythonStyle::CHARACTER,
        };
        (state, pos + 1)
    }
}

fn is_word_char(ch: char, unicode_identifiers: bool) -> bool {
    if ch.is_ascii() {
        is_alpha_numeric(ch) || ch == '.' || ch == '_'
    } else {
        unicode_identifiers && is_xid_continue(ch)
    }
}

fn is_word_start(ch: char, unicode_identifiers: bool) -> bool {
    if ch.is_ascii() {
        ch.is_ascii_alphabetic() || ch == '_'
    } else {
        unicode_identifiers && is_xid_start(ch)
    }
}

fn is_first_non_whitespace(styler: &mut LexAccessor<'_>, pos: usize) -> bool {
    let line_start = styler.line_start(styler.get_line(pos));
    (line_start..pos).all(|i| is_space_or_tab(styler.safe_byte_at(i, b' ')))
}

/// First non-blank byte in `pos..max_pos` and its position.
fn next_non_whitespace(styler: &mut LexAccessor<'_>, pos: usize, max_pos: usize) -> Option<(u8, usize)> {
    (pos..max_pos)
        .map(|p| (styler.safe_byte_at(p, 0), p))
        .find(|&(ch, _)| !matches!(ch, b' ' | b'\t' | b'\n' | b'\r'))
}

/// Whether a `match` or `case` ending at the cursor is an identifier rather than a soft keyword.
/// Only the start of a statement can be a keyword, and not when what follows cannot start an
/// expression.
fn is_match_or_case_identifier(sc: &mut StyleContext<'_, '_, PythonStyle>, word: &str) -> bool {
    if word != "match" && word != "case" {
        return false;
    }
    let pos = sc.current_pos();
    let line_end = {
        let line = sc.current_line();
        sc.styler().line_end(line)
    };
    let styler = sc.styler();
    if !is_first_non_whitespace(styler, pos - word.len()) {
        return true;
    }
    match next_non_whitespace(styler, pos, line_end) {
        Some((b'=' | b'#', _)) => true,
        // `.5` is a number.
        Some((b'.', dot)) => !next_non_whitespace(styler, dot + 1, line_end).is_some_and(|(ch, _)| ch.is_ascii_digit()),
        _ => false,
    }
}

fn is_comment_line(styler: &mut LexAccessor<'_>, line: usize) -> bool {
    let start = styler.line_start(line);
    let eol = styler.line_start(line + 1).saturating_sub(1);
    for i in start..eol {
        match styler.safe_byte_at(i, b' ') {
            b'#' => return true,
            ch if !is_space_or_tab(ch) => return false,
            _ => {}
        }
    }
    false
}

fn is_quote_line(styler: &LexAccessor<'_>, line: usize) -> bool {
    is_triple_quote_string_state(PythonStyle::from_style(styler.style_at(styler.line_start(line))))
}

/// Lexer for Python source.
pub struct LexerPython {
    options: OptionsPython,
    option_set: OptionSet<OptionsPython>,
    keywords: WordList,
    keywords2: WordList,
    sub_styles: SubStyles,
}

impl Default for LexerPython {
    fn default() -> Self {
        Self::new()
    }
}

impl LexerPython {
    /// An instance with default options and no keywords.
    pub fn new() -> Self {
        Self {
            options: OptionsPython::default(),
            option_set: option_set(),
            keywords: WordList::new(),
            keywords2: WordList::new(),
            sub_styles: SubStyles::new(&[PythonStyle::IDENTIFIER.style()]),
        }
    }

    fn create() -> Box<dyn Lexer> {
        Box::new(Self::new())
    }

    /// Close a single-line string at the end of its line unless it is continued.
    fn process_line_end(&self, sc: &mut StyleContext<'_, '_, PythonStyle>, in_continued_string: &mut bool) {
        let state = sc.state();
        if state == PythonStyle::DEFAULT || is_triple_quote_string_state(state) {
            sc.set_state(state);
        }
        if is_single_quote_string_state(state) {
            if *in_continued_string || self.options.strings_over_newline {
                *in_continued_string = false;
            } else {
                sc.change_state(PythonStyle::STRINGEOL);
                sc.forward_set_state(PythonStyle::DEFAULT);
            }
        }
    }

    /// Style of the identifier ending at the cursor: either a state or a raw sub-style.
    fn classify_identifier(
        &self,
        sc: &mut StyleContext<'_, '_, PythonStyle>,
        identifier: &str,
        kw_last: KeywordKind,
    ) -> Result<PythonStyle, u8> {
        if kw_last == KeywordKind::Import && identifier == "as" {
            return Ok(PythonStyle::WORD);
        }
        if self.keywords.in_list(identifier) && !is_match_or_case_identifier(sc, identifier) {
            return Ok(PythonStyle::WORD);
        }
        match kw_last {
            KeywordKind::Class => return Ok(PythonStyle::CLASSNAME),
            KeywordKind::Def => return Ok(PythonStyle::DEFNAME),
            KeywordKind::CDef | KeywordKind::CPDef => {
                // `cdef int f(` names a function, `cdef class C:` a class.
                let mut pos = sc.current_pos();
                let styler = sc.styler();
                loop {
                    match styler.safe_byte_at(pos, 0) {
                        b'(' => return Ok(PythonStyle::DEFNAME),
                        b':' => return Ok(PythonStyle::CLASSNAME),
                        b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
                        _ => return Ok(PythonStyle::IDENTIFIER),
                    }
                }
            }
            _ => {}
        }
        if self.keywords2.in_list(identifier) {
            if self.options.keywords2_no_sub_identifiers {
                let styler = sc.styler();
                let start = styler.get_start_segment();
                if start > 0 && styler.safe_byte_at(start - 1, 0) == b'.' {
                    return Ok(PythonStyle::IDENTIFIER);
                }
            }
            return Ok(PythonStyle::WORD2);
        }

        let sub_style = self
            .sub_styles
            .classifier(PythonStyle::IDENTIFIER.style())
            .and_then(|classifier| classifier.value_for(identifier));
        let mut style = PythonStyle::IDENTIFIER;
        if self.options.identifier_attributes > 0 || self.options.decorator_attributes > 0 {
            style = self.attribute_style(sc.styler(), sub_style.is_some());
            if style == PythonStyle::IDENTIFIER
                && let Some(sub_style) = sub_style
            {
                return Err(sub_style);
            }
            return Ok(style);
        }
        sub_style.map_or(Ok(style), Err)
    }

    /// Style for an identifier preceded by a `.`: an attribute, a decorator part or unchanged.
    /// `styled` is set when the identifier already has a sub-style.
    fn attribute_style(&self, styler: &mut LexAccessor<'_>, styled: bool) -> PythonStyle {
        let start = styler.get_start_segment();
        let Some(mut pos) = start.checked_sub(1) else {
            return PythonStyle::IDENTIFIER;
        };
        let mut ch = styler.safe_byte_at(pos, 0);
        while matches!(ch, b' ' | b'\\' | b'\t' | b'\n' | b'\r') {
            match pos.checked_sub(1) {
                Some(prev) => {
                    pos = prev;
                    ch = styler.safe_byte_at(pos, 0);
                }
                None => return PythonStyle::IDENTIFIER,
            }
        }
        if ch != b'.' {
            return PythonStyle::IDENTIFIER;
        }

        let mut is_comment = matches!(
            PythonStyle::from_style(styler.buffer_style_at(pos)),
            PythonStyle::COMMENTLINE | PythonStyle::COMMENTBLOCK
        );
        let mut is_decorator = false;
        let line_start = styler.line_start(styler.get_line(pos));
        for i in line_start..pos {
            let attr_ch = styler.safe_byte_at(i, b' ');
            is_decorator |= attr_ch == b'@';
            is_comment |= attr_ch == b'#';
            if !is_space_or_tab(attr_ch) {
                break;
            }
        }
        if is_comment {
            return PythonStyle::IDENTIFIER;
        }
        let (level, applies) = if is_decorator {
            (self.options.decorator_attributes, PythonStyle::DECORATOR)
        } else {
            (self.options.identifier_attributes, PythonStyle::ATTRIBUTE)
        };
        if (level == 1 && !styled) || level == 2 {
            applies
        } else {
            PythonStyle::IDENTIFIER
        }
    }
}

impl Lexer for LexerPython {
    fn name(&self) -> &'static str {
        "python"
    }

    fn id(&self) -> i32 {
        2
    }

    fn property_names(&self) -> &[&'static str] {
        self.option_set.property_names()
    }

    fn property_type(&self, name: &str) -> PropertyType {
        self.option_set.property_type(name)
    }

    fn describe_property(&self, name: &str) -> &str {
        self.option_set.describe_property(name)
    }

    fn property_set(&mut self, key: &str, val: &str) -> Option<usize> {
        if self.option_set.set(&mut self.options, key, val) {
            debug!(lexer = "python", key, val, "property changed");
            Some(0)
        } else {
            None
        }
    }

    fn property_get(&self, key: &str) -> Option<String> {
        self.option_set.get(key).map(str::to_string)
    }

    fn describe_word_list_sets(&self) -> &[&'static str] {
        self.option_set.describe_word_list_sets()
    }

    fn word_list_set(&mut self, index: usize, words: &str) -> Option<usize> {
        let list = match index {
            0 => &mut self.keywords,
            1 => &mut self.keywords2,
            _ => return None,
        };
        if list.set(words, false) {
            debug!(lexer = "python", index, words = list.len(), "word list changed");
            Some(0)
        } else {
            None
        }
    }

    fn lex(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document) {
        trace!(lexer = "python", start, length, init_style, "lex");
        let mut styler = LexAccessor::new(doc);
        let end = start + length;

        // Restart from the previous line, and before any lines joined to it by a backslash inside
        // a string.
        let mut start = start;
        let mut init = PythonStyle::from_style(init_style);
        if start > 0 {
            let mut line = styler.get_line(start);
            if line > 0 {
                line -= 1;
                while line > 0 {
                    let eol_style = PythonStyle::from_style(styler.style_at(styler.line_start(line) - 1));
                    if matches!(
                        eol_style,
                        PythonStyle::STRING | PythonStyle::CHARACTER | PythonStyle::STRINGEOL
                    ) {
                        line -= 1;
                    } else {
                        break;
                    }
                }
                start = styler.line_start(line);
            }
            init = if start == 0 {
                PythonStyle::DEFAULT
            } else {
                PythonStyle::from_style(styler.style_at(start - 1))
            };
        }
        if init == PythonStyle::STRINGEOL {
            init = PythonStyle::DEFAULT;
        }

        let allowed = self.options.literals();
        let unicode = self.options.unicode_identifiers;
        let mut kw_last = KeywordKind::Other;
        let mut base_n_number = false;
        let mut in_continued_string = false;
        let mut sc = StyleContext::with_state(start, end - start, init, &mut styler);

        while sc.more() {
            if sc.at_line_end() {
                self.process_line_end(&mut sc, &mut in_continued_string);
                if !sc.more() {
                    break;
                }
            }

            let mut need_eol_check = false;
            match sc.state() {
                PythonStyle::OPERATOR => {
                    kw_last = KeywordKind::Other;
                    sc.set_state(PythonStyle::DEFAULT);
                }
                PythonStyle::NUMBER => {
                    let exponent_sign =
                        !base_n_number && matches!(sc.ch(), '+' | '-') && matches!(sc.ch_prev(), 'e' | 'E');
                    if !is_word_char(sc.ch(), false) && !exponent_sign {
                        sc.set_state(PythonStyle::DEFAULT);
                    }
                }
                PythonStyle::IDENTIFIER => {
                    if sc.ch() == '.' || !is_word_char(sc.ch(), unicode) {
                        let identifier = sc.get_current();
                        let classified = self.classify_identifier(&mut sc, &identifier, kw_last);
                        match classified {
                            Ok(style) => {
                                sc.change_state(style);
                                sc.set_state(PythonStyle::DEFAULT);
                            }
                            Err(sub_style) => sc.set_state_with_style(sub_style, PythonStyle::DEFAULT),
                        }
                        if classified == Ok(PythonStyle::WORD) {
                            kw_last = match identifier.as_str() {
                                "class" => KeywordKind::Class,
                                "def" => KeywordKind::Def,
                                "import" | "cimport" => KeywordKind::Import,
                                "cdef" => KeywordKind::CDef,
                                "cpdef" => KeywordKind::CPDef,
                                _ if kw_last.is_cdef() => kw_last,
                                _ => KeywordKind::Other,
                            };
                        } else if !kw_last.is_cdef() {
                            kw_last = KeywordKind::Other;
                        }
                    }
                }
                PythonStyle::COMMENTLINE | PythonStyle::COMMENTBLOCK => {
                    if sc.ch() == '\r' || sc.ch() == '\n' {
                        sc.set_state(PythonStyle::DEFAULT);
                    }
                }
                PythonStyle::DECORATOR => {
                    if !is_word_start(sc.ch(), unicode) {
                        sc.set_state(PythonStyle::DEFAULT);
                    }
                }
                state if is_single_quote_string_state(state) => {
                    if sc.ch() == '\\' {
                        if sc.ch_next() == '\r' && sc.get_relative(2) == '\n' {
                            sc.forward();
                        }
                        if sc.ch_next() == '\n' || sc.ch_next() == '\r' {
                            in_continued_string = true;
                        } else {
                            // Stay before the line end.
                            sc.forward();
                        }
                    } else if sc.ch() == string_quote_char(state) {
                        sc.forward_set_state(PythonStyle::DEFAULT);
                        need_eol_check = true;
                    }
                }
                state if is_triple_quote_string_state(state) => {
                    let delimiter = if string_quote_char(state) == '"' { "\"\"\"" } else { "'''" };
                    if sc.ch() == '\\' {
                        sc.forward();
                    } else if sc.matches(delimiter) {
                        sc.forward_n(2);
                        sc.forward_set_state(PythonStyle::DEFAULT);
                        need_eol_check = true;
                    }
                }
                _ => {}
            }

            // Doubled braces in f-strings are literal text.
            if is_f_string_state(sc.state()) && sc.ch() == '{' && sc.ch_next() == '{' {
                sc.forward();
                need_eol_check = true;
            }

            // Keyword context never crosses a line end.
            if sc.at_line_end() {
                kw_last = KeywordKind::Other;
            }

            // Leaving a state may have moved onto the line end.
            if need_eol_check && sc.at_line_end() {
                self.process_line_end(&mut sc, &mut in_continued_string);
                if !sc.more() {
                    break;
                }
            }

            if sc.state() == PythonStyle::DEFAULT {
                let ch = sc.ch();
                let ch_next = sc.ch_next();
                if is_a_digit(ch) || (ch == '.' && is_a_digit(ch_next)) {
                    if ch == '0' && matches!(ch_next, 'x' | 'X') {
                        base_n_number = true;
                        sc.set_state(PythonStyle::NUMBER);
                    } else if ch == '0' && matches!(ch_next, 'o' | 'O' | 'b' | 'B') {
                        if self.options.base2or8_literals {
                            base_n_number = true;
                            sc.set_state(PythonStyle::NUMBER);
                        } else {
                            sc.set_state(PythonStyle::NUMBER);
                            sc.forward_set_state(PythonStyle::IDENTIFIER);
                        }
                    } else {
                        base_n_number = false;
                        sc.set_state(PythonStyle::NUMBER);
                    }
                } else if is_operator(ch) || ch == '`' {
                    sc.set_state(PythonStyle::OPERATOR);
                } else if ch == '#' {
                    sc.set_state(if ch_next == '#' {
                        PythonStyle::COMMENTBLOCK
                    } else {
                        PythonStyle::COMMENTLINE
                    });
                } else if ch == '@' {
                    let pos = sc.current_pos();
                    if is_first_non_whitespace(sc.styler(), pos) {
                        sc.set_state(PythonStyle::DECORATOR);
                    } else {
                        sc.set_state(PythonStyle::OPERATOR);
                    }
                } else if is_string_start(ch, ch_next, sc.get_relative(2), allowed) {
                    let pos = sc.current_pos();
                    let (state, next_index) = string_state(sc.styler(), pos, allowed);
                    sc.set_state(state);
                    while next_index > sc.current_pos() + 1 && sc.more() {
                        sc.forward();
                    }
                } else if is_word_start(ch, unicode) {
                    sc.set_state(PythonStyle::IDENTIFIER);
                }
            }
            sc.forward();
        }
        sc.complete();
    }

    /// Folds by indentation. Blank and comment lines take the level of the surrounding block;
    /// with `fold.quotes.python` a triple quoted string spanning lines folds as a block.
    fn fold(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document) {
        if !self.options.fold {
            return;
        }
        trace!(lexer = "python", start, length, init_style, "fold");
        let mut styler = LexAccessor::new(doc);
        let fold_quotes = self.options.fold_quotes;
        let fold_compact = self.options.fold_compact;

        let max_pos = start + length;
        let doc_len = styler.length();
        let max_line = if max_pos == doc_len {
            styler.get_line(max_pos)
        } else {
            styler.get_line(max_pos.saturating_sub(1))
        };
        let doc_lines = styler.get_line(doc_len);

        // Back up to a line with code so blank lines get a level and the previous header can be
        // fixed.
        let mut line = styler.get_line(start);
        let mut indent_current = styler.indent_amount(line, None).0;
        while line > 0 {
            line -= 1;
            indent_current = styler.indent_amount(line, None).0;
            if indent_current & FOLD_LEVEL_WHITE_FLAG == 0
                && !is_comment_line(&mut styler, line)
                && !is_quote_line(&styler, line)
            {
                break;
            }
        }
        let mut indent_current_level = indent_current & FOLD_LEVEL_NUMBER_MASK;

        let line_start = styler.line_start(line);
        let prev_state = if line >= 1 {
            PythonStyle::from_style(styler.style_at(line_start - 1))
        } else {
            PythonStyle::DEFAULT
        };
        let mut prev_quote = fold_quotes && is_triple_quote_string_state(prev_state);

        // Continue past the range while inside a triple quoted string.
        while line <= doc_lines && (line <= max_line || prev_quote) {
            let mut lev = indent_current;
            let mut line_next = line + 1;
            let mut indent_next = indent_current;
            let mut quote = false;
            if line_next <= doc_lines {
                indent_next = styler.indent_amount(line_next, None).0;
                let next_start = styler.line_start(line_next);
                let look_at = if next_start == doc_len {
                    doc_len.saturating_sub(1)
                } else {
                    next_start
                };
                quote = fold_quotes && is_triple_quote_string_state(PythonStyle::from_style(styler.style_at(look_at)));
            }
            let quote_start = quote && !prev_quote;
            let quote_continue = quote && prev_quote;
            if !quote || !prev_quote {
                indent_current_level = indent_current & FOLD_LEVEL_NUMBER_MASK;
            }
            if quote {
                indent_next = indent_current_level;
            }
            if indent_next & FOLD_LEVEL_WHITE_FLAG != 0 {
                indent_next = FOLD_LEVEL_WHITE_FLAG | indent_current_level;
            }

            if quote_start {
                lev |= FOLD_LEVEL_HEADER_FLAG;
            } else if quote_continue || prev_quote {
                lev += 1;
            }

            // Blank and comment lines do not decide the next level. When comments end the
            // document the lowest comment indent is used.
            let mut min_comment_level = indent_current_level;
            while !quote
                && line_next < doc_lines
                && (indent_next & FOLD_LEVEL_WHITE_FLAG != 0 || is_comment_line(&mut styler, line_next))
            {
                if is_comment_line(&mut styler, line_next) && indent_next < min_comment_level {
                    min_comment_level = indent_next;
                }
                line_next += 1;
                indent_next = styler.indent_amount(line_next, None).0;
            }

            let level_after_comments = if line_next < doc_lines {
                indent_next & FOLD_LEVEL_NUMBER_MASK
            } else {
                min_comment_level
            };
            let level_before_comments = indent_current_level.max(level_after_comments);

            // Skipped lines, last to first: those indented deeper than what follows belong to the
            // block before.
            let mut skip_level = level_after_comments;
            for skip_line in (line + 1..line_next).rev() {
                let skip_indent = styler.indent_amount(skip_line, None).0;
                if fold_compact {
                    if skip_indent & FOLD_LEVEL_NUMBER_MASK > level_after_comments {
                        skip_level = level_before_comments;
                    }
                    styler.set_level(skip_line, skip_level | (skip_indent & FOLD_LEVEL_WHITE_FLAG));
                } else {
                    if skip_indent & FOLD_LEVEL_NUMBER_MASK > level_after_comments
                        && skip_indent & FOLD_LEVEL_WHITE_FLAG == 0
                        && !is_comment_line(&mut styler, skip_line)
                    {
                        skip_level = level_before_comments;
                    }
                    styler.set_level(skip_line, skip_level);
                }
            }

            if !quote
                && indent_current & FOLD_LEVEL_WHITE_FLAG == 0
                && (indent_current & FOLD_LEVEL_NUMBER_MASK) < (indent_next & FOLD_LEVEL_NUMBER_MASK)
            {
                lev |= FOLD_LEVEL_HEADER_FLAG;
            }

            prev_quote = quote;
            styler.set_level(line, if fold_compact { lev } else { lev & !FOLD_LEVEL_WHITE_FLAG });
            indent_current = indent_next;
            line = line_next;
        }
    }

    fn named_styles(&self) -> usize {
        let allocated = self.sub_styles.last_allocated().map_or(0, |last| usize::from(last) + 1);
        PythonStyle::ALL.len().max(allocated)
    }

    fn name_of_style(&self, style: u8) -> &'static str {
        PythonStyle::name_of_style(style)
    }

    fn sub_styles(&self) -> Option<&SubStyles> {
        Some(&self.sub_styles)
    }

    fn sub_styles_mut(&mut self) -> Option<&mut SubStyles> {
        Some(&mut self.sub_styles)
    }
}

/// Python.
pub static LEXER_PYTHON: LexerModule =
    LexerModule::with_factory::<PythonStyle>(2, "python", LexerPython::create, WORD_LIST_DESCRIPTIONS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_prefixes() {
        let all = Literals {
            u: true,
            b: true,
            f: true,
        };
        assert!(is_string_start('"', 'x', 'x', all));
        assert!(is_string_start('u', 'r', '\'', all));
        assert!(is_string_start('r', 'b', '"', all));
        assert!(!is_string_start('r', 'u', '"', all));
        assert!(is_string_start('f', '"', ' ', all));
        assert!(!is_string_start('f', '"', ' ', Literals::default()));
    }
}
