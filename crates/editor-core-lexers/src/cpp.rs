//! The `cpp` lexer, for C, C++ and the curly-brace languages that share their lexical shape
//! (C#, Java, JavaScript, IDL, Pike, Vala, Go).
//!
//! Preprocessor conditionals are styled but not evaluated, so every branch of an `#if` is lexed
//! as active code.

use editor_core_lexlib::character_set::{is_a_digit, is_a_space, is_lower_case, is_operator};
use editor_core_lexlib::{
    CharacterSet, Document, FOLD_LEVEL_BASE, FOLD_LEVEL_HEADER_FLAG, FOLD_LEVEL_WHITE_FLAG, LexAccessor, LexState,
    Lexer, LexerModule, OptionSet, PropertyType, SetBase, SparseState, StyleContext, SubStyles, WordList,
    lexer_styles,
};
use tracing::{debug, trace};

lexer_styles! {
    /// Styles of the `cpp` lexer.
    pub enum CppStyle {
        DEFAULT = 0,
        /// `/* */`.
        COMMENT = 1,
        /// `//`.
        COMMENTLINE = 2,
        /// `/** */` and `/*! */`.
        COMMENTDOC = 3,
        NUMBER = 4,
        WORD = 5,
        STRING = 6,
        CHARACTER = 7,
        /// IDL `uuid(...)` arguments.
        UUID = 8,
        PREPROCESSOR = 9,
        OPERATOR = 10,
        IDENTIFIER = 11,
        STRINGEOL = 12,
        /// C# `@"..."`.
        VERBATIM = 13,
        /// JavaScript regular expression literal.
        REGEX = 14,
        /// `///` and `//!`.
        COMMENTLINEDOC = 15,
        WORD2 = 16,
        COMMENTDOCKEYWORD = 17,
        COMMENTDOCKEYWORDERROR = 18,
        GLOBALCLASS = 19,
        /// `R"delim( ... )delim"` and back-quoted strings.
        STRINGRAW = 20,
        /// Vala `"""..."""`.
        TRIPLEVERBATIM = 21,
        /// Pike `#"..."`.
        HASHQUOTEDSTRING = 22,
        PREPROCESSORCOMMENT = 23,
        PREPROCESSORCOMMENTDOC = 24,
        USERLITERAL = 25,
        TASKMARKER = 26,
        ESCAPESEQUENCE = 27,
    }
}

const WORD_LIST_DESCRIPTIONS: &[&str] = &[
    "Primary keywords and identifiers",
    "Secondary keywords and identifiers",
    "Documentation comment keywords",
    "Global classes and typedefs",
    "Preprocessor definitions",
    "Task marker and error marker keywords",
];

#[derive(Debug, Clone)]
struct OptionsCpp {
    styling_within_preprocessor: bool,
    identifiers_allow_dollars: bool,
    verbatim_strings_allow_escapes: bool,
    triple_quoted_strings: bool,
    hash_quoted_strings: bool,
    back_quoted_strings: i32,
    escape_sequence: bool,
    fold: bool,
    fold_syntax_based: bool,
    fold_comment: bool,
    fold_comment_multiline: bool,
    fold_comment_explicit: bool,
    fold_explicit_start: String,
    fold_explicit_end: String,
    fold_explicit_anywhere: bool,
    fold_preprocessor: bool,
    fold_preprocessor_at_else: bool,
    fold_compact: bool,
    fold_at_else: bool,
}

impl Default for OptionsCpp {
    fn default() -> Self {
        Self {
            styling_within_preprocessor: false,
            identifiers_allow_dollars: true,
            verbatim_strings_allow_escapes: false,
            triple_quoted_strings: false,
            hash_quoted_strings: false,
            back_quoted_strings: 0,
            escape_sequence: false,
            fold: false,
            fold_syntax_based: true,
            fold_comment: false,
            fold_comment_multiline: true,
            fold_comment_explicit: true,
            fold_explicit_start: String::new(),
            fold_explicit_end: String::new(),
            fold_explicit_anywhere: false,
            fold_preprocessor: false,
            fold_preprocessor_at_else: false,
            fold_compact: false,
            fold_at_else: false,
        }
    }
}

fn option_set() -> OptionSet<OptionsCpp> {
    let mut set = OptionSet::new();
    set.define_bool(
        "styling.within.preprocessor",
        |o: &mut OptionsCpp| &mut o.styling_within_preprocessor,
        "Determines whether all preprocessor code is styled in the preprocessor style (0, the default) \
         or only from the initial # to the end of the command word (1).",
    );
    set.define_bool(
        "lexer.cpp.allow.dollars",
        |o| &mut o.identifiers_allow_dollars,
        "Set to 0 to disallow the '$' character in identifiers.",
    );
    set.define_bool(
        "lexer.cpp.verbatim.strings.allow.escapes",
        |o| &mut o.verbatim_strings_allow_escapes,
        "Set to 1 to allow verbatim strings to contain escape sequences.",
    );
    set.define_bool(
        "lexer.cpp.triplequoted.strings",
        |o| &mut o.triple_quoted_strings,
        "Set to 1 to enable highlighting of triple-quoted strings.",
    );
    set.define_bool(
        "lexer.cpp.hashquoted.strings",
        |o| &mut o.hash_quoted_strings,
        "Set to 1 to enable highlighting of hash-quoted strings.",
    );
    set.define_int(
        "lexer.cpp.backquoted.strings",
        |o| &mut o.back_quoted_strings,
        "Set to 1 to highlight back-quoted strings as raw strings.",
    );
    set.define_bool(
        "lexer.cpp.escape.sequence",
        |o| &mut o.escape_sequence,
        "Set to 1 to enable highlighting of escape sequences in strings.",
    );
    set.define_bool("fold", |o| &mut o.fold, "Enable folding.");
    set.define_bool(
        "fold.cpp.syntax.based",
        |o| &mut o.fold_syntax_based,
        "Set this property to 0 to disable syntax based folding.",
    );
    set.define_bool(
        "fold.comment",
        |o| &mut o.fold_comment,
        "Fold multi-line comments and explicit fold points. Explicit fold points are a //{ comment at \
         the start and a //} at the end of a section that should fold.",
    );
    set.define_bool(
        "fold.cpp.comment.multiline",
        |o| &mut o.fold_comment_multiline,
        "Set this property to 0 to disable folding multi-line comments when fold.comment=1.",
    );
    set.define_bool(
        "fold.cpp.comment.explicit",
        |o| &mut o.fold_comment_explicit,
        "Set this property to 0 to disable folding explicit fold points when fold.comment=1.",
    );
    set.define_string(
        "fold.cpp.explicit.start",
        |o| &mut o.fold_explicit_start,
        "The string to use for explicit fold start points, replacing the standard //{.",
    );
    set.define_string(
        "fold.cpp.explicit.end",
        |o| &mut o.fold_explicit_end,
        "The string to use for explicit fold end points, replacing the standard //}.",
    );
    set.define_bool(
        "fold.cpp.explicit.anywhere",
        |o| &mut o.fold_explicit_anywhere,
        "Set this property to 1 to enable explicit fold points anywhere, not just in line comments.",
    );
    set.define_bool(
        "fold.cpp.preprocessor.at.else",
        |o| &mut o.fold_preprocessor_at_else,
        "Fold on a preprocessor #else or #elif line of an #if statement.",
    );
    set.define_bool(
        "fold.preprocessor",
        |o| &mut o.fold_preprocessor,
        "Fold preprocessor directives, including C#'s #region and #endregion.",
    );
    set.define_bool(
        "fold.compact",
        |o| &mut o.fold_compact,
        "Include trailing blank lines in the preceding fold.",
    );
    set.define_bool(
        "fold.at.else",
        |o| &mut o.fold_at_else,
        "Fold on a \"} else {\" line of an if statement.",
    );
    set.define_word_list_sets(WORD_LIST_DESCRIPTIONS);
    set
}

/// Styles that do not change what a following `/` means.
fn is_space_equiv(state: CppStyle) -> bool {
    matches!(
        state,
        CppStyle::DEFAULT
            | CppStyle::COMMENT
            | CppStyle::COMMENTLINE
            | CppStyle::COMMENTDOC
            | CppStyle::COMMENTLINEDOC
            | CppStyle::COMMENTDOCKEYWORD
            | CppStyle::COMMENTDOCKEYWORDERROR
    )
}

fn is_stream_comment_style(style: CppStyle) -> bool {
    matches!(
        style,
        CppStyle::COMMENT | CppStyle::COMMENTDOC | CppStyle::COMMENTDOCKEYWORD | CppStyle::COMMENTDOCKEYWORDERROR
    )
}

fn is_operator_or_space(ch: char) -> bool {
    is_operator(ch) || is_a_space(ch)
}

/// Whether the `+` or `-` before `pos` is part of `++` or `--`. Wrong for `a = b+++/re/`.
fn follows_postfix_operator(styler: &mut LexAccessor<'_>, pos: usize) -> bool {
    let mut pos = pos;
    while pos > 1 {
        pos -= 1;
        let ch = styler.safe_byte_at(pos, b' ');
        if ch == b'+' || ch == b'-' {
            return styler.safe_byte_at(pos - 1, b' ') == ch;
        }
    }
    false
}

/// Whether `return` ends just before `pos` on the same line, ignoring blanks.
fn follows_return_keyword(styler: &mut LexAccessor<'_>, pos: usize) -> bool {
    let line_start = styler.line_start(styler.get_line(pos));
    let mut pos = pos;
    while pos > line_start {
        pos -= 1;
        if pos == line_start || !matches!(styler.safe_byte_at(pos, b' '), b' ' | b'\t') {
            break;
        }
    }
    let keyword = "return";
    pos + 1 >= line_start + keyword.len() && styler.matches(pos + 1 - keyword.len(), keyword)
}

/// Whether a `/` at `pos` starts a regular expression rather than dividing, given the last
/// significant character before it.
fn regex_may_start(
    styler: &mut LexAccessor<'_>,
    pos: usize,
    ch_prev_non_white: char,
    ok_before_re: &CharacterSet,
    could_be_post_op: &CharacterSet,
) -> bool {
    (ok_before_re.contains(ch_prev_non_white) || follows_return_keyword(styler, pos))
        && (!could_be_post_op.contains(ch_prev_non_white) || !follows_postfix_operator(styler, pos))
}

/// Start a task marker run when a word from `markers` begins at the cursor.
fn highlight_task_marker(sc: &mut StyleContext<'_, '_, CppStyle>, markers: &WordList) {
    if markers.is_empty() || !is_operator_or_space(sc.ch_prev()) || is_operator_or_space(sc.ch()) {
        return;
    }
    let mut marker = String::new();
    let mut pos = sc.current_pos();
    loop {
        let ch = char::from(sc.styler().safe_byte_at(pos, b' '));
        if is_operator_or_space(ch) {
            break;
        }
        marker.push(ch);
        pos += 1;
    }
    if markers.in_list(&marker) {
        sc.set_state(CppStyle::TASKMARKER);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapeDigits {
    None,
    Hex,
    Octal,
}

impl EscapeDigits {
    fn contains(self, ch: char) -> bool {
        match self {
            EscapeDigits::None => false,
            EscapeDigits::Hex => ch.is_ascii_hexdigit(),
            EscapeDigits::Octal => ('0'..='7').contains(&ch),
        }
    }
}

/// The escape sequence being styled inside a string.
#[derive(Debug, Clone, Copy)]
struct EscapeSequence {
    digits_left: i32,
    digits: EscapeDigits,
    outer_state: CppStyle,
}

impl Default for EscapeSequence {
    fn default() -> Self {
        Self {
            digits_left: 0,
            digits: EscapeDigits::None,
            outer_state: CppStyle::DEFAULT,
        }
    }
}

impl EscapeSequence {
    /// Start a sequence whose first character after the backslash is `next`.
    fn reset(&mut self, state: CppStyle, next: char) {
        self.outer_state = state;
        (self.digits_left, self.digits) = match next {
            'U' => (9, EscapeDigits::Hex),
            'u' | 'x' => (5, EscapeDigits::Hex),
            '0'..='7' => (3, EscapeDigits::Octal),
            _ => (0, EscapeDigits::None),
        };
    }

    fn at_end(&self, ch: char) -> bool {
        self.digits_left <= 0 || !self.digits.contains(ch)
    }

    fn consume_digit(&mut self) {
        self.digits_left -= 1;
    }
}

/// Characters that cannot follow `R"` when the string is raw.
fn is_invalid_raw_first(ch: char) -> bool {
    matches!(ch, ' ' | ')' | '\\' | '\t' | '\u{0b}' | '\u{0c}' | '\n')
}

/// Close the current run with `sub_style` when there is one, otherwise in its state.
fn close_run(sc: &mut StyleContext<'_, '_, CppStyle>, sub_style: Option<u8>, next: CppStyle) {
    match sub_style {
        Some(style) => sc.set_state_with_style(style, next),
        None => sc.set_state(next),
    }
}

/// Lexer for C, C++ and related languages.
pub struct LexerCpp {
    options: OptionsCpp,
    option_set: OptionSet<OptionsCpp>,
    set_word: CharacterSet,
    keywords: WordList,
    keywords2: WordList,
    keywords3: WordList,
    keywords4: WordList,
    pp_definitions: WordList,
    markers: WordList,
    raw_string_terminators: SparseState<String>,
    sub_styles: SubStyles,
}

impl Default for LexerCpp {
    fn default() -> Self {
        Self::new()
    }
}

impl LexerCpp {
    /// An instance with default options and no keywords.
    pub fn new() -> Self {
        let options = OptionsCpp::default();
        Self {
            set_word: word_set(options.identifiers_allow_dollars),
            options,
            option_set: option_set(),
            keywords: WordList::new(),
            keywords2: WordList::new(),
            keywords3: WordList::new(),
            keywords4: WordList::new(),
            pp_definitions: WordList::new(),
            markers: WordList::new(),
            raw_string_terminators: SparseState::default(),
            sub_styles: SubStyles::new(&[CppStyle::IDENTIFIER.style(), CppStyle::COMMENTDOCKEYWORD.style()]),
        }
    }

    fn create() -> Box<dyn Lexer> {
        Box::new(Self::new())
    }

    /// Keyword style of `word`, or the identifier sub-style it belongs to.
    fn classify_identifier(&self, word: &str) -> Result<CppStyle, Option<u8>> {
        if self.keywords.in_list(word) {
            Ok(CppStyle::WORD)
        } else if self.keywords2.in_list(word) {
            Ok(CppStyle::WORD2)
        } else if self.keywords4.in_list(word) {
            Ok(CppStyle::GLOBALCLASS)
        } else {
            Err(self
                .sub_styles
                .classifier(CppStyle::IDENTIFIER.style())
                .and_then(|classifier| classifier.value_for(word)))
        }
    }

    /// Style for a finished doc comment keyword: `None` when it is a known keyword, otherwise a
    /// sub-style or the error style.
    /// `keyword` includes its leading `@`, backslash or tag character; with `check_suffix` the list is
    /// also searched without it.
    fn doc_keyword_style(&self, keyword: &str, check_suffix: bool) -> Option<Result<CppStyle, u8>> {
        let suffix: String = keyword.chars().skip(1).collect();
        if self.keywords3.in_list(keyword) || (check_suffix && self.keywords3.in_list(&suffix)) {
            return None;
        }
        let sub_style = self
            .sub_styles
            .classifier(CppStyle::COMMENTDOCKEYWORD.style())
            .and_then(|classifier| classifier.value_for(&suffix));
        Some(match sub_style {
            Some(style) => Err(style),
            None => Ok(CppStyle::COMMENTDOCKEYWORDERROR),
        })
    }
}

fn word_set(allow_dollars: bool) -> CharacterSet {
    let extra = if allow_dollars { "._$" } else { "._" };
    CharacterSet::new(SetBase::AlphaNum, extra).with_value_after(true)
}

impl Lexer for LexerCpp {
    fn name(&self) -> &'static str {
        "cpp"
    }

    fn id(&self) -> i32 {
        3
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
            if key == "lexer.cpp.allow.dollars" {
                self.set_word = word_set(self.options.identifiers_allow_dollars);
            }
            debug!(lexer = "cpp", key, val, "property changed");
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
            2 => &mut self.keywords3,
            3 => &mut self.keywords4,
            4 => &mut self.pp_definitions,
            5 => &mut self.markers,
            _ => return None,
        };
        if list.set(words, false) {
            debug!(lexer = "cpp", index, words = list.len(), "word list changed");
            Some(0)
        } else {
            None
        }
    }

    fn lex(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document) {
        trace!(lexer = "cpp", start, length, init_style, "lex");
        let mut styler = LexAccessor::new(doc);

        let ok_before_re = CharacterSet::new(SetBase::None, "([{=,:;!%^&*|?~+-");
        let could_be_post_op = CharacterSet::new(SetBase::None, "+-");
        let doxygen = CharacterSet::new(SetBase::Alpha, "$@\\&<>#{}[]");
        let mut word_start = CharacterSet::new(SetBase::Alpha, "_").with_value_after(true);
        if self.options.identifiers_allow_dollars {
            word_start.add(b'$');
        }

        let mut ch_prev_non_white = ' ';
        let mut visible_chars = 0usize;
        let mut last_word_was_uuid = false;
        let mut style_before_dc_keyword = CppStyle::DEFAULT;
        let mut style_before_task_marker = CppStyle::DEFAULT;
        let mut continuation_line = false;
        let mut is_include_preprocessor = false;
        let mut is_string_in_preprocessor = false;
        let mut in_re_range = false;
        let mut seen_doc_key_brace = false;
        let mut escape = EscapeSequence::default();

        let line_first = styler.get_line(start);
        let init = CppStyle::from_style(init_style);
        if matches!(
            init,
            CppStyle::PREPROCESSOR | CppStyle::COMMENTLINE | CppStyle::COMMENTLINEDOC
        ) && line_first > 0
        {
            let end_previous = styler.line_end(line_first - 1);
            if end_previous > 0 {
                continuation_line = styler.safe_byte_at(end_previous - 1, b' ') == b'\\';
            }
        }

        // The last significant character before the range decides whether a `/` starts a regex.
        // Blanks, comments and line continuations are passed over as the main loop does.
        let mut back = start;
        while back > 0 {
            back -= 1;
            let ch = styler.safe_byte_at(back, b' ');
            let style = CppStyle::from_style(styler.style_at(back));
            let continuation = ch == b'\\' && back + 1 >= styler.line_end(styler.get_line(back));
            if is_a_space(char::from(ch)) || continuation || is_space_equiv(style) {
                continue;
            }
            if style == CppStyle::OPERATOR {
                ch_prev_non_white = char::from(ch);
            }
            break;
        }

        let mut raw_terminator = line_first
            .checked_sub(1)
            .map(|line| self.raw_string_terminators.value_at(line))
            .unwrap_or_default();
        let mut raw_terminators_new = SparseState::new(line_first);

        let mut sc = StyleContext::with_state(start, length, init, &mut styler);

        while sc.more() {
            if sc.at_line_start() {
                // Keep a string continued from the previous line out of that line's STRINGEOL.
                if matches!(sc.state(), CppStyle::STRING | CppStyle::CHARACTER) {
                    sc.set_state(sc.state());
                }
                if sc.state() == CppStyle::PREPROCESSOR && !continuation_line {
                    sc.set_state(CppStyle::DEFAULT);
                }
                visible_chars = 0;
                last_word_was_uuid = false;
                is_include_preprocessor = false;
                in_re_range = false;
            }

            if sc.at_line_end() {
                raw_terminators_new.set(sc.current_line(), raw_terminator.clone());
            }

            // Line continuation in any state.
            if sc.ch() == '\\' {
                let line = sc.current_line();
                if sc.current_pos() + 1 >= sc.styler().line_end(line) {
                    raw_terminators_new.set(line, raw_terminator.clone());
                    sc.forward();
                    if sc.ch() == '\r' && sc.ch_next() == '\n' {
                        sc.forward();
                    }
                    continuation_line = true;
                    sc.forward();
                    continue;
                }
            }

            // Determine if the current state should terminate.
            match sc.state() {
                CppStyle::OPERATOR => sc.set_state(CppStyle::DEFAULT),
                CppStyle::NUMBER => {
                    // Hex digits and suffixes make almost anything acceptable.
                    let ch = sc.ch();
                    if ch == '_' {
                        sc.change_state(CppStyle::USERLITERAL);
                    } else if !(self.set_word.contains(ch)
                        || ch == '\''
                        || (matches!(ch, '+' | '-') && matches!(sc.ch_prev(), 'e' | 'E' | 'p' | 'P')))
                    {
                        sc.set_state(CppStyle::DEFAULT);
                    }
                }
                CppStyle::USERLITERAL => {
                    if !self.set_word.contains(sc.ch()) {
                        sc.set_state(CppStyle::DEFAULT);
                    }
                }
                CppStyle::IDENTIFIER => {
                    if sc.at_line_start() || sc.at_line_end() || !self.set_word.contains(sc.ch()) || sc.ch() == '.' {
                        let current = sc.get_current();
                        let sub_style = match self.classify_identifier(&current) {
                            Ok(style) => {
                                if style == CppStyle::WORD {
                                    last_word_was_uuid = current == "uuid";
                                }
                                sc.change_state(style);
                                None
                            }
                            Err(sub_style) => sub_style,
                        };
                        let literal_string = sc.ch() == '"';
                        if literal_string || sc.ch() == '\'' {
                            let raw = literal_string && sc.ch_prev() == 'R' && !is_invalid_raw_first(sc.ch_next());
                            let prefix = if raw { &current[..current.len() - 1] } else { current.as_str() };
                            let valid = matches!(prefix, "" | "L" | "u" | "U") || (literal_string && prefix == "u8");
                            if !valid {
                                close_run(&mut sc, sub_style, CppStyle::DEFAULT);
                            } else if raw {
                                // Styling the prefix as raw lets the string start below see it.
                                sc.change_state(CppStyle::STRINGRAW);
                                sc.set_state(CppStyle::DEFAULT);
                            } else if literal_string {
                                sc.change_state(CppStyle::STRING);
                            } else {
                                sc.change_state(CppStyle::CHARACTER);
                            }
                        } else {
                            close_run(&mut sc, sub_style, CppStyle::DEFAULT);
                        }
                    }
                }
                CppStyle::PREPROCESSOR => {
                    if self.options.styling_within_preprocessor {
                        if is_a_space(sc.ch()) || sc.ch() == '(' {
                            sc.set_state(CppStyle::DEFAULT);
                        }
                    } else if is_string_in_preprocessor && (sc.match_char('>') || sc.match_char('"') || sc.at_line_end())
                    {
                        is_string_in_preprocessor = false;
                    } else if !is_string_in_preprocessor {
                        if (is_include_preprocessor && sc.match_char('<')) || sc.match_char('"') {
                            is_string_in_preprocessor = true;
                        } else if sc.match_pair('/', '*') {
                            if sc.matches("/**") || sc.matches("/*!") {
                                sc.set_state(CppStyle::PREPROCESSORCOMMENTDOC);
                            } else {
                                sc.set_state(CppStyle::PREPROCESSORCOMMENT);
                            }
                            sc.forward();
                        } else if sc.match_pair('/', '/') {
                            sc.set_state(CppStyle::DEFAULT);
                        }
                    }
                }
                CppStyle::PREPROCESSORCOMMENT | CppStyle::PREPROCESSORCOMMENTDOC => {
                    if sc.match_pair('*', '/') {
                        sc.forward();
                        sc.forward_set_state(CppStyle::PREPROCESSOR);
                        // Re-examine the next character, it may be a continuation.
                        continue;
                    }
                }
                CppStyle::COMMENT => {
                    if sc.match_pair('*', '/') {
                        sc.forward();
                        sc.forward_set_state(CppStyle::DEFAULT);
                    } else {
                        style_before_task_marker = CppStyle::COMMENT;
                        highlight_task_marker(&mut sc, &self.markers);
                    }
                }
                CppStyle::COMMENTDOC => {
                    if sc.match_pair('*', '/') {
                        sc.forward();
                        sc.forward_set_state(CppStyle::DEFAULT);
                    } else if sc.ch() == '@' || sc.ch() == '\\' {
                        // JavaDoc and Doxygen.
                        if (is_a_space(sc.ch_prev()) || sc.ch_prev() == '*') && !is_a_space(sc.ch_next()) {
                            style_before_dc_keyword = CppStyle::COMMENTDOC;
                            sc.set_state(CppStyle::COMMENTDOCKEYWORD);
                        }
                    } else if (sc.ch() == '<' && sc.ch_next() != '/') || (sc.ch() == '/' && sc.ch_prev() == '<') {
                        // XML documentation tags.
                        style_before_dc_keyword = CppStyle::COMMENTDOC;
                        sc.forward_set_state(CppStyle::COMMENTDOCKEYWORD);
                    }
                }
                CppStyle::COMMENTLINE => {
                    if sc.at_line_start() && !continuation_line {
                        sc.set_state(CppStyle::DEFAULT);
                    } else {
                        style_before_task_marker = CppStyle::COMMENTLINE;
                        highlight_task_marker(&mut sc, &self.markers);
                    }
                }
                CppStyle::COMMENTLINEDOC => {
                    if sc.at_line_start() && !continuation_line {
                        sc.set_state(CppStyle::DEFAULT);
                    } else if sc.ch() == '@' || sc.ch() == '\\' {
                        if (is_a_space(sc.ch_prev()) || sc.ch_prev() == '/' || sc.ch_prev() == '!')
                            && !is_a_space(sc.ch_next())
                        {
                            style_before_dc_keyword = CppStyle::COMMENTLINEDOC;
                            sc.set_state(CppStyle::COMMENTDOCKEYWORD);
                        }
                    } else if (sc.ch() == '<' && sc.ch_next() != '/') || (sc.ch() == '/' && sc.ch_prev() == '<') {
                        style_before_dc_keyword = CppStyle::COMMENTLINEDOC;
                        sc.forward_set_state(CppStyle::COMMENTDOCKEYWORD);
                    }
                }
                CppStyle::COMMENTDOCKEYWORD => {
                    let ch = sc.ch();
                    if style_before_dc_keyword == CppStyle::COMMENTDOC && sc.match_pair('*', '/') {
                        sc.change_state(CppStyle::COMMENTDOCKEYWORDERROR);
                        sc.forward();
                        sc.forward_set_state(CppStyle::DEFAULT);
                        seen_doc_key_brace = false;
                    } else if ch == '[' || ch == '{' {
                        seen_doc_key_brace = true;
                    } else if !doxygen.contains(ch) && !(seen_doc_key_brace && (ch == ',' || ch == '.')) {
                        let mut sub_style = None;
                        if !(is_a_space(ch) || ch == '\0') {
                            sc.change_state(CppStyle::COMMENTDOCKEYWORDERROR);
                        } else {
                            let current = sc.get_current();
                            match self.doc_keyword_style(&current, true) {
                                Some(Ok(style)) => sc.change_state(style),
                                Some(Err(style)) => sub_style = Some(style),
                                None => {}
                            }
                        }
                        close_run(&mut sc, sub_style, style_before_dc_keyword);
                        seen_doc_key_brace = false;
                    } else if ch == '>' {
                        let current = sc.get_current();
                        let mut sub_style = None;
                        match self.doc_keyword_style(&current, false) {
                            Some(Ok(style)) => sc.change_state(style),
                            Some(Err(style)) => sub_style = Some(style),
                            None => {}
                        }
                        close_run(&mut sc, sub_style, style_before_dc_keyword);
                        seen_doc_key_brace = false;
                    }
                }
                CppStyle::STRING => {
                    if sc.at_line_end() {
                        sc.change_state(CppStyle::STRINGEOL);
                    } else if is_include_preprocessor {
                        if sc.ch() == '>' {
                            sc.forward_set_state(CppStyle::DEFAULT);
                            is_include_preprocessor = false;
                        }
                    } else if sc.ch() == '\\' {
                        if self.options.escape_sequence {
                            escape.reset(CppStyle::STRING, sc.ch_next());
                            sc.set_state(CppStyle::ESCAPESEQUENCE);
                        }
                        // Whatever follows the backslash is part of the string.
                        sc.forward();
                    } else if sc.ch() == '"' {
                        if sc.ch_next() == '_' {
                            sc.change_state(CppStyle::USERLITERAL);
                        } else {
                            sc.forward_set_state(CppStyle::DEFAULT);
                        }
                    }
                }
                CppStyle::ESCAPESEQUENCE => {
                    escape.consume_digit();
                    if escape.at_end(sc.ch()) {
                        sc.set_state(escape.outer_state);
                        continue;
                    }
                }
                CppStyle::HASHQUOTEDSTRING => {
                    if sc.ch() == '\\' {
                        if matches!(sc.ch_next(), '"' | '\'' | '\\') {
                            sc.forward();
                        }
                    } else if sc.ch() == '"' {
                        sc.forward_set_state(CppStyle::DEFAULT);
                    }
                }
                CppStyle::STRINGRAW => {
                    if !raw_terminator.is_empty() && sc.matches(&raw_terminator) {
                        sc.forward_bytes(raw_terminator.len());
                        sc.set_state(CppStyle::DEFAULT);
                        raw_terminator.clear();
                    }
                }
                CppStyle::CHARACTER => {
                    if sc.at_line_end() {
                        sc.change_state(CppStyle::STRINGEOL);
                    } else if sc.ch() == '\\' {
                        if matches!(sc.ch_next(), '"' | '\'' | '\\') {
                            sc.forward();
                        }
                    } else if sc.ch() == '\'' {
                        if sc.ch_next() == '_' {
                            sc.change_state(CppStyle::USERLITERAL);
                        } else {
                            sc.forward_set_state(CppStyle::DEFAULT);
                        }
                    }
                }
                CppStyle::REGEX => {
                    if sc.at_line_start() {
                        sc.set_state(CppStyle::DEFAULT);
                    } else if !in_re_range && sc.ch() == '/' {
                        sc.forward();
                        // Flags.
                        while is_lower_case(sc.ch()) {
                            sc.forward();
                        }
                        sc.set_state(CppStyle::DEFAULT);
                    } else if sc.ch() == '\\' {
                        let line = sc.current_line();
                        if sc.current_pos() + 1 < sc.styler().line_end(line) {
                            sc.forward();
                        }
                    } else if sc.ch() == '[' {
                        in_re_range = true;
                    } else if sc.ch() == ']' {
                        in_re_range = false;
                    }
                }
                CppStyle::STRINGEOL => {
                    if sc.at_line_start() {
                        sc.set_state(CppStyle::DEFAULT);
                    }
                }
                CppStyle::VERBATIM => {
                    if self.options.verbatim_strings_allow_escapes && sc.ch() == '\\' {
                        sc.forward();
                    } else if sc.ch() == '"' {
                        if sc.ch_next() == '"' {
                            sc.forward();
                        } else {
                            sc.forward_set_state(CppStyle::DEFAULT);
                        }
                    }
                }
                CppStyle::TRIPLEVERBATIM => {
                    if sc.matches("\"\"\"") {
                        while sc.match_char('"') {
                            sc.forward();
                        }
                        sc.set_state(CppStyle::DEFAULT);
                    }
                }
                CppStyle::UUID => {
                    if sc.at_line_end() || sc.ch() == ')' {
                        sc.set_state(CppStyle::DEFAULT);
                    }
                }
                CppStyle::TASKMARKER => {
                    if is_operator_or_space(sc.ch()) {
                        sc.set_state(style_before_task_marker);
                        style_before_task_marker = CppStyle::DEFAULT;
                    }
                }
                CppStyle::DEFAULT
                | CppStyle::WORD
                | CppStyle::WORD2
                | CppStyle::GLOBALCLASS
                | CppStyle::COMMENTDOCKEYWORDERROR => {}
            }

            // Determine if a new state should be entered.
            if sc.state() == CppStyle::DEFAULT {
                let ch = sc.ch();
                let ch_next = sc.ch_next();
                let pos = sc.current_pos();
                if sc.match_pair('@', '"') {
                    sc.set_state(CppStyle::VERBATIM);
                    sc.forward();
                } else if self.options.triple_quoted_strings && sc.matches("\"\"\"") {
                    sc.set_state(CppStyle::TRIPLEVERBATIM);
                    sc.forward_n(2);
                } else if self.options.hash_quoted_strings && sc.match_pair('#', '"') {
                    sc.set_state(CppStyle::HASHQUOTEDSTRING);
                    sc.forward();
                } else if self.options.back_quoted_strings != 0 && ch == '`' {
                    sc.set_state(CppStyle::STRINGRAW);
                    raw_terminator = "`".to_string();
                } else if is_a_digit(ch) || (ch == '.' && is_a_digit(ch_next)) {
                    if last_word_was_uuid {
                        sc.set_state(CppStyle::UUID);
                        last_word_was_uuid = false;
                    } else {
                        sc.set_state(CppStyle::NUMBER);
                    }
                } else if !sc.at_line_end() && (word_start.contains(ch) || ch == '@') {
                    if last_word_was_uuid {
                        sc.set_state(CppStyle::UUID);
                        last_word_was_uuid = false;
                    } else {
                        sc.set_state(CppStyle::IDENTIFIER);
                    }
                } else if sc.match_pair('/', '*') {
                    // Qt and Doxygen doc comments.
                    if sc.matches("/**") || sc.matches("/*!") {
                        sc.set_state(CppStyle::COMMENTDOC);
                    } else {
                        sc.set_state(CppStyle::COMMENT);
                    }
                    // The `*` must not also close the comment.
                    sc.forward();
                } else if sc.match_pair('/', '/') {
                    if (sc.matches("///") && !sc.matches("////")) || sc.matches("//!") {
                        sc.set_state(CppStyle::COMMENTLINEDOC);
                    } else {
                        sc.set_state(CppStyle::COMMENTLINE);
                    }
                } else if ch == '/'
                    && regex_may_start(sc.styler(), pos, ch_prev_non_white, &ok_before_re, &could_be_post_op)
                {
                    sc.set_state(CppStyle::REGEX);
                    in_re_range = false;
                } else if ch == '"' {
                    if sc.ch_prev() == 'R'
                        && pos > 0
                        && CppStyle::from_style(sc.styler().buffer_style_at(pos - 1)) == CppStyle::STRINGRAW
                    {
                        sc.set_state(CppStyle::STRINGRAW);
                        let styler = sc.styler();
                        raw_terminator = ")".to_string();
                        let mut term_pos = pos + 1;
                        loop {
                            let ch_terminator = styler.safe_byte_at(term_pos, b'(');
                            if ch_terminator == b'(' {
                                break;
                            }
                            raw_terminator.push(char::from(ch_terminator));
                            term_pos += 1;
                        }
                        raw_terminator.push('"');
                    } else {
                        sc.set_state(CppStyle::STRING);
                    }
                    // A `>` no longer ends the string.
                    is_include_preprocessor = false;
                } else if is_include_preprocessor && ch == '<' {
                    sc.set_state(CppStyle::STRING);
                } else if ch == '\'' {
                    sc.set_state(CppStyle::CHARACTER);
                } else if ch == '#' && visible_chars == 0 {
                    // Directives are alone on their line.
                    sc.set_state(CppStyle::PREPROCESSOR);
                    while matches!(sc.ch_next(), ' ' | '\t') {
                        sc.forward();
                    }
                    let directive = sc.current_pos() + 1;
                    if sc.styler().matches(directive, "include") {
                        is_include_preprocessor = true;
                    }
                } else if is_operator(ch) {
                    sc.set_state(CppStyle::OPERATOR);
                }
            }

            if !is_a_space(sc.ch()) && !is_space_equiv(sc.state()) {
                // Only operators let a `/` start a regex.
                ch_prev_non_white = if sc.state() == CppStyle::OPERATOR { sc.ch() } else { ' ' };
                visible_chars += 1;
            }
            continuation_line = false;
            sc.forward();
        }

        let last_line = sc.current_line();
        if self.raw_string_terminators.merge(&raw_terminators_new, last_line) {
            sc.styler().change_lexer_state(start, start + length);
        }
        sc.complete();
    }

    /// Folds on braces, stream comments, explicit `//{` `//}` markers and preprocessor blocks.
    /// Each line stores its own level in the low bits and the level of the next line above bit 16
    /// so `} else {` lines can fold from their lowest level.
    fn fold(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document) {
        if !self.options.fold {
            return;
        }
        trace!(lexer = "cpp", start, length, init_style, "fold");
        let mut styler = LexAccessor::new(doc);
        let options = &self.options;

        let end_pos = start + length;
        let mut visible_chars = 0usize;
        let mut in_line_comment = false;
        let mut line_current = styler.get_line(start);
        let mut level_current = FOLD_LEVEL_BASE;
        if line_current > 0 {
            level_current = styler.level_at(line_current - 1) >> 16;
        }
        let mut line_start_next = styler.line_start(line_current + 1);
        let mut level_min_current = level_current;
        let mut level_next = level_current;
        let mut ch_next = styler.safe_byte_at(start, b' ');
        let mut style_next = CppStyle::from_style(styler.style_at(start));
        let mut style = CppStyle::from_style(init_style);
        let user_defined_markers = !options.fold_explicit_start.is_empty() && !options.fold_explicit_end.is_empty();
        let doc_length = styler.length();

        for i in start..end_pos {
            let ch = ch_next;
            ch_next = styler.safe_byte_at(i + 1, b' ');
            let style_prev = style;
            style = style_next;
            style_next = CppStyle::from_style(styler.style_at(i + 1));
            let at_eol = i + 1 == line_start_next;

            if matches!(style, CppStyle::COMMENTLINE | CppStyle::COMMENTLINEDOC) {
                in_line_comment = true;
            }
            if options.fold_comment
                && options.fold_comment_multiline
                && is_stream_comment_style(style)
                && !in_line_comment
            {
                if !is_stream_comment_style(style_prev) {
                    level_next += 1;
                } else if !is_stream_comment_style(style_next) && !at_eol {
                    // The character after a comment may not be styled yet.
                    level_next -= 1;
                }
            }
            if options.fold_comment
                && options.fold_comment_explicit
                && (style == CppStyle::COMMENTLINE || options.fold_explicit_anywhere)
            {
                if user_defined_markers {
                    if styler.matches(i, &options.fold_explicit_start) {
                        level_next += 1;
                    } else if styler.matches(i, &options.fold_explicit_end) {
                        level_next -= 1;
                    }
                } else if ch == b'/' && ch_next == b'/' {
                    match styler.safe_byte_at(i + 2, b' ') {
                        b'{' => level_next += 1,
                        b'}' => level_next -= 1,
                        _ => {}
                    }
                }
            }
            if options.fold_preprocessor && style == CppStyle::PREPROCESSOR && ch == b'#' {
                let mut j = i + 1;
                while j < end_pos && matches!(styler.safe_byte_at(j, b' '), b' ' | b'\t') {
                    j += 1;
                }
                if styler.matches(j, "region") || styler.matches(j, "if") {
                    level_next += 1;
                } else if styler.matches(j, "end") {
                    level_next -= 1;
                }
                if options.fold_preprocessor_at_else && (styler.matches(j, "else") || styler.matches(j, "elif")) {
                    level_min_current -= 1;
                }
            }
            if options.fold_syntax_based && style == CppStyle::OPERATOR {
                match ch {
                    b'{' | b'[' | b'(' => {
                        // The lowest level before a `{` lets "} else {" fold.
                        if options.fold_at_else && level_min_current > level_next {
                            level_min_current = level_next;
                        }
                        level_next += 1;
                    }
                    b'}' | b']' | b')' => level_next -= 1,
                    _ => {}
                }
            }
            if !is_a_space(char::from(ch)) {
                visible_chars += 1;
            }
            if at_eol || i + 1 == end_pos {
                let level_use = if (options.fold_syntax_based && options.fold_at_else)
                    || (options.fold_preprocessor && options.fold_preprocessor_at_else)
                {
                    level_min_current
                } else {
                    level_current
                };
                let mut lev = level_use | (level_next << 16);
                if visible_chars == 0 && options.fold_compact {
                    lev |= FOLD_LEVEL_WHITE_FLAG;
                }
                if level_use < level_next {
                    lev |= FOLD_LEVEL_HEADER_FLAG;
                }
                styler.set_level(line_current, lev);
                line_current += 1;
                line_start_next = styler.line_start(line_current + 1);
                level_current = level_next;
                level_min_current = level_current;
                if at_eol && i + 1 == doc_length {
                    // An empty last line takes the level of the line before.
                    styler.set_level(line_current, (level_current | (level_current << 16)) | FOLD_LEVEL_WHITE_FLAG);
                }
                visible_chars = 0;
                in_line_comment = false;
            }
        }
    }

    fn named_styles(&self) -> usize {
        let allocated = self.sub_styles.last_allocated().map_or(0, |last| usize::from(last) + 1);
        CppStyle::ALL.len().max(allocated)
    }

    fn name_of_style(&self, style: u8) -> &'static str {
        CppStyle::name_of_style(style)
    }

    fn sub_styles(&self) -> Option<&SubStyles> {
        Some(&self.sub_styles)
    }

    fn sub_styles_mut(&mut self) -> Option<&mut SubStyles> {
        Some(&mut self.sub_styles)
    }
}

/// C, C++ and related languages.
pub static LEXER_CPP: LexerModule =
    LexerModule::with_factory::<CppStyle>(3, "cpp", LexerCpp::create, WORD_LIST_DESCRIPTIONS);

#[cfg(test)]
mod tests {
    use super::*;
    use editor_core_lexlib::TextDocument;

    #[test]
    fn test_escape_sequence_lengths() {
        let mut escape = EscapeSequence::default();
        escape.reset(CppStyle::STRING, 'x');
        assert_eq!(escape.digits_left, 5);
        assert!(!escape.at_end('f'));
        escape.reset(CppStyle::STRING, '1');
        assert_eq!(escape.digits, EscapeDigits::Octal);
        assert!(escape.at_end('8'));
        escape.reset(CppStyle::STRING, 'n');
        escape.consume_digit();
        assert!(escape.at_end('a'));
    }

    #[test]
    fn test_regex_context() {
        let mut doc = TextDocument::new("  return /x/;\na++ / b");
        let mut styler = LexAccessor::new(&mut doc);
        assert!(follows_return_keyword(&mut styler, 9));
        assert!(!follows_return_keyword(&mut styler, 4));
        assert!(follows_postfix_operator(&mut styler, 18));
    }

    #[test]
    fn test_allow_dollars_rebuilds_word_set() {
        let mut lexer = LexerCpp::new();
        assert!(lexer.set_word.contains('$'));
        assert_eq!(lexer.property_set("lexer.cpp.allow.dollars", "0"), Some(0));
        assert!(!lexer.set_word.contains('$'));
        assert_eq!(lexer.property_set("lexer.cpp.allow.dollars", "0"), None);
    }
}
