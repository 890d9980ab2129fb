//! The `json` lexer, with optional comments, escape sequences and JSON-LD highlighting.

use editor_core_lexlib::character_set::{is_a_digit, is_a_space, is_space_char};
use editor_core_lexlib::{
    CharacterSet, Document, FOLD_LEVEL_HEADER_FLAG, FOLD_LEVEL_BASE, FOLD_LEVEL_WHITE_FLAG, LexAccessor, LexState,
    Lexer, LexerModule, OptionSet, PropertyType, SetBase, StyleContext, WordList, lexer_styles,
};
use tracing::{debug, trace};

lexer_styles! {
    /// Styles of the `json` lexer.
    pub enum JsonStyle {
        DEFAULT = 0,
        NUMBER = 1,
        STRING = 2,
        STRINGEOL = 3,
        PROPERTYNAME = 4,
        ESCAPESEQUENCE = 5,
        LINECOMMENT = 6,
        BLOCKCOMMENT = 7,
        OPERATOR = 8,
        URI = 9,
        COMPACTIRI = 10,
        KEYWORD = 11,
        LDKEYWORD = 12,
        ERROR = 13,
    }
}

const WORD_LIST_DESCRIPTIONS: &[&str] = &["JSON Keywords", "JSON-LD Keywords"];

const URI_SCHEMES: &[&str] = &["https://", "http://", "ssh://", "git://", "svn://", "ftp://", "mailto:"];

/// Tracks whether a string looks like a JSON-LD compact IRI (`prefix:suffix`) without looking
/// ahead for the colon.
struct CompactIri {
    colon_count: usize,
    found_invalid_char: bool,
    set: CharacterSet,
}

impl CompactIri {
    fn new() -> Self {
        Self {
            colon_count: 0,
            found_invalid_char: false,
            set: CharacterSet::new(SetBase::Alpha, "$_-"),
        }
    }

    fn reset(&mut self) {
        self.colon_count = 0;
        self.found_invalid_char = false;
    }

    fn check_char(&mut self, ch: char) {
        if ch == ':' {
            self.colon_count += 1;
        } else {
            self.found_invalid_char |= !self.set.contains(ch);
        }
    }

    fn should_highlight(&self) -> bool {
        !self.found_invalid_char && self.colon_count == 1
    }
}

/// Progress through an escape sequence in a string.
struct EscapeSequence {
    digits_left: i32,
    hex_digits: CharacterSet,
    escape_chars: CharacterSet,
}

impl EscapeSequence {
    fn new() -> Self {
        Self {
            digits_left: 0,
            hex_digits: CharacterSet::new(SetBase::Digits, "ABCDEFabcdef"),
            escape_chars: CharacterSet::new(SetBase::None, "\\\"tnbfru/"),
        }
    }

    /// Start a sequence whose first character after the backslash is `next`; false when that
    /// character cannot be escaped.
    fn new_sequence(&mut self, next: char) -> bool {
        self.digits_left = 0;
        if next == 'u' {
            self.digits_left = 5;
            true
        } else {
            self.escape_chars.contains(next)
        }
    }

    fn at_escape_end(&self) -> bool {
        self.digits_left <= 0
    }

    fn is_invalid_char(&self, ch: char) -> bool {
        !self.hex_digits.contains(ch)
    }
}

#[derive(Debug, Clone, Default)]
struct OptionsJson {
    fold_compact: bool,
    fold: bool,
    allow_comments: bool,
    escape_sequence: bool,
}

fn option_set() -> OptionSet<OptionsJson> {
    let mut set = OptionSet::new();
    set.define_bool(
        "lexer.json.escape.sequence",
        |o: &mut OptionsJson| &mut o.escape_sequence,
        "Set to 1 to enable highlighting of escape sequences in strings",
    );
    set.define_bool(
        "lexer.json.allow.comments",
        |o| &mut o.allow_comments,
        "Set to 1 to enable highlighting of line/block comments in JSON",
    );
    set.define_bool(
        "fold.compact",
        |o| &mut o.fold_compact,
        "Include trailing blank lines in the preceding fold.",
    );
    set.define_bool("fold", |o| &mut o.fold, "Enable folding.");
    set.define_word_list_sets(WORD_LIST_DESCRIPTIONS);
    set
}

/// Whether `ch` is the next non-blank character after `start` on the same line.
fn is_next_non_whitespace(styler: &mut LexAccessor<'_>, start: usize, ch: u8) -> bool {
    for i in 1..=50 {
        let curr = styler.safe_byte_at(start + i, 0);
        let next = styler.safe_byte_at(start + i + 1, 0);
        let at_eol = (curr == b'\r' && next != b'\n') || curr == b'\n';
        if curr == ch {
            return true;
        }
        if !is_space_char(char::from(curr)) || at_eol {
            return false;
        }
    }
    false
}

/// Whether the string opening at `start` is followed by a colon, making it a property name.
/// Names longer than 100 bytes are not recognised.
fn at_property_name(styler: &mut LexAccessor<'_>, start: usize) -> bool {
    let mut escaped = false;
    for i in 1..=100 {
        let curr = styler.safe_byte_at(start + i, 0);
        if escaped {
            escaped = false;
            continue;
        }
        escaped = curr == b'\\';
        if curr == b'"' {
            return is_next_non_whitespace(styler, start + i, b':');
        }
        if curr == 0 {
            return false;
        }
    }
    false
}

fn is_next_word_in_list(list: &WordList, word_set: &CharacterSet, styler: &mut LexAccessor<'_>, pos: usize) -> bool {
    let mut word = String::new();
    for i in 0..50 {
        let ch = char::from(styler.safe_byte_at(pos + i, b' '));
        if !word_set.contains(ch) {
            break;
        }
        word.push(ch);
    }
    list.in_list(&word)
}

/// Lexer for JSON and JSON-LD.
pub struct LexerJson {
    options: OptionsJson,
    option_set: OptionSet<OptionsJson>,
    keywords_json: WordList,
    keywords_json_ld: WordList,
    set_operators: CharacterSet,
    set_url: CharacterSet,
    set_keyword_json_ld: CharacterSet,
    set_keyword_json: CharacterSet,
}

impl Default for LexerJson {
    fn default() -> Self {
        Self::new()
    }
}

impl LexerJson {
    /// An instance with every option off.
    pub fn new() -> Self {
        Self {
            options: OptionsJson::default(),
            option_set: option_set(),
            keywords_json: WordList::new(),
            keywords_json_ld: WordList::new(),
            set_operators: CharacterSet::new(SetBase::None, "[{}]:,"),
            set_url: CharacterSet::new(SetBase::AlphaNum, "-._~:/?#[]@!$&'()*+,),="),
            set_keyword_json_ld: CharacterSet::new(SetBase::Alpha, ":@"),
            set_keyword_json: CharacterSet::new(SetBase::Alpha, "$_"),
        }
    }

    fn create() -> Box<dyn Lexer> {
        Box::new(Self::new())
    }

    fn is_number_part(&self, sc: &StyleContext<'_, '_, JsonStyle>) -> bool {
        let (ch, prev, next) = (sc.ch(), sc.ch_prev(), sc.ch_next());
        let prev_lower = prev.to_ascii_lowercase();
        let number_start = is_a_digit(ch)
            && (prev == '+' || prev == '-' || sc.at_line_start() || is_a_space(prev) || self.set_operators.contains(prev));
        let exponent_part =
            ch.to_ascii_lowercase() == 'e' && is_a_digit(prev) && (is_a_digit(next) || next == '+' || next == '-');
        let sign_part = (ch == '-' || ch == '+')
            && ((prev_lower == 'e' && is_a_digit(next))
                || ((is_a_space(prev) || self.set_operators.contains(prev)) && is_a_digit(next)));
        let adjacent_digit = is_a_digit(ch) && is_a_digit(prev);
        let after_exponent = is_a_digit(ch) && prev_lower == 'e';
        let dot_part = ch == '.' && is_a_digit(prev) && is_a_digit(next);
        let after_dot = is_a_digit(ch) && prev == '.';
        number_start || exponent_part || sign_part || adjacent_digit || dot_part || after_exponent || after_dot
    }
}

impl Lexer for LexerJson {
    fn name(&self) -> &'static str {
        "json"
    }

    fn id(&self) -> i32 {
        120
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
            debug!(lexer = "json", key, val, "property changed");
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
            0 => &mut self.keywords_json,
            1 => &mut self.keywords_json_ld,
            _ => return None,
        };
        if list.set(words, false) {
            debug!(lexer = "json", index, words = list.len(), "word list changed");
            Some(0)
        } else {
            None
        }
    }

    fn lex(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document) {
        trace!(lexer = "json", start, length, init_style, "lex");
        let mut styler = LexAccessor::new(doc);
        let mut sc = StyleContext::<JsonStyle>::new(start, length, init_style, &mut styler);
        let mut escape = EscapeSequence::new();
        let mut compact_iri = CompactIri::new();
        let mut string_style_before = JsonStyle::STRING;

        while sc.more() {
            match sc.state() {
                JsonStyle::BLOCKCOMMENT => {
                    if sc.matches("*/") {
                        sc.forward();
                        sc.forward_set_state(JsonStyle::DEFAULT);
                    }
                }
                JsonStyle::LINECOMMENT => {
                    if sc.match_line_end() {
                        sc.set_state(JsonStyle::DEFAULT);
                    }
                }
                JsonStyle::STRINGEOL => {
                    if sc.at_line_start() {
                        sc.set_state(JsonStyle::DEFAULT);
                    }
                }
                JsonStyle::ESCAPESEQUENCE => {
                    escape.digits_left -= 1;
                    if !escape.at_escape_end() {
                        if escape.is_invalid_char(sc.ch()) {
                            sc.set_state(JsonStyle::ERROR);
                        }
                    } else if sc.ch() == '"' {
                        sc.set_state(string_style_before);
                        sc.forward_set_state(JsonStyle::DEFAULT);
                    } else if sc.ch() == '\\' {
                        if !escape.new_sequence(sc.ch_next()) {
                            sc.set_state(JsonStyle::ERROR);
                        }
                        sc.forward();
                    } else {
                        sc.set_state(string_style_before);
                        if sc.at_line_end() {
                            sc.change_state(JsonStyle::STRINGEOL);
                        }
                    }
                }
                JsonStyle::PROPERTYNAME | JsonStyle::STRING => {
                    if sc.ch() == '"' {
                        if compact_iri.should_highlight() {
                            sc.change_state(JsonStyle::COMPACTIRI);
                            compact_iri.reset();
                        }
                        sc.forward_set_state(JsonStyle::DEFAULT);
                    } else if sc.at_line_end() {
                        sc.change_state(JsonStyle::STRINGEOL);
                    } else if sc.ch() == '\\' && !matches!(sc.ch_next(), '\r' | '\n') {
                        // A string never continues onto the next line.
                        string_style_before = sc.state();
                        if self.options.escape_sequence {
                            sc.set_state(JsonStyle::ESCAPESEQUENCE);
                            if !escape.new_sequence(sc.ch_next()) {
                                sc.set_state(JsonStyle::ERROR);
                            }
                        }
                        sc.forward();
                    } else if URI_SCHEMES.iter().any(|scheme| sc.matches(scheme)) {
                        string_style_before = sc.state();
                        sc.set_state(JsonStyle::URI);
                    } else if sc.ch() == '@' {
                        let pos = sc.current_pos();
                        if is_next_word_in_list(&self.keywords_json_ld, &self.set_keyword_json_ld, sc.styler(), pos) {
                            string_style_before = sc.state();
                            sc.set_state(JsonStyle::LDKEYWORD);
                        }
                    } else {
                        compact_iri.check_char(sc.ch());
                    }
                }
                state @ (JsonStyle::LDKEYWORD | JsonStyle::URI) => {
                    if (state == JsonStyle::LDKEYWORD && !self.set_keyword_json_ld.contains(sc.ch()))
                        || !self.set_url.contains(sc.ch())
                    {
                        sc.set_state(string_style_before);
                    }
                    if sc.ch() == '"' {
                        sc.forward_set_state(JsonStyle::DEFAULT);
                    } else if sc.at_line_end() {
                        sc.change_state(JsonStyle::STRINGEOL);
                    }
                }
                JsonStyle::OPERATOR | JsonStyle::NUMBER => sc.set_state(JsonStyle::DEFAULT),
                JsonStyle::ERROR => {
                    if sc.match_line_end() {
                        sc.set_state(JsonStyle::DEFAULT);
                    }
                }
                JsonStyle::KEYWORD => {
                    if !self.set_keyword_json.contains(sc.ch()) {
                        sc.set_state(JsonStyle::DEFAULT);
                    }
                }
                JsonStyle::DEFAULT | JsonStyle::COMPACTIRI => {}
            }

            if sc.state() == JsonStyle::DEFAULT {
                if sc.ch() == '"' {
                    compact_iri.reset();
                    sc.set_state(JsonStyle::STRING);
                    let pos = sc.current_pos();
                    if at_property_name(sc.styler(), pos) {
                        sc.set_state(JsonStyle::PROPERTYNAME);
                    }
                } else if self.set_operators.contains(sc.ch()) {
                    sc.set_state(JsonStyle::OPERATOR);
                } else if self.options.allow_comments && sc.matches("/*") {
                    sc.set_state(JsonStyle::BLOCKCOMMENT);
                    sc.forward();
                } else if self.options.allow_comments && sc.matches("//") {
                    sc.set_state(JsonStyle::LINECOMMENT);
                } else if self.set_keyword_json.contains(sc.ch()) {
                    let pos = sc.current_pos();
                    if is_next_word_in_list(&self.keywords_json, &self.set_keyword_json, sc.styler(), pos) {
                        sc.set_state(JsonStyle::KEYWORD);
                    }
                }
                if self.is_number_part(&sc) {
                    sc.set_state(JsonStyle::NUMBER);
                } else if sc.state() == JsonStyle::DEFAULT && !is_a_space(sc.ch()) {
                    sc.set_state(JsonStyle::ERROR);
                }
            }
            sc.forward();
        }
        sc.complete();
    }

    /// Levels are stored as `current | next << 16` so a fold can restart from the previous line
    /// alone.
    fn fold(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document) {
        if !self.options.fold {
            return;
        }
        trace!(lexer = "json", start, length, init_style, "fold");
        let mut styler = LexAccessor::new(doc);
        let mut line = styler.get_line(start);
        let end = start + length;
        let mut level_current = if line > 0 {
            styler.level_at(line - 1) >> 16
        } else {
            FOLD_LEVEL_BASE
        };
        let mut level_next = level_current;
        let mut visible_chars = 0;
        for i in start..end {
            let curr = styler.safe_byte_at(i, b' ');
            let next = styler.safe_byte_at(i + 1, b' ');
            let at_eol = (curr == b'\r' && next != b'\n') || curr == b'\n';
            if JsonStyle::from_style(styler.style_at(i)) == JsonStyle::OPERATOR {
                match curr {
                    b'{' | b'[' => level_next += 1,
                    b'}' | b']' => level_next -= 1,
                    _ => {}
                }
            }
            if at_eol || i + 1 == end {
                let mut level = level_current | level_next << 16;
                if visible_chars == 0 && self.options.fold_compact {
                    level |= FOLD_LEVEL_WHITE_FLAG;
                } else if level_next > level_current {
                    level |= FOLD_LEVEL_HEADER_FLAG;
                }
                styler.set_level(line, level);
                line += 1;
                level_current = level_next;
                visible_chars = 0;
            }
            if !is_space_char(char::from(curr)) {
                visible_chars += 1;
            }
        }
    }

    fn named_styles(&self) -> usize {
        JsonStyle::ALL.len()
    }

    fn name_of_style(&self, style: u8) -> &'static str {
        JsonStyle::name_of_style(style)
    }
}

/// JSON and JSON-LD.
pub static LEXER_JSON: LexerModule =
    LexerModule::with_factory::<JsonStyle>(120, "json", LexerJson::create, WORD_LIST_DESCRIPTIONS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_sequence_validation() {
        let mut escape = EscapeSequence::new();
        assert!(escape.new_sequence('n'));
        assert!(escape.at_escape_end());
        assert!(escape.new_sequence('u'));
        assert!(!escape.at_escape_end());
        assert!(!escape.new_sequence('x'));
        assert!(escape.is_invalid_char('g'));
        assert!(!escape.is_invalid_char('F'));
    }

    #[test]
    fn test_compact_iri() {
        let mut iri = CompactIri::new();
        "foaf:name".chars().for_each(|c| iri.check_char(c));
        assert!(iri.should_highlight());
        iri.reset();
        "a:b:c".chars().for_each(|c| iri.check_char(c));
        assert!(!iri.should_highlight());
    }
}
