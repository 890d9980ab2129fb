//! The `lua` lexer, covering Lua 5.0 through 5.4.
//!
//! Long brackets (`[[ ]]`, `[==[ ]==]`, `--[[ ]]`) span lines: their level, a pending `\z`
//! whitespace skip and a running `---` doc comment block are kept in the line state.

use editor_core_lexlib::character_set::{is_a_digit, is_a_space};
use editor_core_lexlib::fold::line_level;
use editor_core_lexlib::{
    CharacterSet, Document, FOLD_LEVEL_NUMBER_MASK, LexAccessor, LexState, Lexer, LexerModule, OptionSet, PropertyType,
    SetBase, StyleContext, WordList, lexer_styles,
};
use tracing::{debug, trace};

lexer_styles! {
    /// Styles of the `lua` lexer.
    pub enum LuaStyle {
        DEFAULT = 0,
        /// Block comment `--[[ ]]`.
        COMMENT = 1,
        COMMENTLINE = 2,
        COMMENTDOC = 3,
        NUMBER = 4,
        WORD = 5,
        STRING = 6,
        CHARACTER = 7,
        LITERALSTRING = 8,
        PREPROCESSOR = 9,
        OPERATOR = 10,
        IDENTIFIER = 11,
        STRINGEOL = 12,
        WORD2 = 13,
        WORD3 = 14,
        WORD4 = 15,
        WORD5 = 16,
        WORD6 = 17,
        WORD7 = 18,
        WORD8 = 19,
        LABEL = 20,
    }
}

const WORD_LIST_DESCRIPTIONS: &[&str] = &[
    "Keywords",
    "Basic functions",
    "String, (table) & math functions",
    "(coroutines), I/O & system facilities",
    "user1",
    "user2",
    "user3",
    "user4",
];

const KEYWORD_STYLES: [LuaStyle; 8] = [
    LuaStyle::WORD,
    LuaStyle::WORD2,
    LuaStyle::WORD3,
    LuaStyle::WORD4,
    LuaStyle::WORD5,
    LuaStyle::WORD6,
    LuaStyle::WORD7,
    LuaStyle::WORD8,
];

const MASK_SEPARATOR: i32 = 0xFF;
const MASK_STRING_WS: i32 = 0x100;
const MASK_DOC_COMMENT: i32 = 0x200;

#[derive(Debug, Clone, Default)]
struct OptionsLua {
    fold: bool,
    fold_compact: bool,
}

fn option_set() -> OptionSet<OptionsLua> {
    let mut set = OptionSet::new();
    set.define_bool("fold", |o: &mut OptionsLua| &mut o.fold, "Enable folding.");
    set.define_bool(
        "fold.compact",
        |o| &mut o.fold_compact,
        "Include trailing blank lines in the preceding fold.",
    );
    set.define_word_list_sets(WORD_LIST_DESCRIPTIONS);
    set
}

fn is_space_or_tab(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Level of the long bracket at the cursor: 0 for a lone `[` or `]`, 1 for `[[`, 2 for `[=[`
/// and so on.
fn long_delim_check<S: LexState>(sc: &mut StyleContext<'_, '_, S>) -> i32 {
    let mut sep = 1;
    while sc.get_relative(sep as isize) == '=' && sep < 0xFF {
        sep += 1;
    }
    if sc.get_relative(sep as isize) == sc.ch() {
        sep
    } else {
        0
    }
}

/// Lexer for Lua source.
pub struct LexerLua {
    options: OptionsLua,
    option_set: OptionSet<OptionsLua>,
    keywords: [WordList; 8],
}

impl Default for LexerLua {
    fn default() -> Self {
        Self::new()
    }
}

impl LexerLua {
    /// An instance with empty keyword lists and compact folding.
    pub fn new() -> Self {
        Self {
            options: OptionsLua {
                fold: false,
                fold_compact: true,
            },
            option_set: option_set(),
            keywords: Default::default(),
        }
    }

    fn create() -> Box<dyn Lexer> {
        Box::new(Self::new())
    }

    fn classify(&self, ident: &str) -> LuaStyle {
        self.keywords
            .iter()
            .zip(KEYWORD_STYLES)
            .find(|(list, _)| list.in_list(ident))
            .map_or(LuaStyle::IDENTIFIER, |(_, style)| style)
    }
}

impl Lexer for LexerLua {
    fn name(&self) -> &'static str {
        "lua"
    }

    fn id(&self) -> i32 {
        15
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
            debug!(lexer = "lua", key, val, "property changed");
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
        let list = self.keywords.get_mut(index)?;
        if list.set(words, false) {
            debug!(lexer = "lua", index, words = list.len(), "word list changed");
            Some(0)
        } else {
            None
        }
    }

    fn lex(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document) {
        trace!(lexer = "lua", start, length, init_style, "lex");
        let mut styler = LexAccessor::new(doc);

        // Accepts accented characters.
        let set_word_start = CharacterSet::new(SetBase::Alpha, "_").with_value_after(true);
        let set_word = CharacterSet::new(SetBase::AlphaNum, "_").with_value_after(true);
        // Several dots pass as a number; [pP] is for hex floats.
        let set_number = CharacterSet::new(SetBase::Digits, ".-+abcdefpABCDEFP");
        let set_exponent = CharacterSet::new(SetBase::None, "eEpP");
        let set_operator = CharacterSet::new(SetBase::None, "*/-+()={}~[];<>,.^%:#&|");
        let set_escape_skip = CharacterSet::new(SetBase::None, "\"'\\");

        let mut init = LuaStyle::from_style(init_style);
        let current_line = styler.get_line(start);
        let mut sep_count = 0;
        let mut string_ws = 0;
        let mut last_line_doc_comment = 0;
        let carries_line_state = |state: LuaStyle| {
            matches!(
                state,
                LuaStyle::DEFAULT
                    | LuaStyle::LITERALSTRING
                    | LuaStyle::COMMENT
                    | LuaStyle::COMMENTDOC
                    | LuaStyle::STRING
                    | LuaStyle::CHARACTER
            )
        };
        if current_line > 0 && carries_line_state(init) {
            let line_state = styler.get_line_state(current_line - 1);
            sep_count = line_state & MASK_SEPARATOR;
            string_ws = line_state & MASK_STRING_WS;
            last_line_doc_comment = line_state & MASK_DOC_COMMENT;
        }

        // Results of identifier and keyword matching.
        let mut iden_pos: usize = 0;
        let mut iden_word_pos: usize = 0;
        let mut iden_style = LuaStyle::IDENTIFIER;
        let mut found_goto = false;

        // Line-bounded styles do not leak onto the next line.
        if matches!(
            init,
            LuaStyle::STRINGEOL | LuaStyle::COMMENTLINE | LuaStyle::COMMENTDOC | LuaStyle::PREPROCESSOR
        ) {
            init = LuaStyle::DEFAULT;
        }

        let mut sc = StyleContext::with_state(start, length, init, &mut styler);
        if start == 0 && sc.ch() == '#' && sc.ch_next() == '!' {
            // A shebang line is a comment only at the very start.
            sc.set_state(LuaStyle::COMMENTLINE);
        }
        while sc.more() {
            if sc.at_line_end() {
                let line = sc.current_line();
                let value = if carries_line_state(sc.state()) {
                    last_line_doc_comment | string_ws | sep_count
                } else {
                    0
                };
                sc.styler().set_line_state(line, value);
            }
            if sc.at_line_start() && sc.state() == LuaStyle::STRING {
                // Keep STRINGEOL from leaking back onto the previous line.
                sc.set_state(LuaStyle::STRING);
            }

            // Backslash line continuation inside strings.
            if matches!(sc.state(), LuaStyle::STRING | LuaStyle::CHARACTER)
                && sc.ch() == '\\'
                && matches!(sc.ch_next(), '\n' | '\r')
            {
                sc.forward();
                if sc.ch() == '\r' && sc.ch_next() == '\n' {
                    sc.forward();
                }
                let line = sc.current_line();
                sc.styler().set_line_state(line, last_line_doc_comment | string_ws | sep_count);
                sc.forward();
                continue;
            }

            // Determine if the current state should terminate.
            match sc.state() {
                LuaStyle::OPERATOR => {
                    if sc.ch() == ':' && sc.ch_prev() == ':' {
                        // `:: label ::`
                        sc.forward();
                        let mut ln: isize = 0;
                        while is_space_or_tab(sc.get_relative(ln)) {
                            ln += 1;
                        }
                        let ws1 = ln;
                        if set_word_start.contains(sc.get_relative(ln)) {
                            let mut label = String::new();
                            while set_word.contains(sc.get_relative(ln)) {
                                label.push(sc.get_relative(ln));
                                ln += 1;
                            }
                            let lbl = ln;
                            if !self.keywords[0].in_list(&label) {
                                while is_space_or_tab(sc.get_relative(ln)) {
                                    ln += 1;
                                }
                                let ws2 = ln - lbl;
                                if sc.get_relative(ln) == ':' && sc.get_relative(ln + 1) == ':' {
                                    sc.change_state(LuaStyle::LABEL);
                                    if ws1 > 0 {
                                        sc.set_state(LuaStyle::DEFAULT);
                                        sc.forward_bytes(ws1 as usize);
                                    }
                                    sc.set_state(LuaStyle::LABEL);
                                    sc.forward_bytes((lbl - ws1) as usize);
                                    if ws2 > 0 {
                                        sc.set_state(LuaStyle::DEFAULT);
                                        sc.forward_bytes(ws2 as usize);
                                    }
                                    sc.set_state(LuaStyle::LABEL);
                                    sc.forward_bytes(2);
                                }
                            }
                        }
                    }
                    sc.set_state(LuaStyle::DEFAULT);
                }
                LuaStyle::NUMBER => {
                    // Stop on anything that cannot continue a number; a sign only follows an exponent.
                    if !set_number.contains(sc.ch())
                        || (matches!(sc.ch(), '-' | '+') && !set_exponent.contains(sc.ch_prev()))
                    {
                        sc.set_state(LuaStyle::DEFAULT);
                    }
                }
                LuaStyle::IDENTIFIER => {
                    // Commit the identifier scanned when it started; its first character is
                    // already behind the cursor.
                    let first_width = sc.length_current();
                    iden_pos = iden_pos.saturating_sub(first_width);
                    if iden_word_pos > 0 {
                        iden_word_pos = iden_word_pos.saturating_sub(first_width);
                        sc.change_state(iden_style);
                        sc.forward_bytes(iden_word_pos);
                        iden_pos = iden_pos.saturating_sub(iden_word_pos);
                        if iden_pos > 0 {
                            sc.set_state(LuaStyle::IDENTIFIER);
                            sc.forward_bytes(iden_pos);
                        }
                    } else {
                        sc.forward_bytes(iden_pos);
                    }
                    sc.set_state(LuaStyle::DEFAULT);
                    if found_goto {
                        while is_space_or_tab(sc.ch()) && !sc.at_line_end() {
                            sc.forward();
                        }
                        if set_word_start.contains(sc.ch()) {
                            sc.set_state(LuaStyle::LABEL);
                            sc.forward();
                            while set_word.contains(sc.ch()) {
                                sc.forward();
                            }
                            let label = sc.get_current();
                            if self.keywords[0].in_list(&label) {
                                sc.change_state(LuaStyle::WORD);
                            }
                        }
                        sc.set_state(LuaStyle::DEFAULT);
                    }
                }
                LuaStyle::COMMENTLINE | LuaStyle::COMMENTDOC | LuaStyle::PREPROCESSOR => {
                    if sc.at_line_end() {
                        sc.forward_set_state(LuaStyle::DEFAULT);
                    }
                }
                state @ (LuaStyle::STRING | LuaStyle::CHARACTER) => {
                    let quote = if state == LuaStyle::STRING { '"' } else { '\'' };
                    if string_ws != 0 && !is_a_space(sc.ch()) {
                        string_ws = 0;
                    }
                    if sc.ch() == '\\' {
                        if set_escape_skip.contains(sc.ch_next()) {
                            sc.forward();
                        } else if sc.ch_next() == 'z' {
                            sc.forward();
                            string_ws = MASK_STRING_WS;
                        }
                    } else if sc.ch() == quote {
                        sc.forward_set_state(LuaStyle::DEFAULT);
                    } else if string_ws == 0 && sc.at_line_end() {
                        sc.change_state(LuaStyle::STRINGEOL);
                        sc.forward_set_state(LuaStyle::DEFAULT);
                    }
                }
                LuaStyle::LITERALSTRING | LuaStyle::COMMENT if sc.ch() == ']' => {
                    let sep = long_delim_check(&mut sc);
                    if sep == sep_count {
                        sc.forward_n(sep as usize);
                        sc.forward_set_state(LuaStyle::DEFAULT);
                    }
                }
                _ => {}
            }

            // Determine if a new state should be entered.
            if sc.state() == LuaStyle::DEFAULT {
                if is_a_digit(sc.ch()) || (sc.ch() == '.' && is_a_digit(sc.ch_next())) {
                    sc.set_state(LuaStyle::NUMBER);
                    if sc.ch() == '0' && matches!(sc.ch_next(), 'x' | 'X') {
                        sc.forward();
                    }
                } else if set_word_start.contains(sc.ch()) {
                    // Dotted and colon-joined names are matched segment by segment; the longest
                    // match against a keyword list wins and the rest stays an identifier.
                    let mut ident = String::new();
                    iden_pos = 0;
                    iden_word_pos = 0;
                    iden_style = LuaStyle::IDENTIFIER;
                    loop {
                        let iden_pos_old = iden_pos;
                        let mut segment = String::new();
                        segment.push(sc.get_relative(iden_pos as isize));
                        iden_pos += 1;
                        let mut c = sc.get_relative(iden_pos as isize);
                        while set_word.contains(c) {
                            segment.push(c);
                            iden_pos += 1;
                            c = sc.get_relative(iden_pos as isize);
                        }
                        if iden_pos_old > 0 && self.keywords[0].in_list(&segment) {
                            // Keywords do not join dotted names.
                            iden_pos = iden_pos_old - 1;
                            ident.pop();
                            break;
                        }
                        ident.push_str(&segment);
                        let style = self.classify(&ident);
                        if style != LuaStyle::IDENTIFIER {
                            iden_style = style;
                            iden_word_pos = iden_pos;
                        }
                        if iden_style == LuaStyle::WORD {
                            break;
                        }
                        let c_next = sc.get_relative(iden_pos as isize + 1);
                        if matches!(c, '.' | ':') && set_word_start.contains(c_next) {
                            ident.push(c);
                            iden_pos += 1;
                        } else {
                            break;
                        }
                    }
                    found_goto = iden_style == LuaStyle::WORD && ident == "goto";
                    sc.set_state(LuaStyle::IDENTIFIER);
                } else if sc.ch() == '"' {
                    sc.set_state(LuaStyle::STRING);
                    string_ws = 0;
                } else if sc.ch() == '\'' {
                    sc.set_state(LuaStyle::CHARACTER);
                    string_ws = 0;
                } else if sc.ch() == '[' {
                    sep_count = long_delim_check(&mut sc);
                    if sep_count == 0 {
                        sc.set_state(LuaStyle::OPERATOR);
                    } else {
                        sc.set_state(LuaStyle::LITERALSTRING);
                        sc.forward_n(sep_count as usize);
                    }
                } else if sc.match_pair('-', '-') {
                    sc.set_state(if last_line_doc_comment != 0 {
                        LuaStyle::COMMENTDOC
                    } else {
                        LuaStyle::COMMENTLINE
                    });
                    if sc.matches("--[") {
                        sc.forward_n(2);
                        sep_count = long_delim_check(&mut sc);
                        if sep_count > 0 {
                            sc.change_state(LuaStyle::COMMENT);
                            sc.forward_n(sep_count as usize);
                        }
                    } else if sc.matches("---") {
                        sc.set_state(LuaStyle::COMMENTDOC);
                        last_line_doc_comment = MASK_DOC_COMMENT;
                    } else {
                        sc.forward();
                    }
                } else if sc.at_line_start() && sc.ch() == '$' {
                    // Obsolete since Lua 4.0.
                    sc.set_state(LuaStyle::PREPROCESSOR);
                } else if set_operator.contains(sc.ch()) {
                    sc.set_state(LuaStyle::OPERATOR);
                }
                if !matches!(sc.state(), LuaStyle::DEFAULT | LuaStyle::COMMENTDOC) {
                    last_line_doc_comment = 0;
                }
            }
            sc.forward();
        }
        sc.complete();
    }

    fn fold(&mut self, start: usize, length: usize, init_style: u8, doc: &mut dyn Document) {
        if !self.options.fold {
            return;
        }
        trace!(lexer = "lua", start, length, init_style, "fold");
        let mut styler = LexAccessor::new(doc);
        let end = start + length;
        let mut visible_chars = 0;
        let mut line = styler.get_line(start);
        let mut level_prev = styler.level_at(line) & FOLD_LEVEL_NUMBER_MASK;
        let mut level_current = level_prev;
        let mut ch_next = styler.safe_byte_at(start, b' ');
        let mut style = LuaStyle::from_style(init_style);
        let mut style_next = LuaStyle::from_style(styler.style_at(start));

        for i in start..end {
            let ch = ch_next;
            ch_next = styler.safe_byte_at(i + 1, b' ');
            let style_prev = style;
            style = style_next;
            style_next = LuaStyle::from_style(styler.style_at(i + 1));
            match style {
                LuaStyle::WORD if style != style_prev && b"idferu".contains(&ch) => {
                    let word: Vec<u8> = (i..i + 8)
                        .map(|j| styler.safe_byte_at(j, b' '))
                        .take_while(|&b| b.is_ascii_alphanumeric() || b == b'.' || b == b'_')
                        .collect();
                    match word.as_slice() {
                        b"if" | b"do" | b"function" | b"repeat" => level_current += 1,
                        b"end" | b"until" => level_current -= 1,
                        _ => {}
                    }
                }
                LuaStyle::OPERATOR => match ch {
                    b'{' | b'(' => level_current += 1,
                    b'}' | b')' => level_current -= 1,
                    _ => {}
                },
                LuaStyle::LITERALSTRING | LuaStyle::COMMENT => {
                    if style_prev != style {
                        level_current += 1;
                    } else if style_next != style {
                        level_current -= 1;
                    }
                }
                _ => {}
            }

            if !ch.is_ascii_whitespace() {
                visible_chars += 1;
            }
            if ch == b'\n' || (ch == b'\r' && ch_next != b'\n') {
                let level = line_level(level_prev, level_current, visible_chars, self.options.fold_compact);
                styler.set_level(line, level);
                line += 1;
                level_prev = level_current;
                visible_chars = 0;
            }
        }
        // The next line starts at the level reached; its flags are filled in when it is folded.
        let flags_next = styler.level_at(line) & !FOLD_LEVEL_NUMBER_MASK;
        styler.set_level(line, level_prev | flags_next);
    }

    fn named_styles(&self) -> usize {
        LuaStyle::ALL.len()
    }

    fn name_of_style(&self, style: u8) -> &'static str {
        LuaStyle::name_of_style(style)
    }
}

/// Lua 5.x source.
pub static LEXER_LUA: LexerModule =
    LexerModule::with_factory::<LuaStyle>(15, "lua", LexerLua::create, WORD_LIST_DESCRIPTIONS);
