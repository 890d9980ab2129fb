use editor_core_lexlib::{
    Document, FOLD_LEVEL_HEADER_FLAG, FOLD_LEVEL_NUMBER_MASK,
    FOLD_LEVEL_WHITE_FLAG, Lexer, LexerConfig, TextDocument,
};
use pretty_assertions::assert_eq;

fn lexer(name: &str, keywords: &[&str], props: &[(&str, &str)]) -> Box<dyn Lexer> {
    let mut lexer = editor_core_lexers::catalogue()
        .create_by_name(name)
        .unwrap();
    for (index, words) in keywords.iter().enumerate() {
        lexer.word_list_set(index, words);
    }
    for (key, val) in props {
        lexer.property_set(key, val);
    }
    lexer
}

fn lex_with(name: &str, keywords: &[&str], props: &[(&str, &str)], text: &str) -> TextDocument {
    let mut lexer = lexer(name, keywords, props);
    let mut doc = TextDocument::new(text);
    lexer.lex(0, doc.len(), 0, &mut doc);
    lexer.fold(0, doc.len(), 0, &mut doc);
    doc
}

/// Consecutive runs of equal style, as `(text, style)`.
fn runs(doc: &TextDocument) -> Vec<(String, u8)> {
    let text = doc.text();
    let mut runs: Vec<(String, u8)> = Vec::new();
    for (i, &style) in doc.styles().iter().enumerate() {
        let ch = &text[i..i + 1];
        match runs.last_mut() {
            Some((run, last)) if *last == style => run.push_str(ch),
            _ => runs.push((ch.to_string(), style)),
        }
    }
    runs
}

fn expected(runs: &[(&str, u8)]) -> Vec<(String, u8)> {
    runs.iter().map(|&(text, style)| (text.to_string(), style)).collect()
}

#[test]
fn test_cpp_tokens_and_task_marker() {
    let doc = lex_with(
        "cpp",
        &["int", "", "", "", "", "TODO"],
        &[],
        "int x = 0x1F; // TODO fix\n",
    );
    assert_eq!(
        runs(&doc),
        expected(&[
            ("int", 5),
            (" ", 0),
            ("x", 11),
            (" ", 0),
            ("=", 10),
            (" ", 0),
            ("0x1F", 4),
            (";", 10),
            (" ", 0),
            ("// ", 2),
            ("TODO", 26),
            (" fix\n", 2),
        ])
    );
}

#[test]
fn test_cpp_raw_string_spans_lines() {
    let text = "auto s = R\"x(a\n)x\";\n";
    let mut lexer = lexer("cpp", &[], &[]);
    let mut doc = TextDocument::new(text);
    lexer.lex(0, doc.len(), 0, &mut doc);
    let whole = runs(&doc);
    assert_eq!(
        whole,
        expected(&[
            ("auto", 11),
            (" ", 0),
            ("s", 11),
            (" ", 0),
            ("=", 10),
            (" ", 0),
            ("R\"x(a\n)x\"", 20),
            (";", 10),
            ("\n", 0),
        ])
    );

    // Restart on the second line: the terminator is remembered from the first pass.
    let start = doc.line_start(1);
    let init_style = doc.styles()[start - 1];
    lexer.lex(start, doc.len() - start, init_style, &mut doc);
    assert_eq!(runs(&doc), whole);
}

#[test]
fn test_cpp_brace_folding() {
    let doc = lex_with("cpp", &["int return"], &[("fold", "1")], "int f() {\n  return 1;\n}\n");
    let levels: Vec<i32> = doc.levels().iter().map(|l| l & FOLD_LEVEL_NUMBER_MASK).collect();
    assert_eq!(levels, vec![0x400, 0x401, 0x401, 0x400]);
    assert_ne!(doc.levels()[0] & FOLD_LEVEL_HEADER_FLAG, 0);
    assert_eq!(doc.levels()[1] & FOLD_LEVEL_HEADER_FLAG, 0);
    assert_ne!(doc.levels()[3] & FOLD_LEVEL_WHITE_FLAG, 0);
}

#[test]
fn test_cpp_identifier_sub_styles_from_config() {
    let config = LexerConfig::from_yaml(
        "language: cpp\nkeywords:\n  - int\nsubstyles:\n  - base: 11\n    identifiers: [\"vector map\"]\n",
    )
    .unwrap();
    let mut lexer = editor_core_lexers::catalogue().configure(&config).unwrap();
    assert_eq!(lexer.sub_styles_start(11), Some(0x80));
    assert_eq!(lexer.style_from_sub_style(0x80), 11);
    assert!(lexer.named_styles() > 0x80);

    let mut doc = TextDocument::new("map m;");
    lexer.lex(0, doc.len(), 0, &mut doc);
    assert_eq!(
        runs(&doc),
        expected(&[("map", 0x80), (" ", 0), ("m", 11), (";", 10)])
    );
}

#[test]
fn test_python_tokens() {
    let doc = lex_with("python", &["def return"], &[], "def f(x):\n    return x\n");
    assert_eq!(
        runs(&doc),
        expected(&[
            ("def", 5),
            (" ", 0),
            ("f", 9),
            ("(", 10),
            ("x", 11),
            ("):", 10),
            ("\n    ", 0),
            ("return", 5),
            (" ", 0),
            ("x", 11),
            ("\n", 0),
        ])
    );
}

#[test]
fn test_python_indent_folding() {
    let doc = lex_with("python", &[], &[("fold", "1")], "if a:\n    b\nc\n");
    assert_ne!(doc.levels()[0] & FOLD_LEVEL_HEADER_FLAG, 0);
    assert_eq!(doc.levels()[1] & FOLD_LEVEL_HEADER_FLAG, 0);
}

#[test]
fn test_lua_long_brackets() {
    let doc = lex_with("lua", &["local"], &[], "local x = [==[\nhi\n]==] --[[ c\n]] y\n");
    let styles = doc.styles();
    assert_eq!(styles[0], 5);
    assert_eq!(styles[6], 11);
    assert_eq!(styles[10], 8);
    assert_eq!(styles[15], 8);
    assert_eq!(styles[21], 8);
    assert_eq!(styles[22], 0);
    assert_eq!(styles[23], 1);
    assert_eq!(styles[28], 1);
    assert_eq!(styles[31], 1);
    assert_eq!(styles[33], 11);
    assert_ne!(doc.line_states()[0], 0);
}

#[test]
fn test_json_property_names_and_keywords() {
    let doc = lex_with("json", &["true false null"], &[], "{\"a\": [1, true]}");
    assert_eq!(
        runs(&doc),
        expected(&[
            ("{", 8),
            ("\"a\"", 4),
            (":", 8),
            (" ", 0),
            ("[", 8),
            ("1", 1),
            (",", 8),
            (" ", 0),
            ("true", 11),
            ("]}", 8),
        ])
    );

    let doc = lex_with("json", &[], &[], "[\"x\"]");
    assert_eq!(runs(&doc), expected(&[("[", 8), ("\"x\"", 2), ("]", 8)]));
}

#[test]
fn test_toml_table_key_and_value() {
    let doc = lex_with("toml", &[], &[], "[a]\nk = \"v\" # c\n");
    assert_eq!(
        runs(&doc),
        expected(&[
            ("[a]\n", 5),
            ("k", 6),
            (" ", 0),
            ("=", 8),
            (" ", 0),
            ("\"v\"", 10),
            (" ", 0),
            ("# c\n", 1),
        ])
    );
}

#[test]
fn test_yaml_values_and_text_blocks() {
    let doc = lex_with("yaml", &["true false"], &[], "a: 1 # n\nb: |\n  text\nc: true\n");
    assert_eq!(
        runs(&doc),
        expected(&[
            ("a", 2),
            (":", 9),
            (" 1 ", 4),
            ("# n\n", 1),
            ("b", 2),
            (":", 9),
            (" |\n", 0),
            ("  text\n", 7),
            ("c", 2),
            (":", 9),
            (" true\n", 3),
        ])
    );
    assert_eq!(&doc.line_states()[..4], &[2 << 16, 4 << 16, 5 << 16, 2 << 16]);
}

#[test]
fn test_batch_parenthesis_folding() {
    let doc = lex_with("batch", &[], &[("fold", "1")], "if x (\n  echo a\n)\n");
    assert_eq!(doc.levels(), &[0x2400, 0x401, 0x401, 0x400]);
}

#[test]
fn test_diff_header_folding() {
    let doc = lex_with(
        "diff",
        &[],
        &[("fold", "1")],
        "diff a b\n--- a\n+++ b\n@@ -1 +1 @@\n-x\n+y\n",
    );
    // The `+++` line takes over the header from `---`.
    assert_eq!(doc.levels(), &[0x2400, 0x401, 0x2401, 0x2402, 0x403, 0x403, 0x400]);
}

#[test]
fn test_lua_keyword_folding() {
    let doc = lex_with(
        "lua",
        &["function end if then"],
        &[("fold", "1")],
        "function f()\n  if x then\n  end\nend\n",
    );
    assert_eq!(doc.levels(), &[0x2400, 0x2401, 0x402, 0x401, 0x400]);
}

#[test]
fn test_json_bracket_folding() {
    let doc = lex_with("json", &[], &[("fold", "1")], "{\n  \"a\": [\n    1\n  ]\n}\n");
    let current: Vec<i32> = doc.levels().iter().map(|l| l & 0xFFFF).collect();
    let next: Vec<i32> = doc.levels().iter().map(|l| l >> 16).collect();
    assert_eq!(current, vec![0x2400, 0x2401, 0x402, 0x402, 0x401, 0x400]);
    assert_eq!(next, vec![0x401, 0x402, 0x402, 0x401, 0x400, 0]);
}

#[test]
fn test_toml_table_folding() {
    let doc = lex_with("toml", &[], &[("fold", "1")], "# c\n[a]\nx = 1\n[a.b]\ny = 2\n");
    // The comment joins the header of the table below it.
    assert_eq!(doc.levels(), &[0x400, 0x2400, 0x401, 0x2401, 0x402, 0x402]);
}

#[test]
fn test_yaml_indent_folding() {
    let doc = lex_with("yaml", &[], &[("fold", "1")], "a:\n  b: 1\n\n  c:\n    d: 2\ne: 3\n");
    assert_eq!(
        doc.levels(),
        &[
            0x2400,
            0x402,
            FOLD_LEVEL_WHITE_FLAG | 0x402,
            0x2402,
            0x404,
            0x400,
            0x400
        ]
    );
}
