use editor_core_lexlib::{Document, Lexer, TextDocument};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_catalogue_lookups() {
    let catalogue = editor_core_lexers::catalogue();
    assert_eq!(catalogue.count(), 11);
    assert_eq!(catalogue.name(0), Some("null"));
    assert_eq!(catalogue.find_by_id(3).map(|m| m.name()), Some("cpp"));
    assert_eq!(catalogue.find("toml").map(|m| m.id()), Some(133));
    assert!(catalogue.find("cobol").is_none());

    for module in catalogue.modules() {
        let lexer = module.create();
        assert_eq!(lexer.name(), module.name());
        assert_eq!(lexer.id(), module.id());
        assert_eq!(lexer.name_of_style(0), "DEFAULT", "{}", module.name());
        assert!(lexer.named_styles() >= 1);
        assert_eq!(
            lexer.describe_word_list_sets().len(),
            module.word_list_descriptions().len()
        );
    }
}

#[test]
fn test_instances_are_configured_independently() {
    let catalogue = editor_core_lexers::catalogue();
    let mut a = catalogue.create_by_name("cpp").unwrap();
    let b = catalogue.create_by_name("cpp").unwrap();
    assert_eq!(a.property_set("fold", "1"), Some(0));
    assert_eq!(a.property_set("fold", "1"), None);
    assert_eq!(a.property_get("fold").as_deref(), Some("1"));
    assert_eq!(b.property_get("fold"), None);
}

#[test]
fn test_python_restart_inside_triple_quoted_string() {
    let text = "x = '''a\nb\n'''\ny = 1\n";
    let mut lexer = editor_core_lexers::catalogue().create_by_name("python").unwrap();
    let mut doc = TextDocument::new(text);
    lexer.lex(0, doc.len(), 0, &mut doc);
    let whole = doc.styles().to_vec();

    let start = doc.line_start(2);
    lexer.lex(start, doc.len() - start, whole[start - 1], &mut doc);
    assert_eq!(doc.styles(), &whole[..]);
}

fn configured(name: &str, keywords: &[&str], props: &[(&str, &str)]) -> Box<dyn Lexer> {
    let mut lexer = editor_core_lexers::catalogue().create_by_name(name).unwrap();
    for (index, words) in keywords.iter().enumerate() {
        lexer.word_list_set(index, words);
    }
    for (key, val) in props {
        lexer.property_set(key, val);
    }
    lexer
}

/// Lex `text` in one pass, then again from the start of `line` on the same document with a new
/// instance, carrying the style before that line in. Both passes must agree.
fn relex_matches(
    name: &str,
    keywords: &[&str],
    props: &[(&str, &str)],
    text: &str,
    line: usize,
) -> Result<(), TestCaseError> {
    let mut doc = TextDocument::new(text);
    configured(name, keywords, props).lex(0, doc.len(), 0, &mut doc);
    let whole = doc.styles().to_vec();

    let line = line % doc.line_count();
    let start = doc.line_start(line);
    let init_style = if start > 0 { whole[start - 1] } else { 0 };
    configured(name, keywords, props).lex(start, doc.len() - start, init_style, &mut doc);
    prop_assert_eq!(doc.styles(), &whole[..], "{} restart at line {}", name, line);
    Ok(())
}

/// Lex and fold `text`, then lex and fold again from the start of `line`. Fold levels must not
/// depend on where folding started.
fn refold_matches(name: &str, keywords: &[&str], text: &str, line: usize) -> Result<(), TestCaseError> {
    let props = [("fold", "1")];
    let mut doc = TextDocument::new(text);
    let mut lexer = configured(name, keywords, &props);
    lexer.lex(0, doc.len(), 0, &mut doc);
    lexer.fold(0, doc.len(), 0, &mut doc);
    let whole = doc.levels().to_vec();

    let line = line % doc.line_count();
    let start = doc.line_start(line);
    let init_style = if start > 0 { doc.styles()[start - 1] } else { 0 };
    let mut lexer = configured(name, keywords, &props);
    lexer.lex(start, doc.len() - start, init_style, &mut doc);
    lexer.fold(start, doc.len() - start, init_style, &mut doc);
    prop_assert_eq!(doc.levels(), &whole[..], "{} refold at line {}", name, line);
    Ok(())
}

fn assert_relex_from_second_line(name: &str, text: &str) {
    relex_matches(name, &[], &[], text, 1).unwrap();
}

#[test]
fn test_lua_identifier_after_wide_character() {
    assert_relex_from_second_line("lua", "中\n[\nA\n");
}

#[test]
fn test_cpp_slash_after_string_is_not_regex() {
    assert_relex_from_second_line("cpp", "\":\n/\rA\n");
}

#[test]
fn test_cpp_regex_after_continued_operator_line() {
    assert_relex_from_second_line("cpp", "%\\\n\r/\r");
}

#[test]
fn test_json_sign_at_line_start() {
    assert_relex_from_second_line("json", "\n+0");
}

#[test]
fn test_json_string_ends_at_backslash_before_line_end() {
    assert_relex_from_second_line("json", "\"a:\\\nb\"");
}

#[test]
fn test_python_keyword_context_ends_with_line() {
    let keywords = ["def class import as"];
    relex_matches("python", &keywords, &[], "def\nf\nx\n", 2).unwrap();
}

#[test]
fn test_option_set_properties_are_described() {
    let catalogue = editor_core_lexers::catalogue();
    for module in catalogue.modules() {
        let lexer = module.create();
        for &name in lexer.property_names() {
            assert!(!lexer.describe_property(name).is_empty(), "{}: {name}", module.name());
        }
    }
}

const LINE_LEXERS: [&str; 5] = ["null", "props", "makefile", "diff", "batch"];

const FOLDING_LEXERS: [&str; 5] = ["batch", "diff", "json", "toml", "yaml"];

proptest! {
    #[test]
    fn prop_line_lexers_restart_at_any_line(
        text in "[a-z0-9 #=:@!;%$()^\"'<>|&+\\-\\[\\]\n]{0,120}",
        line in 0usize..16,
    ) {
        for name in LINE_LEXERS {
            relex_matches(name, &[], &[], &text, line)?;
        }
    }

    #[test]
    fn prop_lua_restart_at_any_line(
        text in "[a-z0-9 =.,:'\"\\-\\[\\](){}\\\\\r\né中]{0,160}",
        line in 0usize..16,
    ) {
        relex_matches("lua", &[], &[], &text, line)?;
    }

    #[test]
    fn prop_cpp_restart_at_any_line(
        text in "[a-zR0-9 \"'#@(){};=,.<>/*%\\\\\r\né]{0,160}",
        line in 0usize..16,
    ) {
        relex_matches("cpp", &[], &[], &text, line)?;
    }

    #[test]
    fn prop_python_restart_at_any_line(
        text in "[a-z0-9 #'\"\\\\.(){}=:@\r\né中]{0,160}",
        line in 0usize..16,
    ) {
        relex_matches("python", &["def class import as if"], &[], &text, line)?;
    }

    #[test]
    fn prop_json_restart_at_any_line(
        text in "[a-z0-9 {}\\[\\]:,\"+\\-./*@\\\\\r\né]{0,160}",
        line in 0usize..16,
    ) {
        relex_matches("json", &["true false null"], &[("lexer.json.allow.comments", "1")], &text, line)?;
    }

    #[test]
    fn prop_toml_restart_at_any_line(
        text in "[a-z0-9 #=.,'\"\\\\\\[\\]{}+\\-:\r\né]{0,160}",
        line in 0usize..16,
    ) {
        relex_matches("toml", &["true false"], &[], &text, line)?;
    }

    #[test]
    fn prop_yaml_restart_at_any_line(
        text in "[a-z0-9 #:|>&*'\"\\-.\t\r\né]{0,160}",
        line in 0usize..16,
    ) {
        relex_matches("yaml", &["true false"], &[], &text, line)?;
    }

    #[test]
    fn prop_folds_restart_at_any_line(
        text in "[a-z0-9 #:()@{}\\[\\]\"=,.+\\-\t\r\n]{0,160}",
        line in 0usize..16,
    ) {
        for name in FOLDING_LEXERS {
            refold_matches(name, &[], &text, line)?;
        }
    }

    #[test]
    fn prop_lua_fold_restarts_at_any_line(
        text in "(function|end|if|then|do|repeat|until|x|\\{|\\}|\\(|\\)|--|\\[\\[|\\]\\]| |\r|\n){0,40}",
        line in 0usize..16,
    ) {
        refold_matches("lua", &["function end if then do repeat until"], &text, line)?;
    }
}
