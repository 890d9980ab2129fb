use editor_core_lexlib::{
    Catalogue, ConfigError, Document, FOLD_LEVEL_BASE, FOLD_LEVEL_HEADER_FLAG, LexAccessor,
    LexerConfig, LexerModule, StyleContext, TextDocument, WordList, lexer_styles,
};
use pretty_assertions::assert_eq;

lexer_styles! {
    pub enum DemoStyle {
        DEFAULT = 0,
        WORD = 1,
        IDENTIFIER = 2,
        NUMBER = 3,
    }
}

fn lex_demo(
    start: usize,
    length: usize,
    init_style: u8,
    keywords: &[WordList],
    styler: &mut LexAccessor<'_>,
) {
    let mut sc: StyleContext<'_, '_, DemoStyle> = StyleContext::new(start, length, init_style, styler);
    while sc.more() {
        match sc.state() {
            DemoStyle::IDENTIFIER if !sc.ch().is_ascii_alphanumeric() => {
                if keywords[0].in_list(&sc.get_current()) {
                    sc.change_state(DemoStyle::WORD);
                }
                sc.set_state(DemoStyle::DEFAULT);
            }
            DemoStyle::NUMBER if !sc.ch().is_ascii_digit() => sc.set_state(DemoStyle::DEFAULT),
            _ => {}
        }
        if sc.state() == DemoStyle::DEFAULT {
            if sc.ch().is_ascii_alphabetic() {
                sc.set_state(DemoStyle::IDENTIFIER);
            } else if sc.ch().is_ascii_digit() {
                sc.set_state(DemoStyle::NUMBER);
            }
        }
        sc.forward();
    }
    sc.complete();
}

fn fold_demo(start: usize, length: usize, _: u8, _: &[WordList], styler: &mut LexAccessor<'_>) {
    let first = styler.get_line(start);
    let last = styler.get_line(start + length);
    for line in first..=last {
        let level = if styler.safe_byte_at(styler.line_start(line), b' ') == b'{' {
            FOLD_LEVEL_BASE | FOLD_LEVEL_HEADER_FLAG
        } else {
            FOLD_LEVEL_BASE
        };
        styler.set_level(line, level);
    }
}

static DEMO: LexerModule =
    LexerModule::new::<DemoStyle>(900, "demo", lex_demo, Some(fold_demo), &["Keywords"]);

fn catalogue() -> Catalogue {
    let mut catalogue = Catalogue::new();
    catalogue.add(&DEMO);
    catalogue
}

#[test]
fn test_find_and_enumerate() {
    let catalogue = catalogue();
    assert_eq!(catalogue.count(), 1);
    assert_eq!(catalogue.name(0), Some("demo"));
    assert_eq!(catalogue.name(1), None);
    assert_eq!(catalogue.find("demo").map(LexerModule::id), Some(900));
    assert!(catalogue.find("cobol").is_none());
    assert!(catalogue.find_by_id(900).is_some());
    assert!(catalogue.find_by_id(1).is_none());
    assert!(catalogue.create_by_name("cobol").is_none());
    assert!(catalogue.create(3).is_none());
}

#[test]
fn test_instances_do_not_share_configuration() {
    let catalogue = catalogue();
    let mut with_keywords = catalogue.create(0).unwrap();
    let mut plain = catalogue.create_by_name("demo").unwrap();
    assert_eq!(with_keywords.word_list_set(0, "if"), Some(0));
    assert_eq!(with_keywords.word_list_set(0, "if"), None);
    assert_eq!(with_keywords.word_list_set(4, "if"), None);

    let mut doc = TextDocument::new("if x 12");
    with_keywords.lex(0, doc.len(), 0, &mut doc);
    assert_eq!(doc.styles(), &[1, 1, 0, 2, 0, 3, 3]);

    let mut doc = TextDocument::new("if x 12");
    plain.lex(0, doc.len(), 0, &mut doc);
    assert_eq!(doc.styles(), &[2, 2, 0, 2, 0, 3, 3]);
}

#[test]
fn test_style_metadata() {
    let lexer = catalogue().create(0).unwrap();
    assert_eq!(lexer.name(), "demo");
    assert_eq!(lexer.named_styles(), 4);
    assert_eq!(lexer.name_of_style(3), "NUMBER");
    assert_eq!(lexer.name_of_style(40), "");
    assert_eq!(lexer.describe_word_list_sets(), &["Keywords"]);
    assert!(lexer.sub_style_bases().is_empty());
}

#[test]
fn test_fold_requires_fold_property() {
    let mut lexer = catalogue().create(0).unwrap();
    let mut doc = TextDocument::new("{\nx\n");
    lexer.fold(0, doc.len(), 0, &mut doc);
    assert_eq!(doc.level(0), FOLD_LEVEL_BASE);

    assert_eq!(lexer.property_set("fold", "1"), Some(0));
    assert_eq!(lexer.property_set("fold", "1"), None);
    assert_eq!(lexer.property_get("fold").as_deref(), Some("1"));
    lexer.fold(0, doc.len(), 0, &mut doc);
    assert_eq!(doc.level(0), FOLD_LEVEL_BASE | FOLD_LEVEL_HEADER_FLAG);
    assert_eq!(doc.level(1), FOLD_LEVEL_BASE);
}

#[test]
fn test_configure_from_yaml() {
    let catalogue = catalogue();
    let config = LexerConfig::from_yaml(
        "language: demo\nproperties:\n  fold: true\nkeywords:\n  - \"if else\"\n",
    )
    .unwrap();
    let mut lexer = catalogue.configure(&config).unwrap();
    assert_eq!(lexer.property_get("fold").as_deref(), Some("1"));

    let mut doc = TextDocument::new("else");
    lexer.lex(0, doc.len(), 0, &mut doc);
    assert_eq!(doc.styles(), &[1, 1, 1, 1]);
}

#[test]
fn test_configure_errors() {
    let catalogue = catalogue();

    let config = LexerConfig::from_yaml("language: cobol\n").unwrap();
    assert!(matches!(
        catalogue.configure(&config),
        Err(ConfigError::UnknownLanguage(name)) if name == "cobol"
    ));

    let config = LexerConfig::from_yaml("language: demo\nkeywords: [a, b]\n").unwrap();
    assert!(matches!(
        catalogue.configure(&config),
        Err(ConfigError::WordListOutOfRange { index: 1, count: 1, .. })
    ));

    let config =
        LexerConfig::from_yaml("language: demo\nsubstyles:\n  - base: 2\n    identifiers: [x]\n")
            .unwrap();
    assert!(matches!(
        catalogue.configure(&config),
        Err(ConfigError::SubStylesUnsupported(_))
    ));
}
