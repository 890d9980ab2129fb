use editor_core_lexlib::accessor::BUFFER_SIZE;
use editor_core_lexlib::{LexAccessor, TextDocument};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_refill_is_transparent(seed in "[ -~\n]{1,64}", p in 0usize..BUFFER_SIZE) {
        let text = seed.repeat(3 * BUFFER_SIZE / seed.len() + 1);
        let mut doc = TextDocument::new(&text);
        let mut styler = LexAccessor::new(&mut doc);
        let first = styler.safe_byte_at(p, 0);
        let far = styler.safe_byte_at(p + 2 * BUFFER_SIZE, 0);
        prop_assert_eq!(far, text.as_bytes()[p + 2 * BUFFER_SIZE]);
        prop_assert_eq!(styler.safe_byte_at(p, 0), first);
        prop_assert_eq!(first, text.as_bytes()[p]);
    }
}

#[test]
fn test_out_of_range_reads_default() {
    let mut doc = TextDocument::new("abc");
    let mut styler = LexAccessor::new(&mut doc);
    assert_eq!(styler.safe_byte_at(3, b'!'), b'!');
    assert_eq!(styler.char_at(-1), '\0');
    assert_eq!(styler.get_line_state(99), 0);
    assert_eq!(styler.get_property_int("fold", 7), 7);
}

#[test]
fn test_long_runs_bypass_the_style_buffer() {
    let text = "x".repeat(2 * BUFFER_SIZE + 10);
    let mut doc = TextDocument::new(&text);
    {
        let mut styler = LexAccessor::new(&mut doc);
        styler.start_at(0);
        styler.start_segment(0);
        styler.colour_to(4, 1);
        styler.colour_to(text.len() - 1, 2);
    }
    assert_eq!(doc.styles()[..5], [1; 5]);
    assert!(doc.styles()[5..].iter().all(|&s| s == 2));
}
