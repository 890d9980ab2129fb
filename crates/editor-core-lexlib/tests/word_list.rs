use editor_core_lexlib::WordList;
use proptest::prelude::*;

#[test]
fn test_set_reports_changes_only_for_new_words() {
    let mut wl = WordList::new();
    assert!(wl.set("else struct", false));
    assert!(!wl.set("struct else", false));
    assert!(wl.set("struct", false));
    assert!(!wl.set("struct struct", false));
}

#[test]
fn test_abbreviated_marker() {
    let mut wl = WordList::new();
    wl.set("stru~ct", false);
    for accepted in ["stru", "struc", "struct"] {
        assert!(wl.in_list_abbreviated(accepted, b'~'), "{accepted}");
    }
    assert!(!wl.in_list_abbreviated("str", b'~'));
}

proptest! {
    #[test]
    fn test_set_is_order_insensitive(words in prop::collection::vec("[a-z]{1,6}", 0..12)) {
        let mut forward = WordList::new();
        forward.set(&words.join(" "), false);
        let mut reversed: Vec<String> = words.clone();
        reversed.reverse();
        prop_assert!(!forward.set(&reversed.join("\n"), false));
        for word in &words {
            prop_assert!(forward.in_list(word));
        }
    }
}
