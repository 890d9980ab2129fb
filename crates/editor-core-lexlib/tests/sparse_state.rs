use editor_core_lexlib::SparseState;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_value_at_follows_breakpoints(
        steps in prop::collection::vec((1usize..20, 0i32..4), 0..30),
        probe in 0usize..700,
    ) {
        let mut ss = SparseState::new(0);
        let mut breakpoints = Vec::new();
        let mut pos = 0;
        for (gap, value) in steps {
            pos += gap;
            ss.set(pos, value);
            breakpoints.push((pos, value));
        }

        let expected = breakpoints
            .iter()
            .rev()
            .find(|(p, _)| *p <= probe)
            .map_or(0, |(_, v)| *v);
        prop_assert_eq!(ss.value_at(probe), expected);

        let stored: Vec<i32> = ss.iter().map(|(_, v)| *v).collect();
        prop_assert!(stored.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_merge_of_own_suffix_is_no_change(
        values in prop::collection::vec(0i32..3, 1..20),
        split in 0usize..20,
    ) {
        let mut ss = SparseState::new(0);
        for (i, v) in values.iter().enumerate() {
            ss.set(i * 2, *v);
        }
        let mut suffix = SparseState::new(split);
        for (p, v) in ss.iter().filter(|(p, _)| *p >= split) {
            suffix.set(p, *v);
        }
        let before = ss.clone();
        let last = values.len() * 2;
        prop_assert!(!ss.merge(&suffix, last));
        prop_assert_eq!(ss, before);
    }
}

#[test]
fn test_raw_string_terminators_by_line() {
    let mut terminators: SparseState<String> = SparseState::new(0);
    terminators.set(3, ")xy\"".to_string());
    terminators.set(6, String::new());
    assert_eq!(terminators.value_at(2), "");
    assert_eq!(terminators.value_at(4), ")xy\"");
    assert_eq!(terminators.value_at(6), "");

    let mut relexed = SparseState::new(5);
    relexed.set(5, String::new());
    assert!(terminators.merge(&relexed, 8));
    assert_eq!(terminators.value_at(4), ")xy\"");
    assert_eq!(terminators.value_at(5), "");
}
