use proptest::prelude::*;
use themescope_pipeline::PhraseFrequency;

proptest! {
    #[test]
    fn top_is_sorted_and_conserves_total(phrases in proptest::collection::vec("[a-d]", 0..40)) {
        let mut freq = PhraseFrequency::new();
        freq.add_all(&phrases);

        prop_assert_eq!(freq.total(), phrases.len());
        let all = freq.top(usize::MAX);
        prop_assert_eq!(all.iter().map(|(_, c)| c).sum::<usize>(), phrases.len());
        for pair in all.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
            if pair[0].1 == pair[1].1 {
                let first = |p: &str| phrases.iter().position(|x| x == p).unwrap();
                prop_assert!(first(&pair[0].0) < first(&pair[1].0));
            }
        }
    }
}
