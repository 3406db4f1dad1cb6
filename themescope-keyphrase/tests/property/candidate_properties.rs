use proptest::prelude::*;
use themescope_keyphrase::candidates::candidate_phrases;
use themescope_keyphrase::stopwords::is_stop_word;
use themescope_keyphrase::CandidateSettings;

proptest! {
    #[test]
    fn candidates_respect_length_cap_and_uniqueness(
        words in proptest::collection::vec("[a-z]{1,8}", 0..60),
        max_candidates in 1usize..50,
    ) {
        let text = words.join(" ");
        let settings = CandidateSettings { max_candidates, ..CandidateSettings::default() };
        let out = candidate_phrases(&text, &settings);

        prop_assert!(out.len() <= max_candidates);
        let mut seen = std::collections::HashSet::new();
        for phrase in &out {
            prop_assert!(seen.insert(phrase.clone()));
            let tokens: Vec<&str> = phrase.split(' ').collect();
            prop_assert!((1..=3).contains(&tokens.len()));
            prop_assert!(tokens.iter().all(|t| t.len() >= 2 && !is_stop_word(t)));
        }
    }
}
