use proptest::prelude::*;

use super::*;

fn store(words: &[(&str, &str)]) -> PronunciationStore {
    words.iter().copied().collect()
}

#[test]
fn splits_on_spaces() {
    let s = store(&[("ca", "/sa/"), ("va", "/va/")]);
    assert_eq!(tokenize(&s, "ca va"), vec!["ca", " ", "va"]);
}

#[test]
fn prefers_longest_match() {
    let s = store(&[("bon", "/bɔ̃/"), ("bonjour", "/bɔ̃.ʒuʁ/"), ("jour", "/ʒuʁ/")]);
    assert_eq!(tokenize(&s, "bonjour"), vec!["bonjour"]);
    assert_eq!(tokenize(&s, "bonjours"), vec!["bonjour", "s"]);
    assert_eq!(tokenize(&s, "bonbon"), vec!["bon", "bon"]);
}

#[test]
fn greedy_is_not_optimal() {
    // "abc" then "d" is chosen even though "ab" + "cd" would cover everything
    let s = store(&[("ab", "1"), ("abc", "2"), ("cd", "3")]);
    assert_eq!(tokenize(&s, "abcd"), vec!["abc", "d"]);
}

#[test]
fn unmatched_falls_back_to_chars() {
    let s = store(&[("ca", "/sa/")]);
    assert_eq!(tokenize(&s, "xyz"), vec!["x", "y", "z"]);
    assert_eq!(tokenize(&PronunciationStore::new(), "ab"), vec!["a", "b"]);
}

#[test]
fn normalizes_before_matching() {
    let s = store(&[("hello", "/hə.ˈloʊ/")]);
    assert_eq!(tokenize(&s, "  Hello!\t"), vec!["hello"]);
}

#[test]
fn empty_input() {
    let s = store(&[("a", "/a/")]);
    assert!(tokenize(&s, "").is_empty());
    assert!(tokenize(&s, " ?! ").is_empty());
}

#[test]
fn multibyte_words() {
    let s = store(&[("你好", "/ni˨˩˦ xɑʊ̯˨˩˦/"), ("ça", "/sa/")]);
    assert_eq!(tokenize(&s, "你好吗"), vec!["你好", "吗"]);
    assert_eq!(tokenize(&s, "Ça"), vec!["ça"]);
}

#[test]
fn inner_space_runs_become_separate_tokens() {
    let s = store(&[("a", "/a/")]);
    assert_eq!(tokenize(&s, "a  a"), vec!["a", " ", " ", "a"]);
}

fn arb_store() -> impl Strategy<Value = PronunciationStore> {
    prop::collection::vec("[abc]{1,4}", 0..8)
        .prop_map(|words| {
            words
                .into_iter()
                .map(|w| (w, "/x/".to_string()))
                .collect::<PronunciationStore>()
        })
}

proptest! {
    #[test]
    fn tokens_partition_normalized_input(s in arb_store(), input in "[abcABC .!\\t]{0,24}") {
        let tokens = tokenize(&s, &input);
        prop_assert_eq!(tokens.concat(), normalize(&input));
        prop_assert!(tokens.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn no_longer_key_at_any_position(s in arb_store(), input in "[abc ]{0,24}") {
        let text = normalize(&input);
        let tokens = tokenize(&s, &input);
        let mut offset = 0;
        for token in &tokens {
            let rest = &text[offset..];
            for (end, _) in rest.char_indices().skip(1).chain(std::iter::once((rest.len(), ' '))) {
                if end > token.len() {
                    prop_assert!(!s.contains(&rest[..end]), "{:?} beats {:?}", &rest[..end], token);
                }
            }
            offset += token.len();
        }
    }
}
