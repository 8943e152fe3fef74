//! End-to-end correction scenarios over an embedded reference corpus.

use std::collections::HashSet;

use orthos::analysis::tokenizer::WordTokenizer;
use orthos::error::Result;
use orthos::spelling::corrector::{Corrector, CorrectorConfig};
use orthos::spelling::edits::EditGenerator;
use orthos::spelling::frequency::FrequencyTable;

/// A small reference vocabulary with frequencies shaped so each scenario has
/// a single best correction.
fn reference_table() -> FrequencyTable {
    FrequencyTable::from_counts([
        ("the".to_string(), 80),
        ("of".to_string(), 40),
        ("and".to_string(), 38),
        ("a".to_string(), 21),
        ("word".to_string(), 10),
        ("is".to_string(), 8),
        ("this".to_string(), 7),
        ("poetry".to_string(), 6),
        ("spelling".to_string(), 5),
        ("corrected".to_string(), 4),
        ("test".to_string(), 4),
        ("arranged".to_string(), 3),
        ("bicycle".to_string(), 3),
        ("inconvenient".to_string(), 2),
    ])
}

#[test]
fn test_scenario_corrections() -> Result<()> {
    let corrector = Corrector::new(reference_table());

    assert_eq!(corrector.correct("speling")?, "spelling"); // one insertion
    assert_eq!(corrector.correct("korrectud")?, "corrected"); // two replacements
    assert_eq!(corrector.correct("bycycle")?, "bicycle"); // one replacement
    assert_eq!(corrector.correct("inconvient")?, "inconvenient"); // two insertions
    assert_eq!(corrector.correct("arrainged")?, "arranged"); // one deletion
    assert_eq!(corrector.correct("peotry")?, "poetry"); // one transposition
    assert_eq!(corrector.correct("peotryy")?, "poetry"); // transposition + deletion

    Ok(())
}

#[test]
fn test_known_words_are_fixed_points() -> Result<()> {
    let table = reference_table();
    let words: Vec<String> = table.words().map(|(word, _)| word.to_string()).collect();
    let corrector = Corrector::new(table);

    for word in &words {
        assert_eq!(&corrector.correct(word)?, word);
        // correct(correct(w)) == correct(w) for table words
        assert_eq!(&corrector.correct(&corrector.correct(word)?)?, word);
    }

    Ok(())
}

#[test]
fn test_unknown_word_far_from_vocabulary() -> Result<()> {
    let corrector = Corrector::new(reference_table());
    assert_eq!(corrector.correct("quintessential")?, "quintessential");
    Ok(())
}

#[test]
fn test_probability_axioms() {
    let table = reference_table();

    let sum: f64 = table.words().map(|(word, _)| table.probability(word)).sum();
    assert!((sum - 1.0).abs() < 1e-9);

    for (word, _) in table.words() {
        assert!(table.probability(word) > 0.0);
    }
    assert_eq!(table.probability("quintessential"), 0.0);
}

#[test]
fn test_corpus_built_corrector() -> Result<()> {
    let corpus = "Poetry, poetry and more POETRY. \
                  Spelling is spelling. The word was arranged and corrected.";
    let table = FrequencyTable::from_corpus(corpus);
    assert_eq!(table.frequency("poetry"), 3);

    let corrector = Corrector::new(table);
    assert_eq!(corrector.correct("peotry")?, "poetry");
    assert_eq!(corrector.correct("speling")?, "spelling");
    Ok(())
}

#[test]
fn test_tokenizer_matches_corpus_semantics() {
    let tokenizer = WordTokenizer::default();
    assert_eq!(
        tokenizer.tokenize("This is a TEST."),
        vec!["this", "is", "a", "test"]
    );
}

#[test]
fn test_edits1_never_requires_the_word_itself() {
    let edits = EditGenerator::new();
    let table = reference_table();

    // Every candidate the cascade returns for a misspelling differs from it
    let corrector = Corrector::new(table);
    let candidates = corrector.candidates("speling");
    assert!(!candidates.contains("speling"));
    assert_eq!(candidates, HashSet::from(["spelling".to_string()]));

    // edits1 may reproduce the word through a same-letter replacement
    assert!(edits.edits1("word").contains("word"));
}

#[test]
fn test_empty_and_single_letter_inputs() -> Result<()> {
    let corrector = Corrector::new(reference_table());

    // Must not panic; "a" is in the table so it is a fixed point
    corrector.correct("")?;
    assert_eq!(corrector.correct("a")?, "a");

    let edits = EditGenerator::new();
    assert_eq!(edits.edits1("a").len(), 78);
    assert!(edits.transposes("a").is_empty());
    Ok(())
}

#[test]
fn test_length_guard_rejects_pathological_input() {
    let config = CorrectorConfig {
        max_word_len: Some(32),
        ..Default::default()
    };
    let corrector = Corrector::with_config(reference_table(), config);

    let pathological = "x".repeat(100);
    assert!(corrector.correct(&pathological).is_err());
    assert!(corrector.correct("speling").is_ok());
}

#[test]
fn test_batch_matches_sequential() -> Result<()> {
    let corrector = Corrector::new(reference_table());
    let words: Vec<String> = ["speling", "korrectud", "bycycle", "word", "peotry"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    let batch = corrector.correct_batch(&words)?;
    for (word, corrected) in words.iter().zip(&batch) {
        assert_eq!(corrected, &corrector.correct(word)?);
    }
    Ok(())
}

#[test]
fn test_config_serialization_round_trip() {
    let config = CorrectorConfig {
        alphabet: "abc".to_string(),
        max_word_len: Some(16),
    };

    let json = serde_json::to_string(&config).unwrap();
    let restored: CorrectorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.alphabet, "abc");
    assert_eq!(restored.max_word_len, Some(16));
}

#[test]
fn test_suggestions_serialize() -> Result<()> {
    let corrector = Corrector::new(reference_table());
    let suggestions = corrector.suggest("speling", 3)?;

    let json = serde_json::to_string(&suggestions).unwrap();
    assert!(json.contains("spelling"));
    Ok(())
}

#[test]
fn test_shared_table_across_threads() -> Result<()> {
    let corrector = std::sync::Arc::new(Corrector::new(reference_table()));

    let handles: Vec<_> = ["speling", "peotry", "bycycle"]
        .iter()
        .map(|&word| {
            let corrector = std::sync::Arc::clone(&corrector);
            std::thread::spawn(move || corrector.correct(word).unwrap())
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["spelling", "poetry", "bicycle"]);
    Ok(())
}
