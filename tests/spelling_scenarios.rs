use tempfile::TempDir;

use wordsmith::analysis::{TextTokenizer, split_train_test};
use wordsmith::config::{CorrectorConfig, TokenizerConfig};
use wordsmith::error::Result;
use wordsmith::spelling::{CorpusModel, SnapshotFormat, SpellCheck};

const CORPUS: &str = "\
Test automation saves time.
Automation of translation is hard!

The automaton moved, slowly.
Author notes on automation (2024).
";

fn train() -> Result<CorpusModel> {
    let tokenizer = TextTokenizer::new(TokenizerConfig::default())?;
    let sentences = tokenizer.tokenize_text(CORPUS);
    Ok(CorpusModel::train(&sentences, &CorrectorConfig::default()))
}

#[test]
fn corrects_transposed_letters_to_most_frequent_word() -> Result<()> {
    let model = train()?;
    let corrector = model.corrector(CorrectorConfig::default())?;

    let corrections = corrector.corrections("automatoin", 3);
    assert!(corrections.len() >= 2);
    assert_eq!(corrections[0].word, "automation");
    assert_eq!(corrections[0].edits, 1);
    assert!(corrections.iter().any(|c| c.word == "automaton"));
    assert!(corrections[0].probability > corrections[1].probability);
    Ok(())
}

#[test]
fn separates_known_words_from_missing_corrections() -> Result<()> {
    let model = train()?;
    let corrector = model.corrector(CorrectorConfig::default())?;

    assert_eq!(corrector.check("automation"), SpellCheck::Known);
    assert_eq!(corrector.check("zzzzzzzz"), SpellCheck::NoCorrection);
    assert!(corrector.check("zzzzzzzz").corrections().is_empty());
    Ok(())
}

#[test]
fn falls_back_to_two_edits() -> Result<()> {
    let model = train()?;
    let corrector = model.corrector(CorrectorConfig::default())?;

    match corrector.check("tsetx") {
        SpellCheck::Suggestions(corrections) => {
            assert_eq!(corrections[0].word, "test");
            assert_eq!(corrections[0].edits, 2);
        }
        other => panic!("expected suggestions, got {other:?}"),
    }
    Ok(())
}

#[test]
fn corrects_from_a_binary_snapshot_without_retraining() -> Result<()> {
    let model = train()?;
    let dir = TempDir::new()?;
    let path = dir.path().join("corpus.bin");
    model.save(&path, SnapshotFormat::Binary)?;

    let restored = CorpusModel::load(&path)?;
    assert_eq!(restored.total_words(), model.total_words());

    let original = model.corrector(CorrectorConfig::default())?;
    let reloaded = restored.corrector(CorrectorConfig::default())?;
    assert_eq!(
        reloaded.corrections("automatoin", 3),
        original.corrections("automatoin", 3)
    );
    Ok(())
}

#[test]
fn held_out_sentences_are_the_suffix() -> Result<()> {
    let tokenizer = TextTokenizer::new(TokenizerConfig::default())?;
    let sentences = tokenizer.tokenize_text(CORPUS);
    assert_eq!(sentences.len(), 4);

    let (train, test) = split_train_test(&sentences, 0.75);
    assert_eq!(train.len(), 3);
    assert_eq!(test, vec![sentences[3].clone()]);
    Ok(())
}
