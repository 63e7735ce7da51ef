//! Trained corpus tables and their persisted snapshot.
//!
//! A [`CorpusModel`] is built once from tokenized sentences and is read-only
//! afterwards. It can be written to disk as JSON or bincode so correction can
//! run without retraining.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::vocabulary::Vocabulary;
use crate::config::CorrectorConfig;
use crate::error::Result;
use crate::spelling::corrector::SpellingCorrector;
use crate::spelling::dictionary::{FrequencyTable, ProbabilityTable};

/// On-disk encoding of a [`ModelSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Pretty-printed JSON.
    Json,
    /// bincode.
    Binary,
}

impl SnapshotFormat {
    /// `.json` files are JSON, anything else is binary.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SnapshotFormat::Json,
            _ => SnapshotFormat::Binary,
        }
    }
}

/// Persisted form of a trained corpus: a word list and a word → probability map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub vocabulary: Vec<String>,
    pub probabilities: ProbabilityTable,
    pub total_words: u64,
    pub created_at: DateTime<Utc>,
}

/// Vocabulary and word probabilities of a training corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusModel {
    vocabulary: Vocabulary,
    probabilities: ProbabilityTable,
    total_words: u64,
}

impl CorpusModel {
    /// Count the corpus and keep words seen at least `min_frequency` times.
    pub fn train(sentences: &[Vec<String>], config: &CorrectorConfig) -> Self {
        let frequencies = FrequencyTable::from_sentences(sentences);
        let model = CorpusModel::from_frequencies(&frequencies, config.min_frequency);
        info!(
            "trained corpus model: {} sentences, {} tokens, {} vocabulary words",
            sentences.len(),
            model.total_words,
            model.vocabulary.len()
        );
        model
    }

    /// Build from an existing frequency table.
    pub fn from_frequencies(frequencies: &FrequencyTable, min_frequency: u64) -> Self {
        CorpusModel {
            vocabulary: Vocabulary::from_frequencies(frequencies, min_frequency),
            probabilities: frequencies.probabilities(),
            total_words: frequencies.total(),
        }
    }

    /// The closed vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Word probabilities.
    pub fn probabilities(&self) -> &ProbabilityTable {
        &self.probabilities
    }

    /// Number of tokens the model was trained on.
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// A corrector borrowing this model's tables.
    pub fn corrector(&self, config: CorrectorConfig) -> Result<SpellingCorrector<'_>> {
        SpellingCorrector::with_config(&self.probabilities, &self.vocabulary, config)
    }

    /// Snapshot of the model stamped with the current time.
    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            vocabulary: self.vocabulary.to_vec(),
            probabilities: self.probabilities.clone(),
            total_words: self.total_words,
            created_at: Utc::now(),
        }
    }

    /// Rebuild a model from a snapshot.
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Self {
        CorpusModel {
            vocabulary: Vocabulary::from_words(snapshot.vocabulary),
            probabilities: snapshot.probabilities,
            total_words: snapshot.total_words,
        }
    }

    /// Write the model to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: SnapshotFormat) -> Result<()> {
        let snapshot = self.snapshot();
        let mut writer = BufWriter::new(File::create(path.as_ref())?);

        match format {
            SnapshotFormat::Json => serde_json::to_writer_pretty(&mut writer, &snapshot)?,
            SnapshotFormat::Binary => bincode::serialize_into(&mut writer, &snapshot)?,
        }
        writer.flush()?;

        info!(
            "saved corpus snapshot to {} ({:?})",
            path.as_ref().display(),
            format
        );
        Ok(())
    }

    /// Read a model from `path`, choosing the format by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = SnapshotFormat::from_path(path.as_ref());
        let reader = BufReader::new(File::open(path.as_ref())?);

        let snapshot: ModelSnapshot = match format {
            SnapshotFormat::Json => serde_json::from_reader(reader)?,
            SnapshotFormat::Binary => bincode::deserialize_from(reader)?,
        };

        Ok(CorpusModel::from_snapshot(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_model() -> CorpusModel {
        let sentences = vec![
            vec!["the".to_string(), "cat".to_string(), "sat".to_string()],
            vec!["the".to_string(), "dog".to_string()],
        ];
        CorpusModel::train(&sentences, &CorrectorConfig::default())
    }

    #[test]
    fn test_train() {
        let model = sample_model();
        assert_eq!(model.total_words(), 5);
        assert_eq!(model.vocabulary().len(), 4);
        assert!((model.probabilities().probability("the") - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_min_frequency_limits_vocabulary_only() {
        let sentences = vec![vec!["a".to_string(), "a".to_string(), "b".to_string()]];
        let config = CorrectorConfig {
            min_frequency: 2,
            ..Default::default()
        };
        let model = CorpusModel::train(&sentences, &config);

        assert!(model.vocabulary().contains("a"));
        assert!(!model.vocabulary().contains("b"));
        assert!(model.probabilities().probability("b") > 0.0);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(SnapshotFormat::from_path("model.json"), SnapshotFormat::Json);
        assert_eq!(SnapshotFormat::from_path("model.JSON"), SnapshotFormat::Json);
        assert_eq!(SnapshotFormat::from_path("model.bin"), SnapshotFormat::Binary);
        assert_eq!(SnapshotFormat::from_path("model"), SnapshotFormat::Binary);
    }

    #[test]
    fn test_save_and_load() {
        let model = sample_model();
        let dir = TempDir::new().unwrap();

        for name in ["model.json", "model.bin"] {
            let path = dir.path().join(name);
            model.save(&path, SnapshotFormat::from_path(&path)).unwrap();
            let loaded = CorpusModel::load(&path).unwrap();
            assert_eq!(loaded, model, "{name} did not survive a save/load");
        }
    }

    #[test]
    fn test_load_corrupt_binary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        assert!(CorpusModel::load(&path).is_err());
    }
}
