//! Command implementations for the Wordsmith CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::analysis::tokenizer::TextTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::Config;
use crate::error::{Result, WordsmithError};
use crate::language_model::{NGramModel, best_suggestion};
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: WordsmithArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Distance(distance_args) => compute_distance(distance_args.clone(), &args),
        Command::Train(train_args) => train_snapshot(train_args.clone(), &config, &args),
        Command::Correct(correct_args) => correct_word(correct_args.clone(), &config, &args),
        Command::Suggest(suggest_args) => suggest_next(suggest_args.clone(), &config, &args),
        Command::Complete(complete_args) => complete_prompt(complete_args.clone(), &config, &args),
    }
}

/// Load the config file, or the defaults when none was given.
fn load_config(args: &WordsmithArgs) -> Result<Config> {
    match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            Config::load(path)
        }
        None => Ok(Config::default()),
    }
}

/// Read and tokenize a corpus file, one sentence per line.
pub fn read_corpus<P: AsRef<Path>>(path: P, config: &Config) -> Result<Vec<Vec<String>>> {
    let text = fs::read_to_string(path.as_ref())?;
    let tokenizer = TextTokenizer::new(config.tokenizer.clone())?;
    let sentences = tokenizer.tokenize_text(&text);
    info!(
        "read {} sentences from {}",
        sentences.len(),
        path.as_ref().display()
    );
    Ok(sentences)
}

/// Tokenize a prompt the same way corpus sentences are.
fn tokenize_prompt(prompt: &str, config: &Config) -> Result<Vec<String>> {
    let tokenizer = TextTokenizer::new(config.tokenizer.clone())?;
    Ok(tokenizer.tokenize(prompt))
}

/// Compute the weighted edit distance.
fn compute_distance(args: DistanceArgs, cli_args: &WordsmithArgs) -> Result<()> {
    let human = cli_args.output_format == OutputFormat::Human;
    let (result, matrix) = distance_result(&args, args.matrix && !human);

    output_result("Edit distance", &result, cli_args)?;

    if args.matrix && human {
        println!();
        print!("{matrix}");
    }
    Ok(())
}

/// Distance figures for `args`, with the matrix rows attached when
/// `include_matrix` is set.
fn distance_result(args: &DistanceArgs, include_matrix: bool) -> (DistanceResult, DistanceMatrix) {
    let costs = CostModel::new(args.insert_cost, args.delete_cost, args.replace_cost);
    let matrix = DistanceMatrix::compute(&args.source, &args.target, &costs);

    let result = DistanceResult {
        source: args.source.clone(),
        target: args.target.clone(),
        costs,
        distance: matrix.distance(),
        distance_percentage: round_percentage(distance_percentage(
            &args.source,
            &args.target,
            &costs,
        )),
        similarity_percentage: round_percentage(similarity_percentage(
            &args.source,
            &args.target,
            &costs,
        )),
        matrix: include_matrix.then(|| matrix.to_rows()),
    };
    (result, matrix)
}

/// Train a corpus model and write its snapshot.
fn train_snapshot(args: TrainArgs, config: &Config, cli_args: &WordsmithArgs) -> Result<()> {
    let start_time = Instant::now();
    let sentences = read_corpus(&args.corpus, config)?;
    let model = CorpusModel::train(&sentences, &config.corrector);

    let format = args.snapshot_format();
    model.save(&args.output, format)?;
    debug!("training took {:?}", start_time.elapsed());

    output_result(
        "Snapshot written",
        &TrainResult {
            snapshot: args.output.to_string_lossy().to_string(),
            format: format!("{format:?}").to_lowercase(),
            sentences: sentences.len(),
            total_words: model.total_words(),
            vocabulary_size: model.vocabulary().len(),
        },
        cli_args,
    )
}

/// Correct one word against a corpus or snapshot.
fn correct_word(args: CorrectArgs, config: &Config, cli_args: &WordsmithArgs) -> Result<()> {
    let result = correction_result(&args, config)?;
    output_result("Spelling", &result, cli_args)
}

/// Load or train the corpus model named by `args` and check its word.
fn correction_result(args: &CorrectArgs, config: &Config) -> Result<CorrectionResult> {
    let model = match (&args.snapshot, &args.corpus) {
        (Some(snapshot), _) => CorpusModel::load(snapshot)?,
        (None, Some(corpus)) => {
            let sentences = read_corpus(corpus, config)?;
            CorpusModel::train(&sentences, &config.corrector)
        }
        (None, None) => {
            return Err(WordsmithError::invalid_argument(
                "either --corpus or --snapshot is required",
            ));
        }
    };

    let mut corrector_config = config.corrector.clone();
    if let Some(count) = args.count {
        corrector_config.max_suggestions = count;
    }
    let corrector = model.corrector(corrector_config)?;

    let word = args.word.to_lowercase();
    let result = corrector.check(&word);
    Ok(CorrectionResult { word, result })
}

/// Suggest the next word for a prompt.
fn suggest_next(args: SuggestArgs, config: &Config, cli_args: &WordsmithArgs) -> Result<()> {
    let sentences = read_corpus(&args.corpus, config)?;
    let model = NGramModel::train(&sentences, &config.language_model)?;
    let prompt = tokenize_prompt(&args.prompt, config)?;

    let prefix = args.prefix.as_deref();
    let suggestions = model.suggestions(&prompt, prefix)?;
    let best = best_suggestion(&suggestions);

    output_result(
        "Next word",
        &SuggestionResult {
            prompt,
            prefix: args.prefix.clone(),
            suggestions,
            best_probability: best.as_ref().map_or(0.0, |(_, p)| *p),
            best: best.map(|(word, _)| word),
        },
        cli_args,
    )
}

/// Greedily complete a prompt.
fn complete_prompt(args: CompleteArgs, config: &Config, cli_args: &WordsmithArgs) -> Result<()> {
    let sentences = read_corpus(&args.corpus, config)?;
    let model = NGramModel::train(&sentences, &config.language_model)?;
    let prompt = tokenize_prompt(&args.prompt, config)?;

    let completion = model.complete(prompt.clone())?;

    output_result(
        "Completion",
        &CompletionResult {
            prompt,
            completion: completion.tokens().join(" "),
            steps: completion.steps(),
            status: completion.status(),
        },
        cli_args,
    )
}
