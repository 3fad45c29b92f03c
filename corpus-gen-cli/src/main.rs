use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use corpus_gen_core::{CorpusGenerator, DatasetSpec, DatasetSummary, ThemeStrategy, progress_message};
use log::debug;
use rand::Rng;

/// Generate synthetic text corpora for document-similarity experiments.
///
/// Without arguments, writes dataset1.txt (100 documents, ~5,000 words),
/// dataset2.txt (200, ~15,000) and dataset3.txt (300, ~25,000) to the
/// current directory, then prints a summary of each file.
#[derive(Parser, Debug)]
#[command(name = "corpus-gen", version)]
struct Cli {
	/// Seed for a reproducible corpus; random when omitted
	#[arg(long)]
	seed: Option<u64>,

	/// Folder the dataset files are written to
	#[arg(short = 'o', long = "output-dir", default_value = ".")]
	output_dir: PathBuf,

	/// Dataset to generate as NAME:DOCS:WORDS (repeatable, replaces the default plan)
	#[arg(short = 'd', long = "dataset", value_name = "NAME:DOCS:WORDS", conflicts_with = "plan")]
	datasets: Vec<DatasetSpec>,

	/// JSON file holding an array of {name, document_count, word_target}
	#[arg(long, value_name = "FILE")]
	plan: Option<PathBuf>,

	/// Draw two random themes per document instead of quartile themes
	#[arg(long)]
	random_themes: bool,

	/// Print the summaries as a JSON array
	#[arg(long)]
	json: bool,
}

impl Cli {
	/// Resolves the dataset plan: `--plan`, then `--dataset`, then defaults.
	fn datasets(&self) -> Result<Vec<DatasetSpec>> {
		if let Some(path) = &self.plan {
			return load_plan(path);
		}
		if !self.datasets.is_empty() {
			return Ok(self.datasets.clone());
		}
		Ok(DatasetSpec::defaults())
	}

	fn strategy(&self) -> ThemeStrategy {
		if self.random_themes { ThemeStrategy::Random } else { ThemeStrategy::Quartile }
	}
}

/// Reads and validates a JSON dataset plan.
fn load_plan(path: &Path) -> Result<Vec<DatasetSpec>> {
	let contents = fs::read_to_string(path)
		.with_context(|| format!("failed to read plan {}", path.display()))?;
	let plan: Vec<DatasetSpec> = serde_json::from_str(&contents)
		.with_context(|| format!("failed to parse plan {}", path.display()))?;
	for spec in &plan {
		spec.validate().with_context(|| format!("invalid dataset in plan {}", path.display()))?;
	}
	Ok(plan)
}

/// Generates the plan and prints progress then summaries.
fn generate<R: Rng>(generator: &mut CorpusGenerator<R>, json: bool) -> Result<()> {
	let summaries: Vec<DatasetSummary> = generator
		.run(|spec| println!("{}", progress_message(spec)))
		.with_context(|| format!("failed to generate datasets in {}", generator.output_dir().display()))?;

	if json {
		println!("{}", serde_json::to_string_pretty(&summaries)?);
	} else {
		for summary in &summaries {
			println!("{summary}");
		}
	}
	Ok(())
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let cli = Cli::parse();
	debug!("{cli:?}");

	let datasets = cli.datasets()?;
	let strategy = cli.strategy();

	match cli.seed {
		Some(seed) => {
			let mut generator = CorpusGenerator::seeded(&cli.output_dir, seed)
				.with_datasets(datasets)
				.with_strategy(strategy);
			generate(&mut generator, cli.json)
		}
		None => {
			let mut generator = CorpusGenerator::from_entropy(&cli.output_dir)
				.with_datasets(datasets)
				.with_strategy(strategy);
			generate(&mut generator, cli.json)
		}
	}
}
