use std::fs;

use corpus_gen_core::model::dataset::write_documents;
use corpus_gen_core::model::theme::assign_themes;
use corpus_gen_core::report::summarize_file;
use corpus_gen_core::vocabulary::is_common_word;
use corpus_gen_core::{CorpusGenerator, DatasetSpec, ThemeStrategy};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Checks every line of a generated dataset against its spec.
fn check_dataset(spec: &DatasetSpec, text: &str) {
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines.len(), spec.document_count);

	let base = spec.base_words();
	let low = (base as f64 * 0.8).floor() as usize;
	let high = (base as f64 * 1.2).ceil() as usize + 14;

	for (position, line) in lines.iter().enumerate() {
		let index = position + 1;
		let mut tokens = line.split(' ');
		assert_eq!(tokens.next(), Some(format!("Document{index}").as_str()));

		let themes = assign_themes(index, spec.document_count);
		let words: Vec<&str> = tokens.collect();
		assert!(
			words.len() >= low && words.len() <= high,
			"line {index}: {} words outside [{low}, {high}]",
			words.len()
		);
		for word in words {
			assert!(!word.is_empty());
			assert!(word.chars().all(|c| c.is_ascii_lowercase()));
			assert!(themes.contains(word) || is_common_word(word), "line {index}: stray word {word}");
		}
	}
}

#[test]
fn default_plan_end_to_end() {
	let dir = tempfile::tempdir().unwrap();
	let mut generator = CorpusGenerator::seeded(dir.path(), 2024);

	let mut progress = Vec::new();
	let summaries = generator.run(|spec| progress.push(corpus_gen_core::progress_message(spec))).unwrap();

	assert_eq!(progress.len(), 3);
	assert_eq!(progress[1], "Generating Dataset2: ~200 documents, ~15,000 words...");

	for (spec, summary) in DatasetSpec::defaults().iter().zip(&summaries) {
		let text = fs::read_to_string(dir.path().join(spec.file_name())).unwrap();
		check_dataset(spec, &text);

		assert_eq!(summary.file, spec.file_name());
		assert_eq!(summary.documents, spec.document_count);
		let counted: usize = text.lines().map(|l| l.split_whitespace().count() - 1).sum();
		assert_eq!(summary.words, counted);
		// Jitter averages out around the target
		let target = spec.word_target as f64;
		assert!((summary.words as f64) > target * 0.85 && (summary.words as f64) < target * 1.15);
	}
}

#[test]
fn same_seed_same_files() {
	let first = tempfile::tempdir().unwrap();
	let second = tempfile::tempdir().unwrap();
	let plan = vec![DatasetSpec::new("repeat", 20, 600)];

	CorpusGenerator::seeded(first.path(), 77).with_datasets(plan.clone()).generate_all(|_| {}).unwrap();
	CorpusGenerator::seeded(second.path(), 77).with_datasets(plan).generate_all(|_| {}).unwrap();

	let a = fs::read(first.path().join("repeat.txt")).unwrap();
	let b = fs::read(second.path().join("repeat.txt")).unwrap();
	assert_eq!(a, b);
}

#[test]
fn regeneration_truncates_existing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("small.txt");
	fs::write(&path, "stale\n".repeat(500)).unwrap();

	let mut generator = CorpusGenerator::seeded(dir.path(), 5).with_datasets(vec![DatasetSpec::new("small", 4, 40)]);
	generator.generate_all(|_| {}).unwrap();

	let summary = summarize_file(&path).unwrap();
	assert_eq!(summary.documents, 4);
	assert!(!fs::read_to_string(&path).unwrap().contains("stale"));
}

#[test]
fn output_folder_is_created() {
	let dir = tempfile::tempdir().unwrap();
	let nested = dir.path().join("corpus/run1");
	let mut generator = CorpusGenerator::seeded(&nested, 6).with_datasets(vec![DatasetSpec::new("d", 3, 30)]);
	let paths = generator.generate_all(|_| {}).unwrap();
	assert_eq!(paths, vec![nested.join("d.txt")]);
	assert!(paths[0].is_file());
}

#[test]
fn random_themes_still_yield_well_formed_lines() {
	let dir = tempfile::tempdir().unwrap();
	let mut generator = CorpusGenerator::seeded(dir.path(), 8)
		.with_strategy(ThemeStrategy::Random)
		.with_datasets(vec![DatasetSpec::new("mixed", 30, 900)]);
	let summaries = generator.run(|_| {}).unwrap();

	assert_eq!(summaries[0].documents, 30);
	let text = fs::read_to_string(dir.path().join("mixed.txt")).unwrap();
	for (i, line) in text.lines().enumerate() {
		assert!(line.starts_with(&format!("Document{} ", i + 1)));
	}
}

#[test]
fn plan_from_json() {
	let json = r#"[
		{ "name": "dataset1", "document_count": 100, "word_target": 5000 },
		{ "name": "dataset2", "document_count": 200, "word_target": 15000 },
		{ "name": "dataset3", "document_count": 300, "word_target": 25000 }
	]"#;
	let plan: Vec<DatasetSpec> = serde_json::from_str(json).unwrap();
	assert_eq!(plan, DatasetSpec::defaults());
}

#[test]
fn summary_serializes_to_json() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(
		dir.path().join("hand.txt"),
		"Document1 a b c d e\nDocument2 a b c d e\nDocument3 a b c d e\n",
	)
	.unwrap();
	let summary = summarize_file(dir.path().join("hand.txt")).unwrap();
	assert_eq!(summary.to_string(), "hand.txt: 3 documents, 15 words");

	let value = serde_json::to_value(&summary).unwrap();
	assert_eq!(value["documents"], 3);
	assert_eq!(value["words"], 15);
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn generated_lines_respect_bounds(
		document_count in 1usize..40,
		word_target in 0usize..3000,
		seed in any::<u64>(),
	) {
		let spec = DatasetSpec::new("prop", document_count, word_target);
		let mut rng = StdRng::seed_from_u64(seed);
		let mut buffer: Vec<u8> = Vec::new();

		let written = write_documents(&spec, &mut buffer, ThemeStrategy::Quartile, &mut rng).unwrap();
		prop_assert_eq!(written, document_count);

		let text = String::from_utf8(buffer).unwrap();
		check_dataset(&spec, &text);
	}

	#[test]
	fn theme_assignment_is_pure(total in 1usize..1000, offset in 0usize..1000) {
		let index = offset % total + 1;
		prop_assert_eq!(assign_themes(index, total), assign_themes(index, total));
	}
}
