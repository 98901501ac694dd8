// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dataset scanning for poker combinations.
//!
//! Each dataset file is a comma separated list of cards, the scanner finds
//! the combinations made by all the 5 cards subsets of the file unique cards
//! and writes them to a file with the same name in the results directory,
//! one combination per line:
//!
//! ```text
//! ♦8,♠10,♦10,♣8,♥8 | Full House
//! ```
use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    thread,
};

use pokercomb_cards::{Card, dedup, nck};
use pokercomb_eval::{COMBINATION_SIZE, CombinationKind, find_combinations};

/// The scanner configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The directory with the dataset files.
    pub dataset: PathBuf,
    /// The directory where the results files are written.
    pub results: PathBuf,
    /// The number of files scanned in parallel.
    pub jobs: usize,
    /// Optional path for a JSON summary.
    pub summary: Option<PathBuf>,
}

/// Combinations found in a dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    /// The dataset file name.
    pub file: String,
    /// Number of cards in the file.
    pub cards: usize,
    /// Number of unique cards in the file.
    pub unique_cards: usize,
    /// Number of 5 cards hands classified.
    pub hands: usize,
    /// Number of combinations found for each kind.
    pub combinations: BTreeMap<CombinationKind, usize>,
}

/// Combinations found in a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Per file summaries sorted by file name.
    pub files: Vec<FileSummary>,
    /// Number of combinations found for each kind in all files.
    pub totals: BTreeMap<CombinationKind, usize>,
}

impl Summary {
    fn add(&mut self, file: FileSummary) {
        for (kind, count) in &file.combinations {
            *self.totals.entry(*kind).or_default() += count;
        }

        self.files.push(file);
    }
}

/// Scans all the files in the dataset directory.
pub fn run(config: &Config) -> Result<Summary> {
    let mut files = Vec::new();
    for entry in fs::read_dir(&config.dataset)
        .with_context(|| format!("read dataset dir {}", config.dataset.display()))?
    {
        // Symlinks are followed so linked dataset files are scanned too.
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping {}, not a file", path.display());
        }
    }
    files.sort();

    fs::create_dir_all(&config.results)
        .with_context(|| format!("create results dir {}", config.results.display()))?;

    info!(
        "Scanning {} files from {} with {} jobs",
        files.len(),
        config.dataset.display(),
        config.jobs
    );

    let summary = Mutex::new(Summary::default());
    let num_tasks = config.jobs.max(1);
    let files_per_task = files.len().div_ceil(num_tasks).max(1);

    thread::scope(|s| {
        let handles = files
            .chunks(files_per_task)
            .map(|chunk| {
                let summary = &summary;
                s.spawn(move || -> Result<()> {
                    for path in chunk {
                        let file = scan_file(path, &config.results)?;
                        summary.lock().add(file);
                    }
                    Ok(())
                })
            })
            .collect::<Vec<_>>();

        handles.into_iter().try_for_each(|handle| {
            handle
                .join()
                .map_err(|_| anyhow!("scan task panicked"))?
        })
    })?;

    let mut summary = summary.into_inner();
    summary.files.sort_by(|a, b| a.file.cmp(&b.file));

    for kind in CombinationKind::ALL.iter().rev() {
        let count = summary.totals.get(kind).copied().unwrap_or_default();
        info!("{:<16} {count}", kind.name());
    }

    if let Some(path) = &config.summary {
        let file = File::create(path)
            .with_context(|| format!("create summary file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &summary)?;
        writer.flush()?;
        info!("Summary written to {}", path.display());
    }

    Ok(summary)
}

/// Reads the cards in a dataset file.
pub fn read_hand(path: &Path) -> Result<Vec<Card>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read file {}", path.display()))?;

    let data = data.trim();
    if data.is_empty() {
        return Ok(Vec::new());
    }

    data.split(',')
        .map(|s| {
            s.parse::<Card>()
                .with_context(|| format!("parse card {s:?} in {}", path.display()))
        })
        .collect()
}

/// Scans a dataset file and writes its combinations to the results directory.
pub fn scan_file(path: &Path, results: &Path) -> Result<FileSummary> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("invalid dataset file {}", path.display()))?;

    let cards = read_hand(path)?;
    let unique_cards = dedup(&cards).len();
    let found = find_combinations(&cards)?;

    let out_path = results.join(file_name);
    let out = File::create(&out_path)
        .with_context(|| format!("create results file {}", out_path.display()))?;
    let mut writer = BufWriter::new(out);

    let mut combinations = BTreeMap::<CombinationKind, usize>::new();
    for comb in &found {
        writeln!(writer, "{comb}")?;
        *combinations.entry(comb.kind()).or_default() += 1;
    }
    writer.flush()?;

    let file = file_name.to_string_lossy().into_owned();
    info!("{file}: {} combinations", found.len());
    debug!("{file}: {} cards, {unique_cards} unique", cards.len());

    Ok(FileSummary {
        file,
        cards: cards.len(),
        unique_cards,
        hands: nck(unique_cards, COMBINATION_SIZE),
        combinations,
    })
}
