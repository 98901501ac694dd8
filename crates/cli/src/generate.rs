// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random cards datasets generation.
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::prelude::*;
use std::{fs, path::PathBuf};

use pokercomb_cards::random_hand;
use pokercomb_eval::COMBINATION_SIZE;

/// The generator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The directory where the dataset files are written.
    pub dataset: PathBuf,
    /// The number of files to generate.
    pub files: usize,
    /// The minimum number of cards in a file.
    pub min_cards: usize,
    /// The maximum number of cards in a file.
    pub max_cards: usize,
    /// The random generator seed.
    pub seed: u64,
}

/// Generates `files` dataset files named `dat{n}.csv`, each file has a
/// comma separated list of random cards short representations.
pub fn run(config: &Config) -> Result<()> {
    if config.min_cards < COMBINATION_SIZE {
        bail!(
            "min cards {} must be at least {COMBINATION_SIZE}",
            config.min_cards
        );
    }

    if config.min_cards > config.max_cards {
        bail!(
            "min cards {} greater than max cards {}",
            config.min_cards,
            config.max_cards
        );
    }

    fs::create_dir_all(&config.dataset)
        .with_context(|| format!("create dataset dir {}", config.dataset.display()))?;

    info!(
        "Generating {} files in {} with seed {}",
        config.files,
        config.dataset.display(),
        config.seed
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    for n in 0..config.files {
        let len = rng.random_range(config.min_cards..=config.max_cards);
        let hand = random_hand(&mut rng, len);

        let line = hand.iter().map(ToString::to_string).collect::<Vec<_>>();
        let path = config.dataset.join(format!("dat{n}.csv"));
        fs::write(&path, format!("{}\n", line.join(",")))
            .with_context(|| format!("write dataset file {}", path.display()))?;

        debug!("Generated {} cards in {}", len, path.display());
    }

    Ok(())
}
