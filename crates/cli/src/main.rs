// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokercomb CLI.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;

use pokercomb_cli::{generate, scan};

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate random cards dataset files.
    Generate {
        /// The dataset directory.
        #[clap(long, short, default_value = "dataset")]
        dataset: PathBuf,
        /// Number of files to generate.
        #[clap(long, short, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=10_000))]
        files: u32,
        /// Minimum number of cards in a file.
        #[clap(long, default_value_t = 10)]
        min_cards: usize,
        /// Maximum number of cards in a file.
        #[clap(long, default_value_t = 16)]
        max_cards: usize,
        /// The random generator seed.
        #[clap(long, short, default_value_t = 1665694295623135151)]
        seed: u64,
    },
    /// Find the poker combinations in the dataset files.
    Scan {
        /// The dataset directory.
        #[clap(long, short, default_value = "dataset")]
        dataset: PathBuf,
        /// The results directory.
        #[clap(long, short, default_value = "results")]
        results: PathBuf,
        /// Number of files scanned in parallel.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=64))]
        jobs: u8,
        /// Write a JSON summary of the found combinations to this file.
        #[clap(long)]
        summary: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            dataset,
            files,
            min_cards,
            max_cards,
            seed,
        } => generate::run(&generate::Config {
            dataset,
            files: files as usize,
            min_cards,
            max_cards,
            seed,
        }),
        Command::Scan {
            dataset,
            results,
            jobs,
            summary,
        } => scan::run(&scan::Config {
            dataset,
            results,
            jobs: jobs as usize,
            summary,
        })
        .map(|_| ()),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
