// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokercomb datasets generator and combinations scanner.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod generate;
pub mod scan;
pub use scan::{FileSummary, Summary};

#[cfg(test)]
pub(crate) mod testdir {
    use std::path::PathBuf;

    /// Creates an empty directory for a test under the system temp directory.
    pub fn create(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pokercomb-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
}
