// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

/// Errors returned when building, parsing, or combining cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The suit name or symbol is not one of the four suits.
    #[error("invalid suit {0:?}")]
    InvalidSuit(String),
    /// The face label is not one of 2..10, J, Q, K, A.
    #[error("invalid face {0:?}")]
    InvalidFace(String),
    /// Parsing an empty card representation.
    #[error("empty card representation")]
    EmptyCard,
    /// Requesting subsets of a size that cannot be taken from the cards.
    #[error("cannot take {k}-subsets from {n} cards")]
    SubsetSize {
        /// The requested subset size.
        k: usize,
        /// The number of available cards.
        n: usize,
    },
}
