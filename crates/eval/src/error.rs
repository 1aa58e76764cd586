// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

/// Errors returned by the evaluator and the rank classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hole and board cards don't add up to 5, 6, or 7 cards.
    #[error("invalid hand size {0}, a hand must have 5, 6 or 7 cards")]
    InvalidHandSize(usize),
    /// A rank outside the range [1, 7462].
    #[error("invalid hand rank {0}, cannot return rank class")]
    InvalidRank(u16),
}
