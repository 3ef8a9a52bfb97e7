// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use thiserror::Error;

/// Failures surfaced while preparing or draining record pipelines.
///
/// Contract violations (cursor misuse, out-of-range columns, kind
/// mismatches) are not represented here; those panic.
#[derive(Debug, Error)]
pub enum Error {
	#[error("source not found: {name}")]
	SourceNotFound { name: String },

	#[error("source '{name}' requires a resolver to prepare a cursor")]
	ResolverRequired { name: String },

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
