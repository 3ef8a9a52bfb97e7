// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use basalt_type::Type;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FunctionError {
	#[error("no function matches {name}({})", join_types(.arg_types))]
	UnknownFunction { name: String, arg_types: Vec<Type> },

	#[error("{function} expects {expected} arguments, got {actual}")]
	ArityMismatch { function: &'static str, expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, FunctionError>;

fn join_types(types: &[Type]) -> String {
	types.iter().map(|ty| ty.name()).collect::<Vec<_>>().join(",")
}
