// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

//! Scalar function evaluation over record streams.
//!
//! Functions are typed evaluators built by factories out of other
//! functions (column reads, constants, nested calls). Factories are
//! resolved by name and argument types through the
//! [`FunctionRegistry`], and fold constant arguments at construction
//! so per-row evaluation never repeats work that cannot change.

mod error;
mod function;
mod plan;
mod registry;

pub use error::{FunctionError, Result};
pub use function::{
	Function, FunctionArgs, FunctionRef,
	columns::{IntColumn, StrColumn, SymbolColumn, VarcharColumn},
	conditional::CoalesceFunctionFactory,
	constants::{BoolConstant, IntConstant, StrConstant},
	text::{length::LengthFunctionFactory, starts_with::StartsWithFunctionFactory, strpos::StrPosFunctionFactory},
};
pub use plan::{PlanSink, plan, referenced_columns};
pub use registry::{FunctionFactory, FunctionRegistry, Param, Signature};
