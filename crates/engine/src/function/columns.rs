// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::sync::Arc;

use basalt_core::Record;
use basalt_type::Type;

use crate::function::{Function, FunctionArgs, FunctionRef};

/// Reads an `int` column by position.
pub struct IntColumn {
	ordinal: usize,
}

impl IntColumn {
	pub fn new(ordinal: usize) -> FunctionRef {
		Arc::new(Self { ordinal })
	}
}

impl Function for IntColumn {
	fn name(&self) -> &'static str {
		"column"
	}

	fn return_type(&self) -> Type {
		Type::Int
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::None
	}

	fn column_ordinal(&self) -> Option<usize> {
		Some(self.ordinal)
	}

	fn get_int(&self, record: Option<&dyn Record>) -> i32 {
		require_record(record).get_int(self.ordinal)
	}
}

/// Reads a `str` column by position.
pub struct StrColumn {
	ordinal: usize,
}

impl StrColumn {
	pub fn new(ordinal: usize) -> FunctionRef {
		Arc::new(Self { ordinal })
	}
}

impl Function for StrColumn {
	fn name(&self) -> &'static str {
		"column"
	}

	fn return_type(&self) -> Type {
		Type::Str
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::None
	}

	fn column_ordinal(&self) -> Option<usize> {
		Some(self.ordinal)
	}

	fn get_str<'a>(&'a self, record: Option<&'a dyn Record>) -> Option<&'a str> {
		require_record(record).get_str(self.ordinal)
	}
}

/// Reads a `varchar` column by position. Shares the text seam with
/// [`StrColumn`]; only the declared kind differs.
pub struct VarcharColumn {
	ordinal: usize,
}

impl VarcharColumn {
	pub fn new(ordinal: usize) -> FunctionRef {
		Arc::new(Self { ordinal })
	}
}

impl Function for VarcharColumn {
	fn name(&self) -> &'static str {
		"column"
	}

	fn return_type(&self) -> Type {
		Type::Varchar
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::None
	}

	fn column_ordinal(&self) -> Option<usize> {
		Some(self.ordinal)
	}

	fn get_str<'a>(&'a self, record: Option<&'a dyn Record>) -> Option<&'a str> {
		require_record(record).get_str(self.ordinal)
	}
}

/// Reads a `symbol` column by position, resolving keys to labels.
pub struct SymbolColumn {
	ordinal: usize,
}

impl SymbolColumn {
	pub fn new(ordinal: usize) -> FunctionRef {
		Arc::new(Self { ordinal })
	}
}

impl Function for SymbolColumn {
	fn name(&self) -> &'static str {
		"column"
	}

	fn return_type(&self) -> Type {
		Type::Symbol
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::None
	}

	fn column_ordinal(&self) -> Option<usize> {
		Some(self.ordinal)
	}

	fn get_str<'a>(&'a self, record: Option<&'a dyn Record>) -> Option<&'a str> {
		require_record(record).get_sym(self.ordinal)
	}
}

fn require_record(record: Option<&dyn Record>) -> &dyn Record {
	match record {
		Some(record) => record,
		None => panic!("column read requires a record"),
	}
}
