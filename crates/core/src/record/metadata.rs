// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use basalt_type::Type;
use serde::{Deserialize, Serialize};

/// Name and kind of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
	name: String,
	ty: Type,
}

impl ColumnMeta {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self { name: name.into(), ty }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn ty(&self) -> Type {
		self.ty
	}
}

/// The column layout of a record stream.
///
/// Fixed for the lifetime of a cursor: positions resolved through
/// [`RecordMetadata::index_of`] stay valid for every record the cursor
/// yields, so callers resolve once and read by position afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
	columns: Vec<ColumnMeta>,
}

impl RecordMetadata {
	pub fn new(columns: Vec<ColumnMeta>) -> Self {
		Self { columns }
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	/// Panics when `index` is out of range; positions come from
	/// [`RecordMetadata::index_of`] or the layout itself.
	pub fn column(&self, index: usize) -> &ColumnMeta {
		&self.columns[index]
	}

	pub fn columns(&self) -> &[ColumnMeta] {
		&self.columns
	}

	/// Position of the first column with the given name.
	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|column| column.name() == name)
	}
}
