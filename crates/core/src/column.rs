// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use basalt_type::Type;

/// Dictionary key meaning "no label" in a symbol column.
pub(crate) const SYMBOL_NULL_KEY: i32 = -1;

/// A named column and its values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
	name: String,
	data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self { name: name.into(), data }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}
}

/// Typed column storage, one variant per kind.
///
/// Numeric and temporal nulls are stored as the sentinel values from
/// [`basalt_type::null`]; text and binary nulls as `None`. Symbols are
/// dictionary-encoded: `keys` holds an index into `labels` per row,
/// with [`SYMBOL_NULL_KEY`] for null.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
	Bool(Vec<bool>),
	Byte(Vec<i8>),
	Short(Vec<i16>),
	Int(Vec<i32>),
	Long(Vec<i64>),
	Float(Vec<f32>),
	Double(Vec<f64>),
	Date(Vec<i64>),
	Timestamp(Vec<i64>),
	Str(Vec<Option<String>>),
	Varchar(Vec<Option<String>>),
	Symbol { keys: Vec<i32>, labels: Vec<String> },
	Binary(Vec<Option<Vec<u8>>>),
}

impl ColumnData {
	pub fn ty(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Byte(_) => Type::Byte,
			ColumnData::Short(_) => Type::Short,
			ColumnData::Int(_) => Type::Int,
			ColumnData::Long(_) => Type::Long,
			ColumnData::Float(_) => Type::Float,
			ColumnData::Double(_) => Type::Double,
			ColumnData::Date(_) => Type::Date,
			ColumnData::Timestamp(_) => Type::Timestamp,
			ColumnData::Str(_) => Type::Str,
			ColumnData::Varchar(_) => Type::Varchar,
			ColumnData::Symbol { .. } => Type::Symbol,
			ColumnData::Binary(_) => Type::Binary,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(values) => values.len(),
			ColumnData::Byte(values) => values.len(),
			ColumnData::Short(values) => values.len(),
			ColumnData::Int(values) => values.len(),
			ColumnData::Long(values) => values.len(),
			ColumnData::Float(values) => values.len(),
			ColumnData::Double(values) => values.len(),
			ColumnData::Date(values) => values.len(),
			ColumnData::Timestamp(values) => values.len(),
			ColumnData::Str(values) => values.len(),
			ColumnData::Varchar(values) => values.len(),
			ColumnData::Symbol { keys, .. } => keys.len(),
			ColumnData::Binary(values) => values.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Builds a symbol column by interning the given labels into a
	/// dictionary in first-seen order.
	pub fn symbol<'a, I>(values: I) -> Self
	where
		I: IntoIterator<Item = Option<&'a str>>,
	{
		let mut labels: Vec<String> = Vec::new();
		let mut keys = Vec::new();
		for value in values {
			match value {
				None => keys.push(SYMBOL_NULL_KEY),
				Some(label) => {
					let key = match labels.iter().position(|known| known == label) {
						Some(at) => at as i32,
						None => {
							labels.push(label.to_string());
							(labels.len() - 1) as i32
						}
					};
					keys.push(key);
				}
			}
		}
		ColumnData::Symbol { keys, labels }
	}
}
