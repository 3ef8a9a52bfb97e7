// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The closed set of column types.
///
/// Every column, record getter and function return value is one of these
/// kinds. The set is fixed; user-defined types are expressed in terms of
/// the kinds below, never by extending the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
	/// Two-valued truth value. Boolean has no null.
	Boolean,
	/// 8-bit signed integer.
	Byte,
	/// 16-bit signed integer.
	Short,
	/// 32-bit signed integer.
	Int,
	/// 64-bit signed integer.
	Long,
	/// 32-bit IEEE 754 float.
	Float,
	/// 64-bit IEEE 754 float.
	Double,
	/// Milliseconds since the Unix epoch.
	Date,
	/// Microseconds since the Unix epoch.
	Timestamp,
	/// UTF-8 text.
	Str,
	/// UTF-8 text, variable-width storage.
	Varchar,
	/// Dictionary-encoded UTF-8 text.
	Symbol,
	/// Opaque byte blob.
	Binary,
}

impl Type {
	pub fn name(&self) -> &'static str {
		match self {
			Type::Boolean => "boolean",
			Type::Byte => "byte",
			Type::Short => "short",
			Type::Int => "int",
			Type::Long => "long",
			Type::Float => "float",
			Type::Double => "double",
			Type::Date => "date",
			Type::Timestamp => "timestamp",
			Type::Str => "str",
			Type::Varchar => "varchar",
			Type::Symbol => "symbol",
			Type::Binary => "binary",
		}
	}

	/// True for the kinds read through the text seam (`str`, `varchar`,
	/// `symbol`).
	pub fn is_text(&self) -> bool {
		matches!(self, Type::Str | Type::Varchar | Type::Symbol)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
