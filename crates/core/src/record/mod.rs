// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

mod metadata;

pub use metadata::{ColumnMeta, RecordMetadata};

/// One row, read by column position.
///
/// Getters return raw values with nulls in-band: the numeric and
/// temporal kinds yield their sentinel from [`basalt_type::null`], the
/// text and binary kinds yield `None`. The getter must match the
/// column's kind; implementations panic otherwise, and the default
/// bodies panic for kinds the record does not store at all. Misreads
/// are defects, not recoverable errors.
///
/// A `&dyn Record` is only handed out by
/// [`RecordCursor::next`](crate::RecordCursor::next) and borrows the
/// cursor, so it cannot outlive the row it points at.
pub trait Record {
	fn get_bool(&self, _col: usize) -> bool {
		unsupported("bool")
	}

	fn get_byte(&self, _col: usize) -> i8 {
		unsupported("byte")
	}

	fn get_short(&self, _col: usize) -> i16 {
		unsupported("short")
	}

	fn get_int(&self, _col: usize) -> i32 {
		unsupported("int")
	}

	fn get_long(&self, _col: usize) -> i64 {
		unsupported("long")
	}

	fn get_float(&self, _col: usize) -> f32 {
		unsupported("float")
	}

	fn get_double(&self, _col: usize) -> f64 {
		unsupported("double")
	}

	/// Milliseconds since epoch, or [`basalt_type::null::DATE`].
	fn get_date(&self, _col: usize) -> i64 {
		unsupported("date")
	}

	/// Microseconds since epoch, or [`basalt_type::null::TIMESTAMP`].
	fn get_timestamp(&self, _col: usize) -> i64 {
		unsupported("timestamp")
	}

	/// Text of a `str` or `varchar` column; both kinds share this seam.
	fn get_str(&self, _col: usize) -> Option<&str> {
		unsupported("str")
	}

	/// Resolved label of a `symbol` column.
	fn get_sym(&self, _col: usize) -> Option<&str> {
		unsupported("symbol")
	}

	fn get_bin(&self, _col: usize) -> Option<&[u8]> {
		unsupported("binary")
	}
}

fn unsupported(kind: &str) -> ! {
	panic!("record does not support {kind} access")
}

#[cfg(test)]
mod tests {
	use super::*;

	struct IntOnly;

	impl Record for IntOnly {
		fn get_int(&self, _col: usize) -> i32 {
			42
		}
	}

	#[test]
	fn test_overridden_getter() {
		assert_eq!(IntOnly.get_int(0), 42);
	}

	#[test]
	#[should_panic(expected = "record does not support str access")]
	fn test_default_getter_panics() {
		IntOnly.get_str(0);
	}
}
