// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::{ops::Deref, sync::Arc};

use basalt_type::Type;

use crate::{
	Column, ColumnMeta, Record, RecordCursor, RecordMetadata, RecordSource, Result, SourceResolver,
	catalog::{ReaderLease, TableReader},
	column::{ColumnData, SYMBOL_NULL_KEY},
};

#[derive(Debug)]
pub struct TableInner {
	metadata: RecordMetadata,
	columns: Vec<Column>,
	row_count: usize,
}

impl TableInner {
	pub fn metadata(&self) -> &RecordMetadata {
		&self.metadata
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}
}

/// An in-memory columnar table. Cheap to clone; the data is shared.
///
/// A table is its own [`RecordSource`]: preparing a cursor needs no
/// resolver and the resolver argument is ignored.
#[derive(Debug, Clone)]
pub struct Table(Arc<TableInner>);

impl Deref for Table {
	type Target = TableInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Table {
	/// Panics unless all columns have the same length.
	pub fn new(columns: Vec<Column>) -> Self {
		let row_count = columns.first().map_or(0, |column| column.data().len());
		assert!(
			columns.iter().all(|column| column.data().len() == row_count),
			"all columns must have the same length"
		);
		let metadata = RecordMetadata::new(
			columns.iter().map(|column| ColumnMeta::new(column.name(), column.data().ty())).collect(),
		);
		Self(Arc::new(TableInner { metadata, columns, row_count }))
	}
}

impl RecordSource for Table {
	fn prepare_cursor(&self, _resolver: Option<&dyn SourceResolver>) -> Result<Box<dyn RecordCursor>> {
		Ok(Box::new(TableCursor::new(self.clone())))
	}
}

enum CursorState {
	/// Awaiting a `has_next` probe.
	Idle,
	/// `has_next` answered true; the probed row is pending.
	Ready,
	Exhausted,
}

/// Cursor over a [`Table`]. It is also the [`Record`]: `next` hands out
/// a borrow of the cursor itself positioned on the probed row.
pub struct TableCursor {
	table: Table,
	_lease: Option<ReaderLease>,
	state: CursorState,
	next_row: usize,
	current: usize,
}

impl TableCursor {
	pub(crate) fn new(table: Table) -> Self {
		Self { table, _lease: None, state: CursorState::Idle, next_row: 0, current: 0 }
	}

	pub(crate) fn from_reader(reader: TableReader) -> Self {
		let (table, lease) = reader.into_parts();
		let mut cursor = Self::new(table);
		cursor._lease = Some(lease);
		cursor
	}

	fn column_data(&self, col: usize) -> &ColumnData {
		self.table.columns()[col].data()
	}
}

impl RecordCursor for TableCursor {
	fn metadata(&self) -> &RecordMetadata {
		self.table.metadata()
	}

	fn has_next(&mut self) -> bool {
		match self.state {
			CursorState::Ready => true,
			CursorState::Exhausted => false,
			CursorState::Idle => {
				if self.next_row < self.table.row_count() {
					self.state = CursorState::Ready;
					true
				} else {
					self.state = CursorState::Exhausted;
					false
				}
			}
		}
	}

	fn next(&mut self) -> &dyn Record {
		match self.state {
			CursorState::Ready => {
				self.current = self.next_row;
				self.next_row += 1;
				self.state = CursorState::Idle;
				self
			}
			CursorState::Idle => {
				panic!("cursor protocol violation: next() requires a has_next() that returned true")
			}
			CursorState::Exhausted => panic!("cursor protocol violation: next() after exhaustion"),
		}
	}
}

impl Record for TableCursor {
	fn get_bool(&self, col: usize) -> bool {
		match self.column_data(col) {
			ColumnData::Bool(values) => values[self.current],
			other => kind_mismatch(col, other.ty(), "bool"),
		}
	}

	fn get_byte(&self, col: usize) -> i8 {
		match self.column_data(col) {
			ColumnData::Byte(values) => values[self.current],
			other => kind_mismatch(col, other.ty(), "byte"),
		}
	}

	fn get_short(&self, col: usize) -> i16 {
		match self.column_data(col) {
			ColumnData::Short(values) => values[self.current],
			other => kind_mismatch(col, other.ty(), "short"),
		}
	}

	fn get_int(&self, col: usize) -> i32 {
		match self.column_data(col) {
			ColumnData::Int(values) => values[self.current],
			other => kind_mismatch(col, other.ty(), "int"),
		}
	}

	fn get_long(&self, col: usize) -> i64 {
		match self.column_data(col) {
			ColumnData::Long(values) => values[self.current],
			other => kind_mismatch(col, other.ty(), "long"),
		}
	}

	fn get_float(&self, col: usize) -> f32 {
		match self.column_data(col) {
			ColumnData::Float(values) => values[self.current],
			other => kind_mismatch(col, other.ty(), "float"),
		}
	}

	fn get_double(&self, col: usize) -> f64 {
		match self.column_data(col) {
			ColumnData::Double(values) => values[self.current],
			other => kind_mismatch(col, other.ty(), "double"),
		}
	}

	fn get_date(&self, col: usize) -> i64 {
		match self.column_data(col) {
			ColumnData::Date(values) => values[self.current],
			other => kind_mismatch(col, other.ty(), "date"),
		}
	}

	fn get_timestamp(&self, col: usize) -> i64 {
		match self.column_data(col) {
			ColumnData::Timestamp(values) => values[self.current],
			other => kind_mismatch(col, other.ty(), "timestamp"),
		}
	}

	fn get_str(&self, col: usize) -> Option<&str> {
		match self.column_data(col) {
			ColumnData::Str(values) | ColumnData::Varchar(values) => values[self.current].as_deref(),
			other => kind_mismatch(col, other.ty(), "str"),
		}
	}

	fn get_sym(&self, col: usize) -> Option<&str> {
		match self.column_data(col) {
			ColumnData::Symbol { keys, labels } => {
				let key = keys[self.current];
				if key == SYMBOL_NULL_KEY {
					None
				} else {
					Some(labels[key as usize].as_str())
				}
			}
			other => kind_mismatch(col, other.ty(), "symbol"),
		}
	}

	fn get_bin(&self, col: usize) -> Option<&[u8]> {
		match self.column_data(col) {
			ColumnData::Binary(values) => values[self.current].as_deref(),
			other => kind_mismatch(col, other.ty(), "binary"),
		}
	}
}

fn kind_mismatch(col: usize, actual: Type, requested: &str) -> ! {
	panic!("column {col} is {actual}, not {requested}")
}
