// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::io::Write;

use basalt_type::{Date, Timestamp, Type, null};

use crate::{Record, RecordCursor, RecordMetadata, RecordSource, Result, SourceResolver};

/// Renders record streams as delimited text.
///
/// One line per row, values separated by the delimiter (tab unless
/// configured otherwise), `\n` line endings. The sink is flushed after
/// every row and only after rows; a header line waits for the first
/// row's flush.
///
/// Nulls of every kind render as the empty string. Kinds with no text
/// rendering (`binary`) are silently omitted: their delimiter slot is
/// kept so the row shape stays intact, but nothing is written and no
/// error is raised.
pub struct SourcePrinter<W: Write> {
	sink: W,
	delimiter: char,
}

impl<W: Write> SourcePrinter<W> {
	pub fn new(sink: W) -> Self {
		Self::with_delimiter(sink, '\t')
	}

	pub fn with_delimiter(sink: W, delimiter: char) -> Self {
		Self { sink, delimiter }
	}

	/// Renders one row and flushes.
	pub fn print(&mut self, record: &dyn Record, metadata: &RecordMetadata) -> Result<()> {
		for index in 0..metadata.column_count() {
			if index > 0 {
				write!(self.sink, "{}", self.delimiter)?;
			}
			self.print_column(record, metadata, index)?;
		}
		self.sink.write_all(b"\n")?;
		self.sink.flush()?;
		Ok(())
	}

	/// Prepares a cursor over `source` and prints every row, without a
	/// header. Preparation errors propagate.
	pub fn print_source(&mut self, source: &dyn RecordSource, resolver: Option<&dyn SourceResolver>) -> Result<()> {
		let mut cursor = source.prepare_cursor(resolver)?;
		self.print_cursor(cursor.as_mut(), false)
	}

	/// Drains `cursor`, optionally printing a header line first.
	pub fn print_cursor(&mut self, cursor: &mut dyn RecordCursor, with_header: bool) -> Result<()> {
		let metadata = cursor.metadata().clone();
		if with_header {
			self.print_header(&metadata)?;
		}
		while cursor.has_next() {
			self.print(cursor.next(), &metadata)?;
		}
		Ok(())
	}

	/// Prints all column names on one line. Does not flush.
	pub fn print_header(&mut self, metadata: &RecordMetadata) -> Result<()> {
		for (index, column) in metadata.columns().iter().enumerate() {
			if index > 0 {
				write!(self.sink, "{}", self.delimiter)?;
			}
			self.sink.write_all(column.name().as_bytes())?;
		}
		self.sink.write_all(b"\n")?;
		Ok(())
	}

	fn print_column(&mut self, record: &dyn Record, metadata: &RecordMetadata, index: usize) -> Result<()> {
		match metadata.column(index).ty() {
			Type::Boolean => write!(self.sink, "{}", record.get_bool(index))?,
			Type::Byte => {
				let value = record.get_byte(index);
				if value != null::BYTE {
					write!(self.sink, "{value}")?;
				}
			}
			Type::Short => {
				let value = record.get_short(index);
				if value != null::SHORT {
					write!(self.sink, "{value}")?;
				}
			}
			Type::Int => {
				let value = record.get_int(index);
				if value != null::INT {
					write!(self.sink, "{value}")?;
				}
			}
			Type::Long => {
				let value = record.get_long(index);
				if value != null::LONG {
					write!(self.sink, "{value}")?;
				}
			}
			Type::Float => {
				let value = record.get_float(index);
				if !null::is_null_float(value) {
					write!(self.sink, "{value:.4}")?;
				}
			}
			Type::Double => {
				let value = record.get_double(index);
				if !null::is_null_double(value) {
					write!(self.sink, "{value:.12}")?;
				}
			}
			Type::Date => {
				let value = record.get_date(index);
				if value != null::DATE {
					write!(self.sink, "{}", Date::from_millis(value))?;
				}
			}
			Type::Timestamp => {
				let value = record.get_timestamp(index);
				if value != null::TIMESTAMP {
					write!(self.sink, "{}", Timestamp::from_micros(value))?;
				}
			}
			Type::Str | Type::Varchar => {
				if let Some(value) = record.get_str(index) {
					self.sink.write_all(value.as_bytes())?;
				}
			}
			Type::Symbol => {
				if let Some(value) = record.get_sym(index) {
					self.sink.write_all(value.as_bytes())?;
				}
			}
			// No text rendering; the delimiter slot stays empty.
			Type::Binary => {}
		}
		Ok(())
	}
}
