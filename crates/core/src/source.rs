// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use crate::{Error, RecordCursor, Result, TableCursor, catalog::TableReader};

/// Anything that can produce a stream of records.
///
/// Preparation is the only step that fails; iteration afterwards does
/// not. A source may be prepared any number of times and every cursor
/// starts again from the first row.
pub trait RecordSource {
	fn prepare_cursor(&self, resolver: Option<&dyn SourceResolver>) -> Result<Box<dyn RecordCursor>>;
}

/// Resolves source names to readers over backing data.
///
/// The reader carries a lease on the underlying storage; dropping the
/// cursor built from it releases the lease.
pub trait SourceResolver {
	fn open(&self, name: &str) -> Result<TableReader>;
}

/// A scan of a named table, resolved at preparation time.
#[derive(Debug, Clone)]
pub struct ScanSource {
	name: String,
}

impl ScanSource {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl RecordSource for ScanSource {
	fn prepare_cursor(&self, resolver: Option<&dyn SourceResolver>) -> Result<Box<dyn RecordCursor>> {
		let resolver = resolver.ok_or_else(|| Error::ResolverRequired { name: self.name.clone() })?;
		let reader = resolver.open(&self.name)?;
		Ok(Box::new(TableCursor::from_reader(reader)))
	}
}
