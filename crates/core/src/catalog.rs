// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::{
	collections::HashMap,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};

use tracing::instrument;

use crate::{Error, Result, SourceResolver, Table};

/// Named tables plus the bookkeeping of who is reading them.
///
/// The catalog is the default [`SourceResolver`]: opening a source by
/// name hands out a [`TableReader`] holding a lease, and the lease is
/// released when whatever was built on the reader is dropped. The
/// open-reader count is observable for tests and shutdown checks.
pub struct Catalog {
	tables: HashMap<String, Table>,
	open_readers: Arc<AtomicUsize>,
}

impl Catalog {
	pub fn new() -> Self {
		Self { tables: HashMap::new(), open_readers: Arc::new(AtomicUsize::new(0)) }
	}

	pub fn add(&mut self, name: impl Into<String>, table: Table) {
		self.tables.insert(name.into(), table);
	}

	pub fn get(&self, name: &str) -> Option<&Table> {
		self.tables.get(name)
	}

	pub fn open_readers(&self) -> usize {
		self.open_readers.load(Ordering::SeqCst)
	}
}

impl Default for Catalog {
	fn default() -> Self {
		Self::new()
	}
}

impl SourceResolver for Catalog {
	#[instrument(name = "catalog::open", level = "trace", skip(self))]
	fn open(&self, name: &str) -> Result<TableReader> {
		let table = self
			.tables
			.get(name)
			.cloned()
			.ok_or_else(|| Error::SourceNotFound { name: name.to_string() })?;
		Ok(TableReader { table, lease: ReaderLease::acquire(Arc::clone(&self.open_readers)) })
	}
}

/// A leased handle on a cataloged table.
pub struct TableReader {
	pub(crate) table: Table,
	pub(crate) lease: ReaderLease,
}

impl TableReader {
	pub fn table(&self) -> &Table {
		&self.table
	}

	pub(crate) fn into_parts(self) -> (Table, ReaderLease) {
		(self.table, self.lease)
	}
}

/// Decrements the owning catalog's open-reader count exactly once, on
/// drop.
pub(crate) struct ReaderLease {
	counter: Arc<AtomicUsize>,
}

impl ReaderLease {
	fn acquire(counter: Arc<AtomicUsize>) -> Self {
		counter.fetch_add(1, Ordering::SeqCst);
		Self { counter }
	}
}

impl Drop for ReaderLease {
	fn drop(&mut self) {
		self.counter.fetch_sub(1, Ordering::SeqCst);
	}
}
