// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

//! Row model, cursor protocol and tabular serialization.
//!
//! Data flows as streams of positional records: a [`RecordSource`]
//! prepares a [`RecordCursor`], the cursor lazily yields [`Record`]s,
//! and [`SourcePrinter`] renders them as delimited text. Backing data
//! lives in columnar [`Table`]s, resolved by name through a
//! [`Catalog`] that leases readers and counts them.

mod catalog;
mod column;
mod cursor;
mod error;
mod print;
mod record;
mod source;
mod table;

pub use catalog::{Catalog, TableReader};
pub use column::{Column, ColumnData};
pub use cursor::RecordCursor;
pub use error::{Error, Result};
pub use print::SourcePrinter;
pub use record::{ColumnMeta, Record, RecordMetadata};
pub use source::{RecordSource, ScanSource, SourceResolver};
pub use table::{Table, TableCursor};
