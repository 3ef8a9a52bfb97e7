// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use crate::{Record, RecordMetadata};

/// Forward-only row iteration.
///
/// The protocol has three states: not-started, has-current and
/// exhausted.
///
/// - [`has_next`](RecordCursor::has_next) probes for the next row. It
///   is idempotent: repeated calls without an intervening
///   [`next`](RecordCursor::next) answer the same and advance nothing.
/// - [`next`](RecordCursor::next) is legal only after a `has_next` that
///   returned `true`. It yields the row and leaves the cursor awaiting
///   a fresh probe. Any other call order is a defect and panics with a
///   message starting `cursor protocol violation`.
/// - Once `has_next` has returned `false` the cursor is exhausted for
///   good.
///
/// Rows materialize lazily; nothing is read ahead of the probe. The
/// `&dyn Record` returned by `next` borrows the cursor mutably, so it
/// expires at the next protocol call.
pub trait RecordCursor {
	/// Column layout of every row this cursor yields. Stable for the
	/// cursor's lifetime; resolve positions once.
	fn metadata(&self) -> &RecordMetadata;

	fn has_next(&mut self) -> bool;

	fn next(&mut self) -> &dyn Record;
}
