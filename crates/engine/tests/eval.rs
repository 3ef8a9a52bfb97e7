// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use basalt_core::{Catalog, Column, ColumnData, Record, RecordSource, ScanSource, Table};
use basalt_engine::{
	Function, FunctionArgs, FunctionRef, FunctionRegistry, IntConstant, StrColumn, StrConstant, SymbolColumn, plan,
	referenced_columns,
};
use basalt_type::{Type, null};

/// Constant text evaluator that counts how often it is asked for its
/// value.
struct CountingStr {
	value: String,
	calls: AtomicUsize,
}

impl CountingStr {
	fn new(value: &str) -> Arc<Self> {
		Arc::new(Self { value: value.to_string(), calls: AtomicUsize::new(0) })
	}
}

impl Function for CountingStr {
	fn name(&self) -> &'static str {
		"counting"
	}

	fn return_type(&self) -> Type {
		Type::Str
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::None
	}

	fn is_constant(&self) -> bool {
		true
	}

	fn get_str<'a>(&'a self, _record: Option<&'a dyn Record>) -> Option<&'a str> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Some(&self.value)
	}
}

#[test]
fn test_constant_needle_is_evaluated_exactly_once() {
	let counting = CountingStr::new("world");
	let needle: FunctionRef = counting.clone();

	let registry = FunctionRegistry::with_builtins();
	let function = registry.build("strpos", vec![StrColumn::new(0), needle]).unwrap();
	assert_eq!(counting.calls.load(Ordering::SeqCst), 1);

	let table = Table::new(vec![Column::new(
		"text",
		ColumnData::Str(vec![Some("hello world".into()), Some("worldwide".into()), None]),
	)]);
	let mut cursor = table.prepare_cursor(None).unwrap();
	let mut seen = Vec::new();
	while cursor.has_next() {
		seen.push(function.get_int(Some(cursor.next())));
	}
	assert_eq!(seen, vec![7, 1, null::INT]);

	// Three rows evaluated; the needle was still resolved only at
	// construction time.
	assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_constant_null_needle_never_builds_the_general_shape() {
	let counting = CountingStr::new("ignored");
	let haystack: FunctionRef = counting.clone();

	let registry = FunctionRegistry::with_builtins();
	let function = registry.build("strpos", vec![haystack, StrConstant::null()]).unwrap();

	assert!(Arc::ptr_eq(&function, &IntConstant::null()));
	assert_eq!(function.get_int(None), null::INT);
	// The haystack argument was discarded without ever being evaluated.
	assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_scan_build_evaluate_pipeline() {
	let mut catalog = Catalog::new();
	catalog.add(
		"trades",
		Table::new(vec![
			Column::new("sym", ColumnData::symbol(vec![Some("eurusd"), Some("gbpusd"), None])),
			Column::new("note", ColumnData::Str(vec![None, Some("fast".into()), Some("late".into())])),
		]),
	);

	let registry = FunctionRegistry::with_builtins();
	let strpos = registry.build("strpos", vec![SymbolColumn::new(0), StrConstant::new("usd")]).unwrap();
	let label = registry.build("coalesce", vec![StrColumn::new(1), StrConstant::new("-")]).unwrap();

	let source = ScanSource::new("trades");
	let mut cursor = source.prepare_cursor(Some(&catalog)).unwrap();
	let mut positions = Vec::new();
	let mut labels = Vec::new();
	while cursor.has_next() {
		let record = cursor.next();
		positions.push(strpos.get_int(Some(record)));
		labels.push(label.get_str(Some(record)).map(str::to_string));
	}

	assert_eq!(positions, vec![4, 4, null::INT]);
	assert_eq!(labels, vec![Some("-".to_string()), Some("fast".to_string()), Some("late".to_string())]);

	drop(cursor);
	assert_eq!(catalog.open_readers(), 0);
}

#[test]
fn test_plan_strings_against_scan_metadata() {
	let table = Table::new(vec![
		Column::new("sym", ColumnData::symbol(vec![Some("eurusd")])),
		Column::new("note", ColumnData::Str(vec![Some("x".into())])),
	]);

	let registry = FunctionRegistry::with_builtins();
	let function = registry.build("strpos", vec![SymbolColumn::new(0), StrConstant::new("usd")]).unwrap();

	assert_eq!(plan(function.as_ref(), Some(table.metadata())), "strpos(sym,'usd')");
	assert_eq!(referenced_columns(function.as_ref()), vec![0]);
}

#[test]
fn test_registry_rejects_what_no_signature_covers() {
	let registry = FunctionRegistry::with_builtins();

	let err = registry.build("strpos", vec![IntConstant::new(3), StrConstant::new("x")]).err().unwrap();
	assert_eq!(err.to_string(), "no function matches strpos(int,str)");

	let err = registry.build("upper", vec![StrConstant::new("x")]).err().unwrap();
	assert_eq!(err.to_string(), "no function matches upper(str)");
}
