// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::sync::Arc;

use basalt_core::Record;
use basalt_type::Type;

use crate::{
	FunctionError, Result,
	function::{Function, FunctionArgs, FunctionRef, constants::BoolConstant},
	plan::PlanSink,
	registry::{FunctionFactory, Param, Signature},
};

/// `starts_with(haystack, prefix) -> boolean`
///
/// True when `haystack` begins with `prefix`. Boolean has no null, so
/// a null in either operand evaluates to false; a constant null prefix
/// folds the whole call to the shared false constant.
pub struct StartsWithFunctionFactory;

impl FunctionFactory for StartsWithFunctionFactory {
	fn signature(&self) -> Signature {
		Signature::new("starts_with", &[Param::Text, Param::Text])
	}

	fn new_instance(&self, args: Vec<FunctionRef>) -> Result<FunctionRef> {
		let [haystack, prefix] = match <[FunctionRef; 2]>::try_from(args) {
			Ok(args) => args,
			Err(args) => {
				return Err(FunctionError::ArityMismatch {
					function: "starts_with",
					expected: 2,
					actual: args.len(),
				});
			}
		};
		if prefix.is_constant() {
			return Ok(match prefix.get_str(None) {
				None => BoolConstant::new(false),
				Some(text) => {
					let prefix = text.to_string();
					Arc::new(StartsWithConstFunction { haystack, prefix })
				}
			});
		}
		Ok(Arc::new(StartsWithFunction { haystack, prefix }))
	}
}

struct StartsWithFunction {
	haystack: FunctionRef,
	prefix: FunctionRef,
}

impl Function for StartsWithFunction {
	fn name(&self) -> &'static str {
		"starts_with"
	}

	fn return_type(&self) -> Type {
		Type::Boolean
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::Binary { left: &self.haystack, right: &self.prefix }
	}

	fn get_bool(&self, record: Option<&dyn Record>) -> bool {
		let Some(haystack) = self.haystack.get_str(record) else {
			return false;
		};
		let Some(prefix) = self.prefix.get_str(record) else {
			return false;
		};
		haystack.starts_with(prefix)
	}
}

struct StartsWithConstFunction {
	haystack: FunctionRef,
	prefix: String,
}

impl Function for StartsWithConstFunction {
	fn name(&self) -> &'static str {
		"starts_with"
	}

	fn return_type(&self) -> Type {
		Type::Boolean
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::Unary(&self.haystack)
	}

	fn get_bool(&self, record: Option<&dyn Record>) -> bool {
		self.haystack.get_str(record).is_some_and(|haystack| haystack.starts_with(&self.prefix))
	}

	fn plan(&self, sink: &mut PlanSink<'_>) {
		sink.push("starts_with(");
		self.haystack.plan(sink);
		sink.push(",'");
		sink.push(&self.prefix);
		sink.push("')");
	}
}

#[cfg(test)]
mod tests {
	use basalt_core::{Column, ColumnData, RecordSource, Table};

	use super::*;
	use crate::function::{columns::StrColumn, constants::StrConstant};

	#[test]
	fn test_constant_prefix() {
		let table = Table::new(vec![Column::new(
			"text",
			ColumnData::Str(vec![Some("eurusd".into()), Some("gbpusd".into()), None]),
		)]);
		let function = StartsWithFunctionFactory
			.new_instance(vec![StrColumn::new(0), StrConstant::new("eur")])
			.unwrap();
		assert!(matches!(function.args(), FunctionArgs::Unary(_)));

		let mut cursor = table.prepare_cursor(None).unwrap();
		let mut seen = Vec::new();
		while cursor.has_next() {
			seen.push(function.get_bool(Some(cursor.next())));
		}
		assert_eq!(seen, vec![true, false, false]);
	}

	#[test]
	fn test_null_prefix_folds_to_false() {
		let function = StartsWithFunctionFactory
			.new_instance(vec![StrColumn::new(0), StrConstant::null()])
			.unwrap();
		assert!(Arc::ptr_eq(&function, &BoolConstant::new(false)));
		assert!(!function.get_bool(None));
	}

	#[test]
	fn test_empty_prefix_always_matches() {
		let function = StartsWithFunctionFactory
			.new_instance(vec![StrConstant::new("anything"), StrConstant::new("")])
			.unwrap();
		assert!(function.get_bool(None));
	}

	#[test]
	fn test_variable_prefix() {
		let table = Table::new(vec![
			Column::new("a", ColumnData::Str(vec![Some("eurusd".into()), Some("eurusd".into())])),
			Column::new("b", ColumnData::Str(vec![Some("eur".into()), None])),
		]);
		let function = StartsWithFunctionFactory
			.new_instance(vec![StrColumn::new(0), StrColumn::new(1)])
			.unwrap();
		assert!(matches!(function.args(), FunctionArgs::Binary { .. }));

		let mut cursor = table.prepare_cursor(None).unwrap();
		assert!(cursor.has_next());
		assert!(function.get_bool(Some(cursor.next())));
		assert!(cursor.has_next());
		assert!(!function.get_bool(Some(cursor.next())));
	}

	#[test]
	fn test_wrong_arity() {
		let err = StartsWithFunctionFactory.new_instance(vec![StrColumn::new(0)]).err().unwrap();
		assert!(matches!(err, FunctionError::ArityMismatch { function: "starts_with", .. }));
	}
}
