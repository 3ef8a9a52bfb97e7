// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::sync::Arc;

use basalt_core::Record;
use basalt_type::Type;

use crate::{
	FunctionError, Result,
	function::{Function, FunctionArgs, FunctionRef, constants::StrConstant},
	registry::{FunctionFactory, Param, Signature},
};

/// `coalesce(text, ...) -> str`
///
/// First non-null argument, evaluated left to right; one argument at
/// least. Folding happens at construction: constant nulls can never
/// win and are dropped, and a constant non-null ends the search, so
/// everything after it is unreachable and dropped too. What remains
/// collapses to a single argument or a constant where possible.
pub struct CoalesceFunctionFactory;

impl FunctionFactory for CoalesceFunctionFactory {
	fn signature(&self) -> Signature {
		Signature::variadic("coalesce", &[Param::Text])
	}

	fn new_instance(&self, args: Vec<FunctionRef>) -> Result<FunctionRef> {
		if args.is_empty() {
			return Err(FunctionError::ArityMismatch { function: "coalesce", expected: 1, actual: 0 });
		}
		let mut survivors = Vec::with_capacity(args.len());
		for arg in args {
			let constant = arg.is_constant();
			if constant && arg.get_str(None).is_none() {
				continue;
			}
			survivors.push(arg);
			if constant {
				break;
			}
		}
		if survivors.len() == 1 {
			return Ok(survivors.remove(0));
		}
		if survivors.is_empty() {
			return Ok(StrConstant::null());
		}
		Ok(Arc::new(CoalesceFunction { args: survivors }))
	}
}

struct CoalesceFunction {
	args: Vec<FunctionRef>,
}

impl Function for CoalesceFunction {
	fn name(&self) -> &'static str {
		"coalesce"
	}

	fn return_type(&self) -> Type {
		Type::Str
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::Nary(&self.args)
	}

	fn get_str<'a>(&'a self, record: Option<&'a dyn Record>) -> Option<&'a str> {
		self.args.iter().find_map(|arg| arg.get_str(record))
	}
}

#[cfg(test)]
mod tests {
	use basalt_core::{Column, ColumnData, RecordSource, Table};

	use super::*;
	use crate::function::columns::{StrColumn, SymbolColumn};

	#[test]
	fn test_empty_args_rejected() {
		let err = CoalesceFunctionFactory.new_instance(vec![]).err().unwrap();
		assert!(matches!(err, FunctionError::ArityMismatch { function: "coalesce", .. }));
	}

	#[test]
	fn test_constant_nulls_are_dropped() {
		let function = CoalesceFunctionFactory
			.new_instance(vec![StrConstant::null(), StrConstant::null(), StrConstant::new("fallback")])
			.unwrap();
		// Everything folded away down to the one constant.
		assert!(function.is_constant());
		assert!(matches!(function.args(), FunctionArgs::None));
		assert_eq!(function.get_str(None), Some("fallback"));
	}

	#[test]
	fn test_all_null_folds_to_null_constant() {
		let function = CoalesceFunctionFactory
			.new_instance(vec![StrConstant::null(), StrConstant::null()])
			.unwrap();
		assert!(Arc::ptr_eq(&function, &StrConstant::null()));
	}

	#[test]
	fn test_single_survivor_is_returned_directly() {
		let function = CoalesceFunctionFactory
			.new_instance(vec![StrConstant::null(), StrColumn::new(2)])
			.unwrap();
		assert_eq!(function.column_ordinal(), Some(2));
	}

	#[test]
	fn test_constant_cuts_off_later_args() {
		let function = CoalesceFunctionFactory
			.new_instance(vec![StrColumn::new(0), StrConstant::new("stop"), StrColumn::new(1)])
			.unwrap();
		match function.args() {
			FunctionArgs::Nary(args) => assert_eq!(args.len(), 2),
			_ => panic!("expected the n-ary shape"),
		}
	}

	#[test]
	fn test_evaluation_takes_first_non_null() {
		let table = Table::new(vec![
			Column::new("sym", ColumnData::symbol(vec![Some("eur"), None, None])),
			Column::new("name", ColumnData::Str(vec![None, Some("gbp".into()), None])),
		]);
		let function = CoalesceFunctionFactory
			.new_instance(vec![SymbolColumn::new(0), StrColumn::new(1), StrConstant::new("n/a")])
			.unwrap();

		let mut cursor = table.prepare_cursor(None).unwrap();
		let mut seen = Vec::new();
		while cursor.has_next() {
			seen.push(function.get_str(Some(cursor.next())).map(str::to_string));
		}
		assert_eq!(
			seen,
			vec![Some("eur".to_string()), Some("gbp".to_string()), Some("n/a".to_string())]
		);
	}
}
