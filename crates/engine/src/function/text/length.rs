// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::sync::Arc;

use basalt_core::Record;
use basalt_type::{Type, null};

use crate::{
	FunctionError, Result,
	function::{Function, FunctionArgs, FunctionRef},
	registry::{FunctionFactory, Param, Signature},
};

/// `length(text) -> int`
///
/// Byte length of the text, the same unit `strpos` positions are
/// measured in. Null text yields the null int.
pub struct LengthFunctionFactory;

impl FunctionFactory for LengthFunctionFactory {
	fn signature(&self) -> Signature {
		Signature::new("length", &[Param::Text])
	}

	fn new_instance(&self, args: Vec<FunctionRef>) -> Result<FunctionRef> {
		match <[FunctionRef; 1]>::try_from(args) {
			Ok([arg]) => Ok(Arc::new(LengthFunction { arg })),
			Err(args) => Err(FunctionError::ArityMismatch {
				function: "length",
				expected: 1,
				actual: args.len(),
			}),
		}
	}
}

struct LengthFunction {
	arg: FunctionRef,
}

impl Function for LengthFunction {
	fn name(&self) -> &'static str {
		"length"
	}

	fn return_type(&self) -> Type {
		Type::Int
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::Unary(&self.arg)
	}

	fn get_int(&self, record: Option<&dyn Record>) -> i32 {
		match self.arg.get_str(record) {
			Some(text) => text.len() as i32,
			None => null::INT,
		}
	}
}

#[cfg(test)]
mod tests {
	use basalt_core::{Column, ColumnData, RecordSource, Table};

	use super::*;
	use crate::function::{columns::SymbolColumn, constants::StrConstant};

	#[test]
	fn test_length_in_bytes() {
		let function = LengthFunctionFactory.new_instance(vec![StrConstant::new("hello")]).unwrap();
		assert_eq!(function.get_int(None), 5);

		// 'é' is two bytes.
		let function = LengthFunctionFactory.new_instance(vec![StrConstant::new("héllo")]).unwrap();
		assert_eq!(function.get_int(None), 6);
	}

	#[test]
	fn test_length_of_null() {
		let function = LengthFunctionFactory.new_instance(vec![StrConstant::null()]).unwrap();
		assert_eq!(function.get_int(None), null::INT);
	}

	#[test]
	fn test_length_of_empty() {
		let function = LengthFunctionFactory.new_instance(vec![StrConstant::new("")]).unwrap();
		assert_eq!(function.get_int(None), 0);
	}

	#[test]
	fn test_length_over_symbol_column() {
		let table = Table::new(vec![Column::new(
			"sym",
			ColumnData::symbol(vec![Some("eur"), None, Some("usdt")]),
		)]);
		let function = LengthFunctionFactory.new_instance(vec![SymbolColumn::new(0)]).unwrap();

		let mut cursor = table.prepare_cursor(None).unwrap();
		let mut seen = Vec::new();
		while cursor.has_next() {
			seen.push(function.get_int(Some(cursor.next())));
		}
		assert_eq!(seen, vec![3, null::INT, 4]);
	}

	#[test]
	fn test_wrong_arity() {
		let err = LengthFunctionFactory.new_instance(vec![]).err().unwrap();
		assert!(matches!(
			err,
			FunctionError::ArityMismatch { function: "length", expected: 1, actual: 0 }
		));
	}
}
