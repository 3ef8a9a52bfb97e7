// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::sync::Arc;

use basalt_core::Record;
use basalt_type::{Type, null};

use crate::{
	FunctionError, Result,
	function::{Function, FunctionArgs, FunctionRef, constants::IntConstant},
	plan::PlanSink,
	registry::{FunctionFactory, Param, Signature},
};

/// `strpos(haystack, needle) -> int`
///
/// 1-based byte position of the first occurrence of `needle` in
/// `haystack`, 0 when absent. An empty needle matches at position 1.
/// Null in either operand yields the null int.
///
/// A constant needle is evaluated once here and hoisted into a
/// specialized evaluator; a constant null needle short-circuits the
/// whole call to the shared null constant.
pub struct StrPosFunctionFactory;

impl FunctionFactory for StrPosFunctionFactory {
	fn signature(&self) -> Signature {
		Signature::new("strpos", &[Param::Text, Param::Text])
	}

	fn new_instance(&self, args: Vec<FunctionRef>) -> Result<FunctionRef> {
		let [haystack, needle] = match <[FunctionRef; 2]>::try_from(args) {
			Ok(args) => args,
			Err(args) => {
				return Err(FunctionError::ArityMismatch {
					function: "strpos",
					expected: 2,
					actual: args.len(),
				});
			}
		};
		if needle.is_constant() {
			return Ok(match needle.get_str(None) {
				None => IntConstant::null(),
				Some(text) => {
					let needle = text.to_string();
					Arc::new(StrPosConstFunction { haystack, needle })
				}
			});
		}
		Ok(Arc::new(StrPosFunction { haystack, needle }))
	}
}

fn strpos(haystack: &str, needle: &str) -> i32 {
	if needle.is_empty() {
		return 1;
	}
	match haystack.find(needle) {
		Some(at) => at as i32 + 1,
		None => 0,
	}
}

struct StrPosFunction {
	haystack: FunctionRef,
	needle: FunctionRef,
}

impl Function for StrPosFunction {
	fn name(&self) -> &'static str {
		"strpos"
	}

	fn return_type(&self) -> Type {
		Type::Int
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::Binary { left: &self.haystack, right: &self.needle }
	}

	fn get_int(&self, record: Option<&dyn Record>) -> i32 {
		let Some(haystack) = self.haystack.get_str(record) else {
			return null::INT;
		};
		let Some(needle) = self.needle.get_str(record) else {
			return null::INT;
		};
		strpos(haystack, needle)
	}
}

struct StrPosConstFunction {
	haystack: FunctionRef,
	needle: String,
}

impl Function for StrPosConstFunction {
	fn name(&self) -> &'static str {
		"strpos"
	}

	fn return_type(&self) -> Type {
		Type::Int
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::Unary(&self.haystack)
	}

	fn get_int(&self, record: Option<&dyn Record>) -> i32 {
		match self.haystack.get_str(record) {
			Some(haystack) => strpos(haystack, &self.needle),
			None => null::INT,
		}
	}

	fn plan(&self, sink: &mut PlanSink<'_>) {
		sink.push("strpos(");
		self.haystack.plan(sink);
		sink.push(",'");
		sink.push(&self.needle);
		sink.push("')");
	}
}
