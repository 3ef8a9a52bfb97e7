// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::sync::Arc;

use basalt_core::Record;
use basalt_type::{Type, null};
use once_cell::sync::Lazy;

use crate::{
	function::{Function, FunctionArgs, FunctionRef},
	plan::PlanSink,
};

static NULL_INT: Lazy<FunctionRef> = Lazy::new(|| Arc::new(IntConstant { value: null::INT }));
static NULL_STR: Lazy<FunctionRef> = Lazy::new(|| Arc::new(StrConstant { value: None }));
static TRUE: Lazy<FunctionRef> = Lazy::new(|| Arc::new(BoolConstant { value: true }));
static FALSE: Lazy<FunctionRef> = Lazy::new(|| Arc::new(BoolConstant { value: false }));

/// Constant `int` evaluator.
pub struct IntConstant {
	value: i32,
}

impl IntConstant {
	pub fn new(value: i32) -> FunctionRef {
		if value == null::INT {
			Self::null()
		} else {
			Arc::new(Self { value })
		}
	}

	/// The shared always-null evaluator folding paths return.
	pub fn null() -> FunctionRef {
		Arc::clone(&NULL_INT)
	}
}

impl Function for IntConstant {
	fn name(&self) -> &'static str {
		"int"
	}

	fn return_type(&self) -> Type {
		Type::Int
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::None
	}

	fn is_constant(&self) -> bool {
		true
	}

	fn get_int(&self, _record: Option<&dyn Record>) -> i32 {
		self.value
	}

	fn plan(&self, sink: &mut PlanSink<'_>) {
		if self.value == null::INT {
			sink.push("null");
		} else {
			sink.push(&self.value.to_string());
		}
	}
}

/// Constant text evaluator; `value` of `None` is the null text.
pub struct StrConstant {
	value: Option<String>,
}

impl StrConstant {
	pub fn new(value: impl Into<String>) -> FunctionRef {
		Arc::new(Self { value: Some(value.into()) })
	}

	pub fn null() -> FunctionRef {
		Arc::clone(&NULL_STR)
	}
}

impl Function for StrConstant {
	fn name(&self) -> &'static str {
		"str"
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
		self.value.as_deref()
	}

	fn plan(&self, sink: &mut PlanSink<'_>) {
		match &self.value {
			Some(value) => {
				sink.push("'");
				sink.push(value);
				sink.push("'");
			}
			None => sink.push("null"),
		}
	}
}

/// Constant `boolean` evaluator. Both values are shared singletons;
/// boolean has no null.
pub struct BoolConstant {
	value: bool,
}

impl BoolConstant {
	pub fn new(value: bool) -> FunctionRef {
		if value { Arc::clone(&TRUE) } else { Arc::clone(&FALSE) }
	}
}

impl Function for BoolConstant {
	fn name(&self) -> &'static str {
		"boolean"
	}

	fn return_type(&self) -> Type {
		Type::Boolean
	}

	fn args(&self) -> FunctionArgs<'_> {
		FunctionArgs::None
	}

	fn is_constant(&self) -> bool {
		true
	}

	fn get_bool(&self, _record: Option<&dyn Record>) -> bool {
		self.value
	}

	fn plan(&self, sink: &mut PlanSink<'_>) {
		sink.push(if self.value { "true" } else { "false" });
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::plan;

	#[test]
	fn test_int_constant_evaluates_without_record() {
		let constant = IntConstant::new(42);
		assert!(constant.is_constant());
		assert_eq!(constant.get_int(None), 42);
	}

	#[test]
	fn test_int_null_is_shared() {
		assert!(Arc::ptr_eq(&IntConstant::null(), &IntConstant::null()));
		assert!(Arc::ptr_eq(&IntConstant::new(null::INT), &IntConstant::null()));
		assert_eq!(IntConstant::null().get_int(None), null::INT);
	}

	#[test]
	fn test_str_constant() {
		let constant = StrConstant::new("abc");
		assert_eq!(constant.get_str(None), Some("abc"));
		assert_eq!(StrConstant::null().get_str(None), None);
		assert!(Arc::ptr_eq(&StrConstant::null(), &StrConstant::null()));
	}

	#[test]
	fn test_bool_constants_are_shared() {
		assert!(Arc::ptr_eq(&BoolConstant::new(true), &BoolConstant::new(true)));
		assert!(Arc::ptr_eq(&BoolConstant::new(false), &BoolConstant::new(false)));
		assert!(!Arc::ptr_eq(&BoolConstant::new(true), &BoolConstant::new(false)));
		assert!(BoolConstant::new(true).get_bool(None));
	}

	#[test]
	fn test_plan_literals() {
		assert_eq!(plan(IntConstant::new(7).as_ref(), None), "7");
		assert_eq!(plan(IntConstant::null().as_ref(), None), "null");
		assert_eq!(plan(StrConstant::new("ab").as_ref(), None), "'ab'");
		assert_eq!(plan(StrConstant::null().as_ref(), None), "null");
		assert_eq!(plan(BoolConstant::new(false).as_ref(), None), "false");
	}
}
