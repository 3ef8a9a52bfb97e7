// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

pub mod columns;
pub mod conditional;
pub mod constants;
pub mod text;

use std::sync::Arc;

use basalt_core::Record;
use basalt_type::Type;

use crate::plan::PlanSink;

pub type FunctionRef = Arc<dyn Function>;

/// The argument shape of a function, exposed as data.
///
/// One enum instead of per-arity marker traits: callers match on the
/// shape they care about and the borrow ties the children to the
/// parent.
pub enum FunctionArgs<'a> {
	/// No arguments: constants and column reads.
	None,
	Unary(&'a FunctionRef),
	Binary { left: &'a FunctionRef, right: &'a FunctionRef },
	Nary(&'a [FunctionRef]),
}

impl<'a> FunctionArgs<'a> {
	/// Child evaluators in argument order. The references borrow the
	/// parent function, not this value, so they outlive it.
	pub fn children(&self) -> Vec<&'a FunctionRef> {
		match *self {
			FunctionArgs::None => Vec::new(),
			FunctionArgs::Unary(arg) => vec![arg],
			FunctionArgs::Binary { left, right } => vec![left, right],
			FunctionArgs::Nary(args) => args.iter().collect(),
		}
	}
}

/// A typed scalar evaluator over one record at a time.
///
/// A function declares its [`return_type`](Function::return_type) and
/// overrides exactly the getter for that kind; the remaining getters
/// keep their default body and panic, since calling them is a defect in
/// the caller. Evaluators take `Option<&dyn Record>`: constants accept
/// `None`, row-dependent functions panic on it.
///
/// Nulls travel in-band, the same way records carry them: sentinel
/// values for the numeric and temporal kinds, `None` for text.
pub trait Function: Send + Sync {
	fn name(&self) -> &'static str;

	fn return_type(&self) -> Type;

	fn args(&self) -> FunctionArgs<'_>;

	/// Whether the function evaluates to the same value for every
	/// record. Derived for composite shapes: constant when every child
	/// is. Leaf shapes are not constant unless they override this.
	fn is_constant(&self) -> bool {
		let children = self.args().children();
		!children.is_empty() && children.iter().all(|child| child.is_constant())
	}

	/// The column this function reads directly, if it is a plain
	/// column reference.
	fn column_ordinal(&self) -> Option<usize> {
		None
	}

	/// Renders the function into an explain plan. The default prints
	/// `name(child,...)`, or the column reference for column reads.
	fn plan(&self, sink: &mut PlanSink<'_>) {
		if let Some(ordinal) = self.column_ordinal() {
			sink.column(ordinal);
			return;
		}
		sink.push(self.name());
		sink.push("(");
		for (index, child) in self.args().children().into_iter().enumerate() {
			if index > 0 {
				sink.push(",");
			}
			child.plan(sink);
		}
		sink.push(")");
	}

	fn get_bool(&self, _record: Option<&dyn Record>) -> bool {
		unsupported(self.name(), "bool")
	}

	fn get_byte(&self, _record: Option<&dyn Record>) -> i8 {
		unsupported(self.name(), "byte")
	}

	fn get_short(&self, _record: Option<&dyn Record>) -> i16 {
		unsupported(self.name(), "short")
	}

	fn get_int(&self, _record: Option<&dyn Record>) -> i32 {
		unsupported(self.name(), "int")
	}

	fn get_long(&self, _record: Option<&dyn Record>) -> i64 {
		unsupported(self.name(), "long")
	}

	fn get_float(&self, _record: Option<&dyn Record>) -> f32 {
		unsupported(self.name(), "float")
	}

	fn get_double(&self, _record: Option<&dyn Record>) -> f64 {
		unsupported(self.name(), "double")
	}

	fn get_date(&self, _record: Option<&dyn Record>) -> i64 {
		unsupported(self.name(), "date")
	}

	fn get_timestamp(&self, _record: Option<&dyn Record>) -> i64 {
		unsupported(self.name(), "timestamp")
	}

	fn get_str<'a>(&'a self, _record: Option<&'a dyn Record>) -> Option<&'a str> {
		unsupported(self.name(), "str")
	}
}

fn unsupported(function: &str, kind: &str) -> ! {
	panic!("function {function} does not support {kind} evaluation")
}
