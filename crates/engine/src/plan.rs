// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use basalt_core::RecordMetadata;

use crate::function::Function;

/// Accumulates the text of an explain plan.
///
/// With a layout attached, column references render as column names;
/// without one they render as `#ordinal`.
pub struct PlanSink<'a> {
	out: String,
	metadata: Option<&'a RecordMetadata>,
}

impl<'a> PlanSink<'a> {
	pub fn new(metadata: Option<&'a RecordMetadata>) -> Self {
		Self { out: String::new(), metadata }
	}

	pub fn push(&mut self, text: &str) {
		self.out.push_str(text);
	}

	pub fn column(&mut self, ordinal: usize) {
		match self.metadata {
			Some(metadata) => self.out.push_str(metadata.column(ordinal).name()),
			None => {
				self.out.push('#');
				self.out.push_str(&ordinal.to_string());
			}
		}
	}

	pub fn finish(self) -> String {
		self.out
	}
}

/// Renders a function tree as a compact call string, constants inline.
pub fn plan(function: &dyn Function, metadata: Option<&RecordMetadata>) -> String {
	let mut sink = PlanSink::new(metadata);
	function.plan(&mut sink);
	sink.finish()
}

/// Ordinals of every column the tree reads, sorted and deduplicated.
/// Scans use this to prune the columns they materialize.
pub fn referenced_columns(function: &dyn Function) -> Vec<usize> {
	let mut ordinals = Vec::new();
	collect(function, &mut ordinals);
	ordinals.sort_unstable();
	ordinals.dedup();
	ordinals
}

fn collect(function: &dyn Function, ordinals: &mut Vec<usize>) {
	if let Some(ordinal) = function.column_ordinal() {
		ordinals.push(ordinal);
	}
	for child in function.args().children() {
		collect(child.as_ref(), ordinals);
	}
}

#[cfg(test)]
mod tests {
	use basalt_core::{ColumnMeta, RecordMetadata};
	use basalt_type::Type;

	use super::*;
	use crate::{
		function::{
			columns::{StrColumn, VarcharColumn},
			constants::StrConstant,
			text::strpos::StrPosFunctionFactory,
		},
		registry::FunctionFactory,
	};

	fn layout() -> RecordMetadata {
		RecordMetadata::new(vec![
			ColumnMeta::new("id", Type::Int),
			ColumnMeta::new("name", Type::Str),
		])
	}

	#[test]
	fn test_folded_strpos_renders_inline_needle() {
		let function = StrPosFunctionFactory
			.new_instance(vec![StrColumn::new(1), StrConstant::new("ab")])
			.unwrap();
		assert_eq!(plan(function.as_ref(), Some(&layout())), "strpos(name,'ab')");
		assert_eq!(plan(function.as_ref(), None), "strpos(#1,'ab')");
	}

	#[test]
	fn test_general_strpos_renders_both_args() {
		let function = StrPosFunctionFactory
			.new_instance(vec![StrColumn::new(1), StrColumn::new(0)])
			.unwrap();
		assert_eq!(plan(function.as_ref(), Some(&layout())), "strpos(name,id)");
	}

	#[test]
	fn test_referenced_columns_are_sorted_and_unique() {
		let function = StrPosFunctionFactory
			.new_instance(vec![StrColumn::new(3), VarcharColumn::new(1)])
			.unwrap();
		assert_eq!(referenced_columns(function.as_ref()), vec![1, 3]);

		let folded = StrPosFunctionFactory
			.new_instance(vec![StrColumn::new(2), StrConstant::new("x")])
			.unwrap();
		assert_eq!(referenced_columns(folded.as_ref()), vec![2]);

		let constant = StrConstant::new("x");
		assert!(referenced_columns(constant.as_ref()).is_empty());
	}
}
