// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::{
	collections::HashMap,
	fmt::{self, Display, Formatter},
	sync::Arc,
};

use basalt_type::Type;
use tracing::{debug, warn};

use crate::{
	FunctionError, Result,
	function::{
		FunctionRef,
		conditional::CoalesceFunctionFactory,
		text::{length::LengthFunctionFactory, starts_with::StartsWithFunctionFactory, strpos::StrPosFunctionFactory},
	},
};

/// One parameter of a function signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
	/// Exactly one kind.
	Exact(Type),
	/// Any text kind: `str`, `varchar` or `symbol`.
	Text,
}

impl Param {
	fn matches(&self, ty: Type) -> bool {
		match self {
			Param::Exact(expected) => *expected == ty,
			Param::Text => ty.is_text(),
		}
	}
}

impl Display for Param {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Param::Exact(ty) => f.write_str(ty.name()),
			Param::Text => f.write_str("text"),
		}
	}
}

/// What a factory accepts: a name and typed parameters. A variadic
/// signature repeats its last parameter, one occurrence at least.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
	name: &'static str,
	params: &'static [Param],
	variadic: bool,
}

impl Signature {
	pub fn new(name: &'static str, params: &'static [Param]) -> Self {
		Self { name, params, variadic: false }
	}

	pub fn variadic(name: &'static str, params: &'static [Param]) -> Self {
		Self { name, params, variadic: true }
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn matches(&self, arg_types: &[Type]) -> bool {
		if self.variadic {
			let Some((last, fixed)) = self.params.split_last() else {
				return arg_types.is_empty();
			};
			arg_types.len() >= self.params.len()
				&& fixed.iter().zip(arg_types).all(|(param, ty)| param.matches(*ty))
				&& arg_types[fixed.len()..].iter().all(|ty| last.matches(*ty))
		} else {
			self.params.len() == arg_types.len()
				&& self.params.iter().zip(arg_types).all(|(param, ty)| param.matches(*ty))
		}
	}
}

impl Display for Signature {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.name)?;
		for (index, param) in self.params.iter().enumerate() {
			if index > 0 {
				f.write_str(",")?;
			}
			write!(f, "{param}")?;
		}
		if self.variadic {
			f.write_str("...")?;
		}
		f.write_str(")")
	}
}

/// Builds function instances; where argument validation and constant
/// folding live.
pub trait FunctionFactory: Send + Sync {
	fn signature(&self) -> Signature;

	fn new_instance(&self, args: Vec<FunctionRef>) -> Result<FunctionRef>;
}

/// Name-indexed factories, resolved by structured signature.
pub struct FunctionRegistry {
	factories: HashMap<String, Vec<Arc<dyn FunctionFactory>>>,
}

impl FunctionRegistry {
	pub fn new() -> Self {
		Self { factories: HashMap::new() }
	}

	pub fn with_builtins() -> Self {
		let mut registry = Self::new();
		registry.register(Arc::new(StrPosFunctionFactory));
		registry.register(Arc::new(LengthFunctionFactory));
		registry.register(Arc::new(StartsWithFunctionFactory));
		registry.register(Arc::new(CoalesceFunctionFactory));
		registry
	}

	pub fn register(&mut self, factory: Arc<dyn FunctionFactory>) {
		let signature = factory.signature();
		let bucket = self.factories.entry(signature.name().to_string()).or_default();
		if bucket.iter().any(|known| known.signature() == signature) {
			warn!(%signature, "duplicate function signature; the earlier registration keeps winning");
		} else {
			debug!(%signature, "registered function");
		}
		bucket.push(factory);
	}

	/// First factory whose signature matches, in registration order.
	pub fn resolve(&self, name: &str, arg_types: &[Type]) -> Option<Arc<dyn FunctionFactory>> {
		self.factories.get(name)?.iter().find(|factory| factory.signature().matches(arg_types)).cloned()
	}

	/// Resolves by the arguments' return types and builds the instance.
	pub fn build(&self, name: &str, args: Vec<FunctionRef>) -> Result<FunctionRef> {
		let arg_types: Vec<Type> = args.iter().map(|arg| arg.return_type()).collect();
		let factory = self.resolve(name, &arg_types).ok_or_else(|| FunctionError::UnknownFunction {
			name: name.to_string(),
			arg_types: arg_types.clone(),
		})?;
		factory.new_instance(args)
	}
}

impl Default for FunctionRegistry {
	fn default() -> Self {
		Self::new()
	}
}
