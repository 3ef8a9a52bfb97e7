// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

//! In-band null sentinels.
//!
//! Each nullable kind reserves one bit pattern as its null; values flow
//! through getters and columns as plain primitives and the sentinel is
//! checked wherever null matters. Two kinds deviate: `boolean` is
//! two-valued and has no null at all, and the text kinds (`str`,
//! `varchar`, `symbol`) and `binary` surface null as an absent `Option`
//! at the access seam instead of a reserved bit pattern.
//!
//! The float sentinels are NaN, which compares unequal to itself. Use
//! [`is_null_float`] and [`is_null_double`] instead of `==`.

pub const BYTE: i8 = i8::MIN;
pub const SHORT: i16 = i16::MIN;
pub const INT: i32 = i32::MIN;
pub const LONG: i64 = i64::MIN;
pub const FLOAT: f32 = f32::NAN;
pub const DOUBLE: f64 = f64::NAN;
/// Null for `date` columns (milliseconds since epoch).
pub const DATE: i64 = i64::MIN;
/// Null for `timestamp` columns (microseconds since epoch).
pub const TIMESTAMP: i64 = i64::MIN;

pub fn is_null_float(value: f32) -> bool {
	value.is_nan()
}

pub fn is_null_double(value: f64) -> bool {
	value.is_nan()
}
