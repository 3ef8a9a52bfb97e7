// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

//! Column type catalog and value primitives shared by every Basalt layer.
//!
//! Nullability is in-band: each nullable kind reserves one bit pattern as
//! its null, declared in [`null`]. There are no wrapper types at the
//! storage or record seams.

mod calendar;
mod date;
pub mod null;
mod timestamp;
mod r#type;

pub use date::Date;
pub use r#type::Type;
pub use timestamp::Timestamp;
