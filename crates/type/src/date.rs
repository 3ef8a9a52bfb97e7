// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::fmt::{self, Display, Formatter};

use crate::calendar::{civil_from_days, days_from_civil, days_in_month};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// A point on the `date` axis: milliseconds since the Unix epoch, UTC.
///
/// `Date` is a formatting and construction helper over the raw `i64`
/// that `date` columns store. It knows nothing about null; callers check
/// the sentinel before wrapping a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
	millis: i64,
}

impl Date {
	/// Midnight UTC on the given civil date, or `None` if the date is
	/// not a real calendar day or lies outside the supported range.
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) {
			return None;
		}
		let days = days_from_civil(year, month, day);
		// Roughly a million years either side of the epoch, so the
		// millisecond count stays inside i64.
		if days < -365_250_000 || days > 365_250_000 {
			return None;
		}
		Some(Self { millis: days * MILLIS_PER_DAY })
	}

	pub fn from_millis(millis: i64) -> Self {
		Self { millis }
	}

	pub fn millis(&self) -> i64 {
		self.millis
	}
}

impl Display for Date {
	/// ISO-8601 with millisecond precision: `1970-01-01T00:00:00.000Z`.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let days = self.millis.div_euclid(MILLIS_PER_DAY);
		let mut rem = self.millis.rem_euclid(MILLIS_PER_DAY);
		let (year, month, day) = civil_from_days(days);
		let hour = rem / 3_600_000;
		rem %= 3_600_000;
		let minute = rem / 60_000;
		rem %= 60_000;
		let second = rem / 1000;
		let milli = rem % 1000;
		write!(
			f,
			"{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
			year, month, day, hour, minute, second, milli
		)
	}
}
