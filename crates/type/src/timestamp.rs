// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::fmt::{self, Display, Formatter};

use crate::calendar::{civil_from_days, days_from_civil, days_in_month};

pub const MICROS_PER_DAY: i64 = 86_400_000_000;

/// A point on the `timestamp` axis: microseconds since the Unix epoch,
/// UTC. The finer-grained sibling of [`crate::Date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
	micros: i64,
}

impl Timestamp {
	/// A civil date and time of day, or `None` if any component is out
	/// of range.
	pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32, micro: u32) -> Option<Self> {
		if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) {
			return None;
		}
		if hour > 23 || minute > 59 || second > 59 || micro > 999_999 {
			return None;
		}
		let days = days_from_civil(year, month, day);
		// Roughly a hundred thousand years either side of the epoch, so
		// the microsecond count stays inside i64.
		if days < -36_525_000 || days > 36_525_000 {
			return None;
		}
		let micros = days * MICROS_PER_DAY
			+ i64::from(hour) * 3_600_000_000
			+ i64::from(minute) * 60_000_000
			+ i64::from(second) * 1_000_000
			+ i64::from(micro);
		Some(Self { micros })
	}

	pub fn from_micros(micros: i64) -> Self {
		Self { micros }
	}

	pub fn micros(&self) -> i64 {
		self.micros
	}
}

impl Display for Timestamp {
	/// ISO-8601 with microsecond precision:
	/// `1970-01-01T00:00:00.000000Z`.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let days = self.micros.div_euclid(MICROS_PER_DAY);
		let mut rem = self.micros.rem_euclid(MICROS_PER_DAY);
		let (year, month, day) = civil_from_days(days);
		let hour = rem / 3_600_000_000;
		rem %= 3_600_000_000;
		let minute = rem / 60_000_000;
		rem %= 60_000_000;
		let second = rem / 1_000_000;
		let micro = rem % 1_000_000;
		write!(
			f,
			"{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}Z",
			year, month, day, hour, minute, second, micro
		)
	}
}
