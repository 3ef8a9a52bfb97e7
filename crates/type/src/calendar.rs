// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

//! Civil calendar math shared by [`crate::Date`] and [`crate::Timestamp`].
//!
//! Algorithms follow Howard Hinnant's `days_from_civil` /
//! `civil_from_days`, valid across the proleptic Gregorian calendar.

pub(crate) fn is_leap_year(year: i32) -> bool {
	(year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
	match month {
		1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
		4 | 6 | 9 | 11 => 30,
		2 => {
			if is_leap_year(year) {
				29
			} else {
				28
			}
		}
		_ => 0,
	}
}

/// Days since 1970-01-01 for a civil date. The date must be valid.
pub(crate) fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
	let y = i64::from(if month <= 2 { year - 1 } else { year });
	let era = y.div_euclid(400);
	let yoe = y - era * 400;
	let mp = (i64::from(month) + 9) % 12;
	let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
	let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
	era * 146_097 + doe - 719_468
}

/// Civil date for a count of days since 1970-01-01.
pub(crate) fn civil_from_days(days: i64) -> (i32, u32, u32) {
	let z = days + 719_468;
	let era = z.div_euclid(146_097);
	let doe = z - era * 146_097;
	let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
	let y = yoe + era * 400;
	let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
	let mp = (5 * doy + 2) / 153;
	let day = doy - (153 * mp + 2) / 5 + 1;
	let month = if mp < 10 { mp + 3 } else { mp - 9 };
	let year = if month <= 2 { y + 1 } else { y };
	(year as i32, month as u32, day as u32)
}
