// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

/// Error for a form value that doesn't name one of the known options
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownOption {
	pub value: String,
}

impl fmt::Display for UnknownOption {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "\"{}\" is not a known option", self.value)
	}
}

/// The medical specialties a doctor can register under
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Specialization {
	Cardiologist,
	Dermatologist,
	Neurologist,
	Orthopedic,
	Pediatrician,
	Psychiatrist,
	Dentist,
	GeneralPractitioner,
	EntSpecialist,
	Ophthalmologist,
}

impl Specialization {
	/// All specializations in display order
	pub const ALL: [Self; 10] = [
		Self::Cardiologist,
		Self::Dermatologist,
		Self::Neurologist,
		Self::Orthopedic,
		Self::Pediatrician,
		Self::Psychiatrist,
		Self::Dentist,
		Self::GeneralPractitioner,
		Self::EntSpecialist,
		Self::Ophthalmologist,
	];

	pub fn label(&self) -> &'static str {
		match self {
			Self::Cardiologist => "Cardiologist",
			Self::Dermatologist => "Dermatologist",
			Self::Neurologist => "Neurologist",
			Self::Orthopedic => "Orthopedic",
			Self::Pediatrician => "Pediatrician",
			Self::Psychiatrist => "Psychiatrist",
			Self::Dentist => "Dentist",
			Self::GeneralPractitioner => "General Practitioner",
			Self::EntSpecialist => "ENT Specialist",
			Self::Ophthalmologist => "Ophthalmologist",
		}
	}
}

impl fmt::Display for Specialization {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for Specialization {
	type Err = UnknownOption;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|specialization| specialization.label() == s)
			.ok_or_else(|| UnknownOption { value: s.to_string() })
	}
}

/// When a doctor is available for appointments
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Availability {
	Weekdays,
	Weekends,
	/// A hand-picked set of days, chosen in a separate field
	Custom,
}

impl Availability {
	pub const ALL: [Self; 3] = [Self::Weekdays, Self::Weekends, Self::Custom];

	pub fn label(&self) -> &'static str {
		match self {
			Self::Weekdays => "Weekdays",
			Self::Weekends => "Weekends",
			Self::Custom => "Custom",
		}
	}

	/// Checks whether a raw form value selects custom availability.
	pub fn is_custom(value: &str) -> bool {
		matches!(value.parse(), Ok(Self::Custom))
	}
}

impl fmt::Display for Availability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for Availability {
	type Err = UnknownOption;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|availability| availability.label() == s)
			.ok_or_else(|| UnknownOption { value: s.to_string() })
	}
}

/// Days offered by the custom availability selector, Monday first
pub const DAYS: [Weekday; 7] = [
	Weekday::Mon,
	Weekday::Tue,
	Weekday::Wed,
	Weekday::Thu,
	Weekday::Fri,
	Weekday::Sat,
	Weekday::Sun,
];

/// Full English name of a day, as shown in the day selector and sent on submission
pub fn day_name(day: Weekday) -> &'static str {
	match day {
		Weekday::Mon => "Monday",
		Weekday::Tue => "Tuesday",
		Weekday::Wed => "Wednesday",
		Weekday::Thu => "Thursday",
		Weekday::Fri => "Friday",
		Weekday::Sat => "Saturday",
		Weekday::Sun => "Sunday",
	}
}

/// Gets the day selection after a day's checkbox is checked or unchecked.
/// The result is deduplicated and ordered Monday first.
pub fn toggle_day(days: &[Weekday], day: Weekday, selected: bool) -> Vec<Weekday> {
	let mut new_days: Vec<Weekday> = days.iter().copied().filter(|existing| *existing != day).collect();
	if selected {
		new_days.push(day);
	}
	new_days.sort_by_key(|day| day.num_days_from_monday());
	new_days
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn specialization_labels_round_trip() {
		assert_eq!(Specialization::ALL.len(), 10);
		for specialization in Specialization::ALL {
			assert_eq!(specialization.label().parse::<Specialization>(), Ok(specialization));
		}
		assert!("Surgeon".parse::<Specialization>().is_err());
		assert!("".parse::<Specialization>().is_err());
	}

	#[test]
	fn custom_availability_detection() {
		assert!(Availability::is_custom("Custom"));
		assert!(!Availability::is_custom("Weekdays"));
		assert!(!Availability::is_custom(""));
		assert!(!Availability::is_custom("custom"));
	}

	#[test]
	fn toggling_days_keeps_week_order() {
		let days = toggle_day(&[], Weekday::Fri, true);
		let days = toggle_day(&days, Weekday::Mon, true);
		let days = toggle_day(&days, Weekday::Fri, true);
		assert_eq!(days, vec![Weekday::Mon, Weekday::Fri]);

		let days = toggle_day(&days, Weekday::Mon, false);
		assert_eq!(days, vec![Weekday::Fri]);
	}

	#[test]
	fn day_names_cover_the_week() {
		let names: Vec<&str> = DAYS.into_iter().map(day_name).collect();
		assert_eq!(
			names,
			["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
		);
	}
}
