// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{FieldError, FieldResult};
use crate::form::Field;
use crate::profile::{Availability, Specialization};
use crate::upload::{screen_upload, FileDescriptor};
use chrono::Weekday;

pub const SPECIALIZATION_REQUIRED: &str = "Please select a specialization";
pub const EXPERIENCE_REQUIRED: &str = "Please enter your years of experience";
pub const EXPERIENCE_NOT_A_NUMBER: &str = "Experience must be a number";
pub const EXPERIENCE_NEGATIVE: &str = "Experience cannot be negative";
pub const QUALIFICATIONS_REQUIRED: &str = "Please upload your qualifications";
pub const AVAILABILITY_REQUIRED: &str = "Please select your availability";
pub const CUSTOM_DAYS_REQUIRED: &str = "Please select at least one day";
pub const TIME_FROM_REQUIRED: &str = "Please select start time";
pub const TIME_TO_REQUIRED: &str = "Please select end time";
pub const TIME_TO_NOT_AFTER_FROM: &str = "End time must be after start time";

pub fn validate_specialization(value: &str) -> FieldResult {
	match value.parse::<Specialization>() {
		Ok(_) => Ok(()),
		Err(_) => Err(FieldError::new(Field::Specialization, SPECIALIZATION_REQUIRED)),
	}
}

/// Years of experience: any non-negative number.
pub fn validate_experience(value: &str) -> FieldResult {
	let value = value.trim();
	if value.is_empty() {
		return Err(FieldError::new(Field::Experience, EXPERIENCE_REQUIRED));
	}
	let years: f64 = match value.parse() {
		Ok(years) => years,
		Err(_) => return Err(FieldError::new(Field::Experience, EXPERIENCE_NOT_A_NUMBER)),
	};
	if !years.is_finite() {
		return Err(FieldError::new(Field::Experience, EXPERIENCE_NOT_A_NUMBER));
	}
	if years < 0.0 {
		return Err(FieldError::new(Field::Experience, EXPERIENCE_NEGATIVE));
	}
	Ok(())
}

/// The qualification document must be present and pass the upload screening.
pub fn validate_qualification_file(file: Option<&FileDescriptor>) -> FieldResult {
	let Some(file) = file else {
		return Err(FieldError::new(Field::Qualifications, QUALIFICATIONS_REQUIRED));
	};
	screen_upload(file).map_err(|rejection| FieldError::new(Field::Qualifications, rejection.message()))
}

pub fn validate_availability(value: &str) -> FieldResult {
	match value.parse::<Availability>() {
		Ok(_) => Ok(()),
		Err(_) => Err(FieldError::new(Field::Availability, AVAILABILITY_REQUIRED)),
	}
}

/// Custom days are only required while custom availability is selected.
pub fn validate_custom_days(availability: &str, days: &[Weekday]) -> FieldResult {
	if Availability::is_custom(availability) && days.is_empty() {
		return Err(FieldError::new(Field::CustomDays, CUSTOM_DAYS_REQUIRED));
	}
	Ok(())
}

pub fn validate_time_from(value: &str) -> FieldResult {
	if value.is_empty() {
		return Err(FieldError::new(Field::TimeFrom, TIME_FROM_REQUIRED));
	}
	Ok(())
}

/// The end time must come strictly after the start time.
///
/// Both values are same-day `HH:MM` strings from time inputs, so comparing them as strings orders
/// them correctly. Without a start time there's nothing to compare against yet.
pub fn validate_time_to(time_from: &str, time_to: &str) -> FieldResult {
	if time_to.is_empty() {
		return Err(FieldError::new(Field::TimeTo, TIME_TO_REQUIRED));
	}
	if !time_from.is_empty() && time_to <= time_from {
		return Err(FieldError::new(Field::TimeTo, TIME_TO_NOT_AFTER_FROM));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::upload::MAX_UPLOAD_SIZE;

	fn message(result: FieldResult) -> Option<&'static str> {
		result.err().map(|error| error.message)
	}

	#[test]
	fn specialization_must_be_from_list() {
		assert_eq!(message(validate_specialization("Neurologist")), None);
		assert_eq!(message(validate_specialization("ENT Specialist")), None);
		assert_eq!(message(validate_specialization("")), Some(SPECIALIZATION_REQUIRED));
		assert_eq!(message(validate_specialization("Astronaut")), Some(SPECIALIZATION_REQUIRED));
	}

	#[test]
	fn experience_is_non_negative_number() {
		assert_eq!(message(validate_experience("0")), None);
		assert_eq!(message(validate_experience("12")), None);
		assert_eq!(message(validate_experience("2.5")), None);
		assert_eq!(message(validate_experience("")), Some(EXPERIENCE_REQUIRED));
		assert_eq!(message(validate_experience("-1")), Some(EXPERIENCE_NEGATIVE));
		assert_eq!(message(validate_experience("ten")), Some(EXPERIENCE_NOT_A_NUMBER));
		assert_eq!(message(validate_experience("inf")), Some(EXPERIENCE_NOT_A_NUMBER));
	}

	#[test]
	fn qualification_file_required_and_screened() {
		assert_eq!(message(validate_qualification_file(None)), Some(QUALIFICATIONS_REQUIRED));

		let mut file = FileDescriptor {
			name: String::from("certificate.png"),
			mime_type: String::from("image/png"),
			size: 4 * 1024 * 1024,
		};
		assert_eq!(message(validate_qualification_file(Some(&file))), None);

		file.size = MAX_UPLOAD_SIZE + 1;
		assert_eq!(
			message(validate_qualification_file(Some(&file))),
			Some("File size should not exceed 5MB")
		);
	}

	#[test]
	fn availability_must_be_chosen() {
		assert_eq!(message(validate_availability("Weekends")), None);
		assert_eq!(message(validate_availability("")), Some(AVAILABILITY_REQUIRED));
	}

	#[test]
	fn custom_days_only_required_for_custom() {
		assert_eq!(message(validate_custom_days("Custom", &[])), Some(CUSTOM_DAYS_REQUIRED));
		assert_eq!(message(validate_custom_days("Custom", &[Weekday::Mon])), None);
		assert_eq!(message(validate_custom_days("Weekdays", &[])), None);
		assert_eq!(message(validate_custom_days("Weekends", &[Weekday::Sat])), None);
		assert_eq!(message(validate_custom_days("", &[])), None);
	}

	#[test]
	fn end_time_after_start_time() {
		assert_eq!(message(validate_time_to("09:00", "08:00")), Some(TIME_TO_NOT_AFTER_FROM));
		assert_eq!(message(validate_time_to("09:00", "09:00")), Some(TIME_TO_NOT_AFTER_FROM));
		assert_eq!(message(validate_time_to("09:00", "10:00")), None);
		assert_eq!(message(validate_time_to("", "00:01")), None);
		assert_eq!(message(validate_time_to("", "")), Some(TIME_TO_REQUIRED));
		assert_eq!(message(validate_time_from("")), Some(TIME_FROM_REQUIRED));
	}
}
