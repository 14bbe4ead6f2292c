// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validation rules for the signup form.
//!
//! Every rule is a pure function returning the first failing message for its field. Deciding
//! whether a failure is also shown as a notification is left to the caller.

use crate::form::{Field, FormValues};
use std::fmt;

pub mod credentials;
pub mod email_check;
pub mod qualifications;

/// A failed validation rule for a single field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldError {
	pub field: Field,
	pub message: &'static str,
}

impl FieldError {
	pub fn new(field: Field, message: &'static str) -> Self {
		Self { field, message }
	}
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.message)
	}
}

pub type FieldResult = Result<(), FieldError>;

/// Runs the synchronous rules for one field against the current form values.
///
/// Cross-field rules (confirm password, end time, custom days) read the other fields from `form`
/// at call time.
pub fn validate_field<F: FormValues + ?Sized>(form: &F, field: Field) -> FieldResult {
	let value = form.value(field);
	match field {
		Field::Email => credentials::validate_email(value.as_text()),
		Field::Password => credentials::validate_password(value.as_text()),
		Field::ConfirmPassword => {
			credentials::validate_password_confirmation(value.as_text(), form.value(Field::Password).as_text())
		}
		Field::Specialization => qualifications::validate_specialization(value.as_text()),
		Field::Experience => qualifications::validate_experience(value.as_text()),
		Field::Qualifications => qualifications::validate_qualification_file(value.as_file()),
		Field::Availability => qualifications::validate_availability(value.as_text()),
		Field::CustomDays => {
			qualifications::validate_custom_days(form.value(Field::Availability).as_text(), value.as_days())
		}
		Field::TimeFrom => qualifications::validate_time_from(value.as_text()),
		Field::TimeTo => qualifications::validate_time_to(form.value(Field::TimeFrom).as_text(), value.as_text()),
	}
}

/// All failures found across a set of fields
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Gets the failure for a field, if it has one.
	pub fn get(&self, field: Field) -> Option<&FieldError> {
		self.0.iter().find(|error| error.field == field)
	}

	pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
		self.0.iter()
	}
}

/// Runs the synchronous rules for each of the given fields.
pub fn validate_fields<F: FormValues + ?Sized>(form: &F, fields: &[Field]) -> FormErrors {
	FormErrors(
		fields
			.iter()
			.filter_map(|field| validate_field(form, *field).err())
			.collect(),
	)
}

/// Runs the synchronous rules for the whole signup form.
pub fn validate_all<F: FormValues + ?Sized>(form: &F) -> FormErrors {
	validate_fields(form, &Field::ALL)
}
