// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::upload::FileDescriptor;
use chrono::Weekday;
use std::fmt;

mod state;
pub use state::FormState;

/// The fields of the signup form
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
	Email,
	Password,
	ConfirmPassword,
	Specialization,
	Experience,
	Qualifications,
	Availability,
	CustomDays,
	TimeFrom,
	TimeTo,
}

impl Field {
	pub const CREDENTIALS: [Self; 3] = [Self::Email, Self::Password, Self::ConfirmPassword];

	pub const QUALIFICATIONS: [Self; 7] = [
		Self::Specialization,
		Self::Experience,
		Self::Qualifications,
		Self::Availability,
		Self::CustomDays,
		Self::TimeFrom,
		Self::TimeTo,
	];

	pub const ALL: [Self; 10] = [
		Self::Email,
		Self::Password,
		Self::ConfirmPassword,
		Self::Specialization,
		Self::Experience,
		Self::Qualifications,
		Self::Availability,
		Self::CustomDays,
		Self::TimeFrom,
		Self::TimeTo,
	];

	/// Name of the field as the backend knows it
	pub fn wire_name(&self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::Password => "password",
			Self::ConfirmPassword => "confirmPassword",
			Self::Specialization => "specialization",
			Self::Experience => "experience",
			Self::Qualifications => "qualifications",
			Self::Availability => "availability",
			Self::CustomDays => "customDays",
			Self::TimeFrom => "timeFrom",
			Self::TimeTo => "timeTo",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.wire_name())
	}
}

/// The current value of a form field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum FieldValue {
	/// Nothing entered or selected
	#[default]
	Empty,
	Text(String),
	File(FileDescriptor),
	Days(Vec<Weekday>),
}

impl FieldValue {
	/// Makes a text value, treating the empty string as no value.
	pub fn text(text: impl Into<String>) -> Self {
		let text = text.into();
		if text.is_empty() {
			Self::Empty
		} else {
			Self::Text(text)
		}
	}

	/// Gets the text of a text value. Any other kind of value reads as empty text.
	pub fn as_text(&self) -> &str {
		match self {
			Self::Text(text) => text,
			_ => "",
		}
	}

	pub fn as_file(&self) -> Option<&FileDescriptor> {
		match self {
			Self::File(file) => Some(file),
			_ => None,
		}
	}

	pub fn as_days(&self) -> &[Weekday] {
		match self {
			Self::Days(days) => days,
			_ => &[],
		}
	}

	pub fn is_empty(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Text(text) => text.is_empty(),
			Self::File(_) => false,
			Self::Days(days) => days.is_empty(),
		}
	}
}

/// Read access to form values. Validators only need this half of a form controller.
pub trait FormValues {
	/// Gets the current value of a field.
	fn value(&self, field: Field) -> FieldValue;
}

/// A shared form-state container that field groups register with.
pub trait FormController<'a>: FormValues {
	/// Sets the value of a field, notifying that field's subscribers if the value changed.
	fn set_value(&self, field: Field, value: FieldValue);

	/// Registers a listener for a field. The listener is called with the current value right away
	/// and again each time the field's value changes.
	fn subscribe(&self, field: Field, listener: Box<dyn FnMut(&FieldValue) + 'a>);
}
