// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::{Field, FieldValue, FormValues};
use crate::profile::{day_name, Availability};

/// Gets the text parts of a signup submission as `(name, value)` pairs in field order.
///
/// Custom days are sent as one entry per selected day and only when custom availability is
/// selected. The password confirmation stays on the client, and the qualification document isn't
/// included since it's attached as a file part.
pub fn text_entries<F: FormValues + ?Sized>(form: &F) -> Vec<(&'static str, String)> {
	let custom_availability = Availability::is_custom(form.value(Field::Availability).as_text());
	let mut entries = Vec::new();
	for field in Field::ALL {
		if field == Field::ConfirmPassword {
			continue;
		}
		match form.value(field) {
			FieldValue::Text(text) => entries.push((field.wire_name(), text)),
			FieldValue::Days(days) if custom_availability => {
				for day in days {
					entries.push((field.wire_name(), day_name(day).to_string()));
				}
			}
			FieldValue::Days(_) | FieldValue::File(_) | FieldValue::Empty => (),
		}
	}
	entries
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::{FormController, FormState};
	use crate::upload::FileDescriptor;
	use chrono::Weekday;

	#[test]
	fn custom_days_sent_only_for_custom_availability() {
		let form = FormState::new();
		form.set_value(Field::Email, FieldValue::text("doctor@example.com"));
		form.set_value(Field::ConfirmPassword, FieldValue::text("Abcdef1!"));
		form.set_value(Field::Availability, FieldValue::text("Custom"));
		form.set_value(Field::CustomDays, FieldValue::Days(vec![Weekday::Mon, Weekday::Thu]));
		form.set_value(
			Field::Qualifications,
			FieldValue::File(FileDescriptor {
				name: String::from("license.pdf"),
				mime_type: String::from("application/pdf"),
				size: 1,
			}),
		);

		assert_eq!(
			text_entries(&form),
			vec![
				("email", String::from("doctor@example.com")),
				("availability", String::from("Custom")),
				("customDays", String::from("Monday")),
				("customDays", String::from("Thursday")),
			]
		);

		form.set_value(Field::Availability, FieldValue::text("Weekdays"));
		assert_eq!(
			text_entries(&form),
			vec![
				("email", String::from("doctor@example.com")),
				("availability", String::from("Weekdays")),
			]
		);
	}
}
