// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::Weekday;
use medibook_shared::form::{Field, FieldValue, FormController, FormValues};
use medibook_shared::upload::FileDescriptor;
use medibook_shared::validation::email_check::EmailCheckState;
use medibook_shared::validation::{validate_field, validate_fields, FieldError};
use sycamore::prelude::*;
use web_sys::File;

/// A qualification document picked in the file input
#[derive(Clone)]
pub struct SelectedFile {
	pub descriptor: FileDescriptor,
	pub file: File,
}

impl SelectedFile {
	pub fn new(file: File) -> Self {
		let descriptor = FileDescriptor {
			name: file.name(),
			mime_type: file.type_(),
			size: file.size() as u64,
		};
		Self { descriptor, file }
	}
}

impl AsRef<FileDescriptor> for SelectedFile {
	fn as_ref(&self) -> &FileDescriptor {
		&self.descriptor
	}
}

/// Signal-backed values shared by the signup field groups.
///
/// Each field has its own signal, so reading a field through [`FormValues::value`] inside a memo or
/// effect only tracks that field. The form holds no scope of its own, so it can be handed to
/// components rendered in any child scope of the one that created it. Derived signals are created in
/// the scope passed to each method.
#[derive(Clone, Copy)]
pub struct SignupForm<'a> {
	pub email: &'a Signal<String>,
	pub password: &'a Signal<String>,
	pub confirm_password: &'a Signal<String>,
	pub specialization: &'a Signal<String>,
	pub experience: &'a Signal<String>,
	pub qualifications: &'a Signal<Option<SelectedFile>>,
	pub availability: &'a Signal<String>,
	pub custom_days: &'a Signal<Vec<Weekday>>,
	pub time_from: &'a Signal<String>,
	pub time_to: &'a Signal<String>,
	/// Uniqueness check state for the address in the email field
	pub email_check: &'a Signal<EmailCheckState>,
	/// Fields the user has left at least once
	touched: &'a Signal<Vec<Field>>,
}

impl<'a> SignupForm<'a> {
	pub fn new(ctx: Scope<'a>) -> Self {
		Self {
			email: create_signal(ctx, String::new()),
			password: create_signal(ctx, String::new()),
			confirm_password: create_signal(ctx, String::new()),
			specialization: create_signal(ctx, String::new()),
			experience: create_signal(ctx, String::new()),
			qualifications: create_signal(ctx, None),
			availability: create_signal(ctx, String::new()),
			custom_days: create_signal(ctx, Vec::new()),
			time_from: create_signal(ctx, String::new()),
			time_to: create_signal(ctx, String::new()),
			email_check: create_signal(ctx, EmailCheckState::Idle),
			touched: create_signal(ctx, Vec::new()),
		}
	}

	/// Marks a field as visited so that its errors are shown even while it's empty.
	pub fn touch(&self, field: Field) {
		if !self.touched.get_untracked().contains(&field) {
			self.touched.modify().push(field);
		}
	}

	fn shows_errors(&self, field: Field) -> bool {
		self.touched.get().contains(&field) || !self.value(field).is_empty()
	}

	fn text_signal(&self, field: Field) -> Option<&'a Signal<String>> {
		match field {
			Field::Email => Some(self.email),
			Field::Password => Some(self.password),
			Field::ConfirmPassword => Some(self.confirm_password),
			Field::Specialization => Some(self.specialization),
			Field::Experience => Some(self.experience),
			Field::Availability => Some(self.availability),
			Field::TimeFrom => Some(self.time_from),
			Field::TimeTo => Some(self.time_to),
			Field::Qualifications | Field::CustomDays => None,
		}
	}

	/// Creates a signal holding the validation failure to show next to a field. Failures are hidden
	/// until the field has a value or has been visited.
	pub fn displayed_error(self, ctx: Scope<'a>, field: Field) -> &'a ReadSignal<Option<FieldError>> {
		create_memo(ctx, move || {
			let error = validate_field(&self, field).err();
			if self.shows_errors(field) {
				error
			} else {
				None
			}
		})
	}

	/// Like [`SignupForm::displayed_error`] for the email field, also including the result of the
	/// uniqueness check once it's known.
	pub fn displayed_email_error(self, ctx: Scope<'a>) -> &'a ReadSignal<Option<FieldError>> {
		create_memo(ctx, move || {
			if !self.shows_errors(Field::Email) {
				return None;
			}
			if let Err(error) = validate_field(&self, Field::Email) {
				return Some(error);
			}
			self.email_check
				.get()
				.result_for(&self.email.get())
				.and_then(|result| result.err())
		})
	}

	/// Creates a signal telling whether the credential step is complete: every credential rule passes
	/// and the uniqueness check finished without objection.
	pub fn credentials_ready_signal(self, ctx: Scope<'a>) -> &'a ReadSignal<bool> {
		create_memo(ctx, move || {
			validate_fields(&self, &Field::CREDENTIALS).is_empty()
				&& matches!(self.email_check.get().result_for(&self.email.get()), Some(Ok(())))
		})
	}
}

impl FormValues for SignupForm<'_> {
	fn value(&self, field: Field) -> FieldValue {
		match field {
			Field::Qualifications => match &*self.qualifications.get() {
				Some(selected) => FieldValue::File(selected.descriptor.clone()),
				None => FieldValue::Empty,
			},
			Field::CustomDays => {
				let days = self.custom_days.get();
				if days.is_empty() {
					FieldValue::Empty
				} else {
					FieldValue::Days((*days).clone())
				}
			}
			_ => match self.text_signal(field) {
				Some(signal) => FieldValue::text((*signal.get()).clone()),
				None => FieldValue::Empty,
			},
		}
	}
}

impl<'a> SignupForm<'a> {
	/// Writes a field value. Qualification documents can only be cleared this way; attaching one
	/// needs the browser file, so the file input sets [`SignupForm::qualifications`] itself.
	pub fn set_value(&self, field: Field, value: FieldValue) {
		match field {
			Field::Qualifications => match value {
				FieldValue::Empty => {
					if self.qualifications.get_untracked().is_some() {
						self.qualifications.set(None);
					}
				}
				_ => log::warn!("Qualification documents can only be attached from the file input"),
			},
			Field::CustomDays => {
				let days = value.as_days();
				if self.custom_days.get_untracked().as_slice() != days {
					self.custom_days.set(days.to_vec());
				}
			}
			_ => {
				if let Some(signal) = self.text_signal(field) {
					if signal.get_untracked().as_str() != value.as_text() {
						signal.set(value.as_text().to_string());
					}
				}
			}
		}
	}

	/// Binds the form to the scope that owns subscriptions made through [`FormController`].
	pub fn scoped(self, ctx: Scope<'a>) -> ScopedSignupForm<'a> {
		ScopedSignupForm { ctx, form: self }
	}
}

/// A [`SignupForm`] together with the scope its listeners live in
#[derive(Clone, Copy)]
pub struct ScopedSignupForm<'a> {
	ctx: Scope<'a>,
	form: SignupForm<'a>,
}

impl FormValues for ScopedSignupForm<'_> {
	fn value(&self, field: Field) -> FieldValue {
		self.form.value(field)
	}
}

impl<'a> FormController<'a> for ScopedSignupForm<'a> {
	fn set_value(&self, field: Field, value: FieldValue) {
		self.form.set_value(field, value);
	}

	fn subscribe(&self, field: Field, mut listener: Box<dyn FnMut(&FieldValue) + 'a>) {
		let form = self.form;
		let selected_value = create_selector(self.ctx, move || form.value(field));
		create_effect(self.ctx, move || listener(&selected_value.get()));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;
	use std::rc::Rc;

	fn email_error_in<'b>(ctx: Scope<'b>, form: SignupForm<'b>) -> Option<FieldError> {
		*form.displayed_error(ctx, Field::Email).get()
	}

	#[test]
	fn form_reaches_components_in_child_scopes() {
		create_scope_immediate(|ctx| {
			let form = SignupForm::new(ctx);
			form.email.set(String::from("not-an-email"));
			let _ = create_child_scope(ctx, move |child| {
				let error = email_error_in(child, form);
				assert!(error.is_some());
			});
		});
	}

	#[test]
	fn errors_stay_hidden_until_a_field_is_visited() {
		create_scope_immediate(|ctx| {
			let form = SignupForm::new(ctx);
			let password_error = form.displayed_error(ctx, Field::Password);
			assert_eq!(*password_error.get(), None);
			form.touch(Field::Password);
			assert!(password_error.get().is_some());
		});
	}

	#[test]
	fn subscriptions_see_current_value_then_changes() {
		create_scope_immediate(|ctx| {
			let form = SignupForm::new(ctx);
			form.availability.set(String::from("Weekdays"));
			let seen = Rc::new(RefCell::new(Vec::new()));
			let seen_by_listener = Rc::clone(&seen);
			form.scoped(ctx).subscribe(
				Field::Availability,
				Box::new(move |value| seen_by_listener.borrow_mut().push(value.as_text().to_string())),
			);
			form.set_value(Field::Availability, FieldValue::text(String::from("Custom")));
			form.set_value(Field::Email, FieldValue::text(String::from("doctor@example.com")));
			assert_eq!(*seen.borrow(), vec![String::from("Weekdays"), String::from("Custom")]);
		});
	}
}
