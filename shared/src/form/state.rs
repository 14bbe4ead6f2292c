// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Field, FieldValue, FormController, FormValues};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

type Listener<'a> = Box<dyn FnMut(&FieldValue) + 'a>;

/// In-memory form state.
///
/// Changes made by a listener while notifications are being delivered are queued and delivered
/// in order after the current notification finishes, so listeners never run re-entrantly.
#[derive(Default)]
pub struct FormState<'a> {
	values: RefCell<HashMap<Field, FieldValue>>,
	listeners: RefCell<Vec<(Field, Listener<'a>)>>,
	pending: RefCell<VecDeque<(Field, FieldValue)>>,
	notifying: Cell<bool>,
}

impl<'a> FormState<'a> {
	pub fn new() -> Self {
		Self::default()
	}

	fn notify_pending(&self) {
		if self.notifying.replace(true) {
			return;
		}

		loop {
			let next = self.pending.borrow_mut().pop_front();
			let Some((field, value)) = next else {
				break;
			};

			// Listeners are taken out for the duration of the call so that a listener can subscribe
			let mut listeners = self.listeners.take();
			for (listener_field, listener) in listeners.iter_mut() {
				if *listener_field == field {
					listener(&value);
				}
			}
			let mut registered_during_notify = self.listeners.take();
			listeners.append(&mut registered_during_notify);
			*self.listeners.borrow_mut() = listeners;
		}

		self.notifying.set(false);
	}
}

impl FormValues for FormState<'_> {
	fn value(&self, field: Field) -> FieldValue {
		self.values.borrow().get(&field).cloned().unwrap_or_default()
	}
}

impl<'a> FormController<'a> for FormState<'a> {
	fn set_value(&self, field: Field, value: FieldValue) {
		{
			let mut values = self.values.borrow_mut();
			let current = values.get(&field).cloned().unwrap_or_default();
			if current == value {
				return;
			}
			if value == FieldValue::Empty {
				values.remove(&field);
			} else {
				values.insert(field, value.clone());
			}
		}

		self.pending.borrow_mut().push_back((field, value));
		self.notify_pending();
	}

	fn subscribe(&self, field: Field, mut listener: Box<dyn FnMut(&FieldValue) + 'a>) {
		listener(&self.value(field));
		self.listeners.borrow_mut().push((field, listener));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::rc::Rc;

	#[test]
	fn unset_fields_read_as_empty() {
		let form = FormState::new();
		assert_eq!(form.value(Field::Email), FieldValue::Empty);

		form.set_value(Field::Email, FieldValue::text("doctor@example.com"));
		assert_eq!(form.value(Field::Email).as_text(), "doctor@example.com");

		form.set_value(Field::Email, FieldValue::text(""));
		assert_eq!(form.value(Field::Email), FieldValue::Empty);
	}

	#[test]
	fn listeners_see_current_value_then_changes() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let form = FormState::new();
		form.set_value(Field::TimeFrom, FieldValue::text("09:00"));

		let listener_seen = Rc::clone(&seen);
		form.subscribe(
			Field::TimeFrom,
			Box::new(move |value| listener_seen.borrow_mut().push(value.as_text().to_string())),
		);
		form.set_value(Field::TimeFrom, FieldValue::text("10:00"));
		form.set_value(Field::TimeFrom, FieldValue::text("10:00"));
		form.set_value(Field::TimeTo, FieldValue::text("11:00"));

		assert_eq!(*seen.borrow(), vec![String::from("09:00"), String::from("10:00")]);
	}

	#[test]
	fn listener_changes_are_delivered_in_order() {
		let custom_visible = Rc::new(Cell::new(false));
		let days_notifications = Rc::new(Cell::new(0));
		let form = Rc::new(FormState::new());

		let visible = Rc::clone(&custom_visible);
		let weak_form = Rc::downgrade(&form);
		form.subscribe(
			Field::Availability,
			Box::new(move |value| {
				let is_custom = value.as_text() == "Custom";
				visible.set(is_custom);
				if let (false, Some(form)) = (is_custom, weak_form.upgrade()) {
					form.set_value(Field::CustomDays, FieldValue::Empty);
				}
			}),
		);
		let notifications = Rc::clone(&days_notifications);
		form.subscribe(Field::CustomDays, Box::new(move |_| notifications.set(notifications.get() + 1)));
		assert_eq!(days_notifications.get(), 1);

		form.set_value(Field::Availability, FieldValue::text("Custom"));
		assert!(custom_visible.get());
		form.set_value(Field::CustomDays, FieldValue::Days(vec![chrono::Weekday::Tue]));
		assert_eq!(days_notifications.get(), 2);

		form.set_value(Field::Availability, FieldValue::text("Weekends"));
		assert!(!custom_visible.get());
		assert_eq!(form.value(Field::CustomDays), FieldValue::Empty);
		assert_eq!(days_notifications.get(), 3);
	}
}
