// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::field_error::FieldErrorMessage;
use crate::dom::event_input;
use crate::form::SignupForm;
use crate::toasts::Toasts;
use chrono::Weekday;
use medibook_shared::form::{Field, FieldValue};
use medibook_shared::profile::{day_name, toggle_day, DAYS};
use medibook_shared::validation::{validate_field, FieldError};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Creates one checkbox state per day in the given scope, starting from the days already chosen.
fn day_checks<'a>(ctx: Scope<'a>, chosen: &[Weekday]) -> Vec<(Weekday, &'a Signal<bool>)> {
	DAYS.iter()
		.map(|day| (*day, create_signal(ctx, chosen.contains(day))))
		.collect()
}

#[derive(Prop)]
pub struct CustomDaySelectorProps<'a> {
	form: SignupForm<'a>,
	error: &'a ReadSignal<Option<FieldError>>,
}

/// Day checkboxes shown while a custom availability schedule is selected
#[component]
pub fn CustomDaySelector<'a, G: Html>(ctx: Scope<'a>, props: CustomDaySelectorProps<'a>) -> View<G> {
	let form = props.form;
	let toasts: &Toasts = use_context(ctx);

	let day_views = View::new_fragment(
		day_checks(ctx, &form.custom_days.get_untracked())
			.into_iter()
			.map(|(day, checked)| {
				let name = day_name(day);
				let input_id = format!("signup_day_{}", name.to_lowercase());
				let input_id_for = input_id.clone();
				let day_change_handler = move |event: WebEvent| {
					let Some(input) = event_input(&event) else {
						return;
					};
					let days = toggle_day(&form.custom_days.get_untracked(), day, input.checked());
					form.set_value(Field::CustomDays, FieldValue::Days(days));
					form.touch(Field::CustomDays);
					if let Err(error) = validate_field(&form, Field::CustomDays) {
						toasts.error(error.message);
					}
				};
				view! {
					ctx,
					div(class="day_option") {
						input(id=input_id, type="checkbox", value=name, bind:checked=checked, on:change=day_change_handler)
						label(for=input_id_for) { (name) }
					}
				}
			})
			.collect(),
	);

	view! {
		ctx,
		div(class="input_with_message") {
			span(class="field_label") { "Select Days" }
			div(class="day_options") { (day_views) }
			FieldErrorMessage(error=props.error)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn checkboxes_start_from_chosen_days() {
		create_scope_immediate(|ctx| {
			let _ = create_child_scope(ctx, |child| {
				let checks = day_checks(child, &[Weekday::Tue, Weekday::Sat]);
				let checked: Vec<Weekday> = checks
					.iter()
					.filter(|(_, checked)| *checked.get())
					.map(|(day, _)| *day)
					.collect();
				assert_eq!(checks.len(), 7);
				assert_eq!(checked, vec![Weekday::Tue, Weekday::Sat]);
			});
		});
	}
}
