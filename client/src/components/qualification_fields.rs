// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::custom_day_selector::CustomDaySelector;
use super::field_error::FieldErrorMessage;
use crate::dom::{event_input, first_selected_file};
use crate::form::{SelectedFile, SignupForm};
use crate::toasts::Toasts;
use medibook_shared::form::Field;
use medibook_shared::profile::{Availability, Specialization};
use medibook_shared::upload::{apply_selection, ACCEPT_ATTRIBUTE};
use medibook_shared::validation::validate_field;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct QualificationFieldsProps<'a> {
	form: SignupForm<'a>,
	/// Whether the custom day selector is shown. Owned by the signup page.
	custom_availability: &'a ReadSignal<bool>,
}

/// Professional details of the signup form: specialty, experience, qualification document, and
/// availability schedule
#[component]
pub fn QualificationFields<'a, G: Html>(ctx: Scope<'a>, props: QualificationFieldsProps<'a>) -> View<G> {
	let form = props.form;
	let custom_availability = props.custom_availability;
	let toasts: &Toasts = use_context(ctx);

	let specialization_error = form.displayed_error(ctx, Field::Specialization);
	let experience_error = form.displayed_error(ctx, Field::Experience);
	let qualifications_error = form.displayed_error(ctx, Field::Qualifications);
	let availability_error = form.displayed_error(ctx, Field::Availability);
	let custom_days_error = form.displayed_error(ctx, Field::CustomDays);
	let time_from_error = form.displayed_error(ctx, Field::TimeFrom);
	let time_to_error = form.displayed_error(ctx, Field::TimeTo);

	let toast_if_invalid = move |field: Field| {
		if let Err(error) = validate_field(&form, field) {
			toasts.error(error.message);
		}
	};

	let file_change_handler = move |event: WebEvent| {
		let Some(input) = event_input(&event) else {
			return;
		};
		let Some(file) = first_selected_file(&input) else {
			return;
		};
		let selected = SelectedFile::new(file);
		let file_name = selected.descriptor.name.clone();

		let mut tracked = (*form.qualifications.get_untracked()).clone();
		let outcome = apply_selection(&mut tracked, selected);
		form.qualifications.set(tracked);
		match outcome {
			Ok(()) => toasts.success("File uploaded successfully!"),
			Err(rejection) => {
				log::debug!("Rejected qualification document {}: {}", file_name, rejection);
				toasts.error(rejection.message());
				input.set_value("");
			}
		}
	};

	let specialization_options = View::new_fragment(
		Specialization::ALL
			.iter()
			.map(|specialization| {
				let label = specialization.label();
				view! { ctx, option(value=label) { (label) } }
			})
			.collect(),
	);
	let availability_options = View::new_fragment(
		Availability::ALL
			.iter()
			.map(|availability| {
				let label = availability.label();
				view! { ctx, option(value=label) { (label) } }
			})
			.collect(),
	);

	view! {
		ctx,
		div(class="signup_step") {
			h2 { "Qualifications" }
			div(class="input_with_message") {
				label(for="signup_specialization") { "Specialist Type" }
				select(
					id="signup_specialization",
					bind:value=form.specialization,
					on:change=move |_event: WebEvent| toast_if_invalid(Field::Specialization),
					on:blur=move |_event: WebEvent| form.touch(Field::Specialization)
				) {
					option(value="") { "Select Specialist Type" }
					(specialization_options)
				}
				FieldErrorMessage(error=specialization_error)
			}
			div(class="input_with_message") {
				label(for="signup_experience") { "Experience (years)" }
				input(
					id="signup_experience",
					type="number",
					min="0",
					bind:value=form.experience,
					on:change=move |_event: WebEvent| toast_if_invalid(Field::Experience),
					on:blur=move |_event: WebEvent| form.touch(Field::Experience)
				)
				FieldErrorMessage(error=experience_error)
			}
			div(class="input_with_message") {
				label(for="signup_qualifications") { "Upload Qualifications (PDF, JPG, JPEG, PNG)" }
				input(
					id="signup_qualifications",
					type="file",
					accept=ACCEPT_ATTRIBUTE,
					on:change=file_change_handler,
					on:blur=move |_event: WebEvent| form.touch(Field::Qualifications)
				)
				(
					match &*form.qualifications.get() {
						Some(selected) => {
							let file_name = selected.descriptor.name.clone();
							view! {
								ctx,
								p(class="selected_file") { "Selected file: " (file_name) }
							}
						}
						None => view! { ctx, },
					}
				)
				FieldErrorMessage(error=qualifications_error)
			}
			div(class="input_with_message") {
				label(for="signup_availability") { "Availability" }
				select(
					id="signup_availability",
					bind:value=form.availability,
					on:change=move |_event: WebEvent| toast_if_invalid(Field::Availability),
					on:blur=move |_event: WebEvent| form.touch(Field::Availability)
				) {
					option(value="") { "Select Availability" }
					(availability_options)
				}
				FieldErrorMessage(error=availability_error)
			}
			(
				if *custom_availability.get() {
					view! { ctx, CustomDaySelector(form=form, error=custom_days_error) }
				} else {
					view! { ctx, }
				}
			)
			div(class="input_with_message") {
				span(class="field_label") { "Available Time" }
				div(class="time_range") {
					div(class="time_range_bound") {
						label(for="signup_time_from") { "From" }
						input(
							id="signup_time_from",
							type="time",
							bind:value=form.time_from,
							on:change=move |_event: WebEvent| toast_if_invalid(Field::TimeFrom),
							on:blur=move |_event: WebEvent| form.touch(Field::TimeFrom)
						)
						FieldErrorMessage(error=time_from_error)
					}
					div(class="time_range_bound") {
						label(for="signup_time_to") { "To" }
						input(
							id="signup_time_to",
							type="time",
							bind:value=form.time_to,
							on:change=move |_event: WebEvent| toast_if_invalid(Field::TimeTo),
							on:blur=move |_event: WebEvent| form.touch(Field::TimeTo)
						)
						FieldErrorMessage(error=time_to_error)
					}
				}
			}
		}
	}
}
