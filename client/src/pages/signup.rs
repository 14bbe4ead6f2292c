// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::submit_signup;
use crate::components::credential_fields::CredentialFields;
use crate::components::qualification_fields::QualificationFields;
use crate::config::LOGIN_ROUTE;
use crate::form::SignupForm;
use crate::page_utils::set_page_title;
use crate::toasts::Toasts;
use medibook_shared::form::{Field, FieldValue, FormController};
use medibook_shared::profile::Availability;
use medibook_shared::signup::text_entries;
use medibook_shared::validation::validate_all;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use wasm_bindgen::JsValue;
use web_sys::{Event as WebEvent, FormData};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SignupStep {
	Credentials,
	Qualifications,
}

fn build_form_data(form: &SignupForm<'_>) -> Result<FormData, JsValue> {
	let form_data = FormData::new()?;
	for (name, value) in text_entries(form) {
		form_data.append_with_str(name, &value)?;
	}
	if let Some(selected) = &*form.qualifications.get_untracked() {
		form_data.append_with_blob_and_filename(
			Field::Qualifications.wire_name(),
			&selected.file,
			&selected.descriptor.name,
		)?;
	}
	Ok(form_data)
}

#[component]
pub fn SignupView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating signup page");
	set_page_title("Sign Up");

	let toasts: &Toasts = use_context(ctx);
	let form = SignupForm::new(ctx);
	let custom_availability = create_signal(ctx, false);
	form.scoped(ctx).subscribe(
		Field::Availability,
		Box::new(move |value| {
			let is_custom = Availability::is_custom(value.as_text());
			custom_availability.set(is_custom);
			// Days chosen for a custom schedule don't carry over to another availability choice
			if !is_custom {
				form.set_value(Field::CustomDays, FieldValue::Empty);
			}
		}),
	);
	let step = create_signal(ctx, SignupStep::Credentials);
	let submitting = create_signal(ctx, false);

	let credentials_ready = form.credentials_ready_signal(ctx);
	let form_errors = create_memo(ctx, move || validate_all(&form));
	let submit_blocked = create_memo(ctx, move || {
		*submitting.get() || !*credentials_ready.get() || !form_errors.get().is_empty()
	});

	let next_handler = move |_event: WebEvent| {
		if *credentials_ready.get() {
			step.set(SignupStep::Qualifications);
		}
	};
	let back_handler = move |_event: WebEvent| step.set(SignupStep::Credentials);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		if *submit_blocked.get() {
			for field in Field::ALL {
				form.touch(field);
			}
			if let Some(error) = form_errors.get().iter().next() {
				toasts.error(error.message);
			}
			return;
		}

		let form_data = match build_form_data(&form) {
			Ok(data) => data,
			Err(error) => {
				log::error!("Failed to build signup form data: {:?}", error);
				toasts.error("Failed to prepare the signup form. Please try again.");
				return;
			}
		};

		submitting.set(true);
		spawn_local_scoped(ctx, async move {
			match submit_signup(form_data).await {
				Ok(()) => {
					log::debug!("Signup accepted; redirecting to login");
					toasts.success("Registration complete! Please log in.");
					navigate(LOGIN_ROUTE);
				}
				Err(error) => {
					log::warn!("Signup submission failed: {}", error);
					toasts.error(format!("Registration failed: {}", error));
					submitting.set(false);
				}
			}
		});
	};

	view! {
		ctx,
		div(id="signup") {
			h1 { "Register as a Doctor" }
			form(id="signup_form", on:submit=form_submission_handler) {
				(match *step.get() {
					SignupStep::Credentials => view! {
						ctx,
						CredentialFields(form=form)
						div(class="signup_buttons") {
							button(type="button", disabled=!*credentials_ready.get(), on:click=next_handler) { "Next" }
						}
					},
					SignupStep::Qualifications => view! {
						ctx,
						QualificationFields(form=form, custom_availability=custom_availability)
						div(class="signup_buttons") {
							button(type="button", on:click=back_handler) { "Back" }
							button(type="submit", disabled=*submit_blocked.get()) {
								(if *submitting.get() { "Submitting..." } else { "Sign Up" })
							}
						}
					},
				})
			}
			p {
				"Already registered? "
				a(href=LOGIN_ROUTE) { "Log in" }
			}
		}
	}
}
