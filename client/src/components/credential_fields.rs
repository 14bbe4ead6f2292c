// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::field_error::FieldErrorMessage;
use crate::api::check_email;
use crate::form::SignupForm;
use crate::toasts::Toasts;
use medibook_shared::form::Field;
use medibook_shared::validation::credentials::validate_email;
use medibook_shared::validation::email_check::{interpret_email_check, EmailCheckState, EMAIL_CHECK_POLICY};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct CredentialFieldsProps<'a> {
	form: SignupForm<'a>,
}

/// Email, password, and password confirmation fields of the signup form
#[component]
pub fn CredentialFields<'a, G: Html>(ctx: Scope<'a>, props: CredentialFieldsProps<'a>) -> View<G> {
	let form = props.form;
	let toasts: &Toasts = use_context(ctx);

	let email_error = form.displayed_email_error(ctx);
	let password_error = form.displayed_error(ctx, Field::Password);
	let confirm_password_error = form.displayed_error(ctx, Field::ConfirmPassword);
	let email_error_class = create_memo(ctx, move || if email_error.get().is_some() { "error" } else { "" });
	let email_checking = create_memo(ctx, move || form.email_check.get().is_pending_for(&form.email.get()));

	let email_signal = create_selector(ctx, move || (*form.email.get()).clone());
	create_effect(ctx, move || {
		let email = (*email_signal.get()).clone();

		if validate_email(&email).is_err() {
			if *form.email_check.get_untracked() != EmailCheckState::Idle {
				form.email_check.set(EmailCheckState::Idle);
			}
			return;
		}

		{
			let check_state = form.email_check.get_untracked();
			if check_state.is_pending_for(&email) || check_state.result_for(&email).is_some() {
				return;
			}
		}
		form.email_check.set(EmailCheckState::Pending { email: email.clone() });

		spawn_local_scoped(ctx, async move {
			let outcome = check_email(&email).await;
			if let Err(error) = outcome.as_ref() {
				log::warn!("Email availability check failed; allowing signup to continue: {}", error);
			}
			let result = interpret_email_check(outcome, EMAIL_CHECK_POLICY);

			// Only apply the result if the field still holds the address that was checked
			let mut check_state = (*form.email_check.get_untracked()).clone();
			if check_state.settle(&email, result) {
				form.email_check.set(check_state);
				if let Err(error) = result {
					toasts.error(error.message);
				}
			}
		});
	});

	// An unfinished check is abandoned with this view; forget it so it's made again on return.
	on_cleanup(ctx, move || {
		if matches!(*form.email_check.get_untracked(), EmailCheckState::Pending { .. }) {
			form.email_check.set(EmailCheckState::Idle);
		}
	});

	view! {
		ctx,
		div(class="signup_step") {
			h2 { "Email & Password" }
			div(class="input_with_message") {
				label(for="signup_email") { "Email" }
				input(
					id="signup_email",
					type="email",
					class=*email_error_class.get(),
					bind:value=form.email,
					on:blur=move |_event: WebEvent| form.touch(Field::Email)
				)
				(
					if *email_checking.get() {
						view! {
							ctx,
							span(class="input_pending") { "Checking availability..." }
						}
					} else {
						view! { ctx, }
					}
				)
				FieldErrorMessage(error=email_error)
			}
			div(class="input_with_message") {
				label(for="signup_password") { "Password" }
				input(
					id="signup_password",
					type="password",
					bind:value=form.password,
					on:blur=move |_event: WebEvent| form.touch(Field::Password)
				)
				FieldErrorMessage(error=password_error)
			}
			div(class="input_with_message") {
				label(for="signup_confirm_password") { "Confirm Password" }
				input(
					id="signup_confirm_password",
					type="password",
					bind:value=form.confirm_password,
					on:blur=move |_event: WebEvent| form.touch(Field::ConfirmPassword)
				)
				FieldErrorMessage(error=confirm_password_error)
			}
		}
	}
}
