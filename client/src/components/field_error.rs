// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use medibook_shared::validation::FieldError;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct FieldErrorProps<'a> {
	error: &'a ReadSignal<Option<FieldError>>,
}

#[component]
pub fn FieldErrorMessage<'a, G: Html>(ctx: Scope<'a>, props: FieldErrorProps<'a>) -> View<G> {
	view! {
		ctx,
		(match *props.error.get() {
			Some(error) => view! {
				ctx,
				span(class="input_error") { (error.message) }
			},
			None => view! { ctx, }
		})
	}
}
