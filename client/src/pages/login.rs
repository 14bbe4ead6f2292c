// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::set_page_title;
use sycamore::prelude::*;

#[component]
pub fn LoginView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating login page");
	set_page_title("Log In");

	view! {
		ctx,
		div(id="login") {
			h1 { "Log in" }
			p { "You need to be logged in to view that page." }
			p {
				"Don't have an account yet? "
				a(href="/signup") { "Register as a doctor" }
			}
		}
	}
}
