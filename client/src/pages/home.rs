// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::set_page_title;
use sycamore::prelude::*;

/// Landing page for logged-in doctors. Only reachable through the auth gate.
#[component]
pub fn HomeView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating home page");
	set_page_title("Home");

	view! {
		ctx,
		div(id="home") {
			h1 { "Welcome back" }
			p { "Your appointments and schedule will appear here." }
		}
	}
}
