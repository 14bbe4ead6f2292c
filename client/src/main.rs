// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

mod api;
mod app;
mod components;
mod config;
mod dom;
mod form;
mod page_utils;
mod pages;
mod toasts;

use app::App;
use toasts::Toasts;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

	sycamore::render(|ctx| {
		provide_context(ctx, Toasts::new());

		view! {
			ctx,
			App {}
		}
	});
}
