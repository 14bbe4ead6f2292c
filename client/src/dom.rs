// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, File, HtmlInputElement};

/// Gets the input element an event was dispatched to.
pub fn event_input(event: &WebEvent) -> Option<HtmlInputElement> {
	event.target()?.dyn_into::<HtmlInputElement>().ok()
}

/// Gets the first file selected in a file input.
pub fn first_selected_file(input: &HtmlInputElement) -> Option<File> {
	input.files()?.get(0)
}
