// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::toasts::Toasts;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn ToastDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let toasts: &Toasts = use_context(ctx);
	let toast_list = create_memo(ctx, || (*toasts.list.get()).clone());

	view! {
		ctx,
		ul(id="page_toasts") {
			Keyed(
				iterable=toast_list,
				view=|ctx, toast| {
					let dismiss_handler = {
						let toasts: Toasts = use_context::<Toasts>(ctx).clone();
						let id = toast.id;
						move |_event: WebEvent| toasts.dismiss(id)
					};
					toast.to_view(ctx, dismiss_handler)
				},
				key=|toast| toast.id
			)
		}
	}
}
