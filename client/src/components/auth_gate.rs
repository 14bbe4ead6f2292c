// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::check_session;
use crate::config::LOGIN_ROUTE;
use medibook_shared::session::SessionStatus;
use std::cell::Cell;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate_replace;

#[derive(Prop)]
pub struct AuthGateProps<'a, G: Html> {
	children: Children<'a, G>,
}

/// Shows its children only to visitors with a valid session.
///
/// The session is checked once when the gate is created. Visitors without a session are sent to
/// the login page, replacing the gated page in the history.
#[component]
pub fn AuthGate<'a, G: Html>(ctx: Scope<'a>, props: AuthGateProps<'a, G>) -> View<G> {
	let status = create_signal(ctx, SessionStatus::Pending);

	// The check is dropped along with this scope, so a response after the gate is gone does nothing.
	spawn_local_scoped(ctx, async move {
		let authenticated = match check_session().await {
			Ok(()) => true,
			Err(error) => {
				log::warn!("Session check failed: {}", error);
				false
			}
		};
		status.set(status.get_untracked().resolve(authenticated));
	});

	create_effect(ctx, move || {
		if *status.get() == SessionStatus::Unauthenticated {
			log::debug!("Redirecting unauthenticated visitor to login");
			navigate_replace(LOGIN_ROUTE);
		}
	});

	// The protected content isn't built until the session is confirmed
	let children = create_ref(ctx, Cell::new(Some(props.children)));

	view! {
		ctx,
		(match *status.get() {
			SessionStatus::Pending => view! {
				ctx,
				div(class="auth_gate_loading") { "Loading..." }
			},
			SessionStatus::Authenticated => match children.take() {
				Some(children) => children.call(ctx),
				None => view! { ctx, },
			},
			SessionStatus::Unauthenticated => view! { ctx, },
		})
	}
}
