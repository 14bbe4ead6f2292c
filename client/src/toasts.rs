// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::TOAST_LIFETIME_MS;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastKind {
	Success,
	Error,
}

impl ToastKind {
	fn class(&self) -> &'static str {
		match self {
			Self::Success => "toast toast_success",
			Self::Error => "toast toast_error",
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ToastData {
	pub id: u32,
	kind: ToastKind,
	message: String,
}

impl ToastData {
	pub fn to_view<G: Html>(&self, ctx: Scope<'_>, dismiss_handler: impl Fn(WebEvent) + 'static) -> View<G> {
		let class = self.kind.class();
		let message = self.message.clone();
		view! {
			ctx,
			li(class=class, on:click=dismiss_handler) {
				span(class="toast_text") { (message) }
			}
		}
	}
}

/// Transient notifications shown over the page.
///
/// Notifications are purely presentational. Whether a validation failure deserves one is decided
/// by the event handler reacting to the user's change.
#[derive(Clone)]
pub struct Toasts {
	pub list: RcSignal<Vec<ToastData>>,
	next_id: Rc<Cell<u32>>,
}

impl Toasts {
	pub fn new() -> Self {
		Self {
			list: create_rc_signal(Vec::new()),
			next_id: Rc::new(Cell::new(0)),
		}
	}

	pub fn success(&self, message: impl Into<String>) {
		self.push(ToastKind::Success, message.into());
	}

	pub fn error(&self, message: impl Into<String>) {
		self.push(ToastKind::Error, message.into());
	}

	pub fn dismiss(&self, id: u32) {
		let index = self.list.get().iter().position(|toast| toast.id == id);
		if let Some(index) = index {
			self.list.modify().remove(index);
		}
	}

	fn push(&self, kind: ToastKind, message: String) {
		let id = self.next_id.get();
		self.next_id.set(id.wrapping_add(1));
		log::debug!("Showing notification {}: {}", id, message);
		self.list.modify().push(ToastData { id, kind, message });

		let toasts = self.clone();
		spawn_local(async move {
			TimeoutFuture::new(TOAST_LIFETIME_MS).await;
			toasts.dismiss(id);
		});
	}
}
