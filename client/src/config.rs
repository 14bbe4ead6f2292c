// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::Url;

/// Route the auth gate sends unauthenticated visitors to
pub const LOGIN_ROUTE: &str = "/login";

/// How long a notification stays on screen unless dismissed, in milliseconds
pub const TOAST_LIFETIME_MS: u32 = 4_000;

/// Base URL of the backend API, fixed at build time through the `MEDIBOOK_API_URL` environment
/// variable. When it isn't set, the API is expected at `/api` on the origin serving the client.
const CONFIGURED_API_URL: Option<&str> = option_env!("MEDIBOOK_API_URL");

/// Gets the base URL of the backend API, without a trailing slash.
///
/// # Panics
///
/// This function panics when no base URL was configured at build time and the browser context
/// (window, location, URL, etc.) is inaccessible.
pub fn api_base_url() -> String {
	if let Some(url) = CONFIGURED_API_URL {
		return url.trim_end_matches('/').to_string();
	}

	let js_location = web_sys::window()
		.expect("Failed to get browser window context")
		.location();
	let web_endpoint = js_location.href().expect("Failed to get current address");
	let url = Url::new(&web_endpoint).expect("Failed to generate URL instance");
	format!("{}/api", url.origin())
}

/// Gets the full URL for an API path such as `/auth/check`.
pub fn api_endpoint(path: &str) -> String {
	join_endpoint(&api_base_url(), path)
}

fn join_endpoint(base_url: &str, path: &str) -> String {
	format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
	use super::join_endpoint;

	#[test]
	fn joins_with_single_slash() {
		assert_eq!(
			join_endpoint("https://api.example.com/", "/auth/check"),
			"https://api.example.com/auth/check"
		);
		assert_eq!(
			join_endpoint("https://example.com/api", "auth/check-email"),
			"https://example.com/api/auth/check-email"
		);
	}
}
