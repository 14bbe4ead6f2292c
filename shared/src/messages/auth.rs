// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Body of the session check request. The endpoint only inspects the attached cookies.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionCheckRequest {}

/// Request data for checking whether an email address already belongs to an account
#[derive(Debug, Deserialize, Serialize)]
pub struct EmailCheckRequest {
	pub email: String,
}

/// Response data from the server for an email check
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EmailCheckResponse {
	#[serde(default)]
	pub exists: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn session_check_body_is_empty_object() {
		assert_eq!(serde_json::to_string(&SessionCheckRequest::default()).unwrap(), "{}");
	}

	#[test]
	fn email_check_response_without_flag_means_unregistered() {
		let response: EmailCheckResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
		assert!(!response.exists);

		let response: EmailCheckResponse = serde_json::from_str(r#"{"exists":true}"#).unwrap();
		assert!(response.exists);
	}
}
