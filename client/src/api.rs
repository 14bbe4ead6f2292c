// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::api_endpoint;
use gloo_net::http::{Request, Response};
use medibook_shared::messages::auth::{EmailCheckRequest, EmailCheckResponse, SessionCheckRequest};
use std::fmt;
use web_sys::{FormData, RequestCredentials};

/// Errors that can occur when calling the backend API
#[derive(Debug)]
pub enum ApiError {
	/// The request couldn't be built or didn't get a response
	Network(gloo_net::Error),
	/// The server responded with a non-success status code
	Status(u16),
	/// The response body couldn't be decoded
	Body(gloo_net::Error),
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "Failed to reach the server: {}", error),
			Self::Status(status) => write!(f, "The server responded with status {}", status),
			Self::Body(error) => write!(f, "An invalid response was received: {}", error),
		}
	}
}

impl From<gloo_net::Error> for ApiError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

fn require_success(response: Response) -> Result<Response, ApiError> {
	if response.ok() {
		Ok(response)
	} else {
		Err(ApiError::Status(response.status()))
	}
}

/// Asks the server whether the session cookie belongs to a logged-in user.
///
/// Any success status counts as authenticated; the response body isn't read.
pub async fn check_session() -> Result<(), ApiError> {
	let response = Request::post(&api_endpoint("/auth/check"))
		.credentials(RequestCredentials::Include)
		.json(&SessionCheckRequest::default())?
		.send()
		.await?;
	require_success(response)?;
	Ok(())
}

/// Asks the server whether an email address already belongs to an account.
pub async fn check_email(email: &str) -> Result<EmailCheckResponse, ApiError> {
	let request_body = EmailCheckRequest {
		email: email.to_string(),
	};
	let response = Request::post(&api_endpoint("/auth/check-email"))
		.credentials(RequestCredentials::Include)
		.json(&request_body)?
		.send()
		.await?;
	let response = require_success(response)?;
	response.json().await.map_err(ApiError::Body)
}

/// Sends a completed signup form, including the qualification document.
pub async fn submit_signup(form_data: FormData) -> Result<(), ApiError> {
	let response = Request::post(&api_endpoint("/auth/signup"))
		.credentials(RequestCredentials::Include)
		.body(form_data)?
		.send()
		.await?;
	require_success(response)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_failures_are_network_errors() {
		let error = ApiError::from(gloo_net::Error::GlooError(String::from("connection refused")));
		assert!(matches!(error, ApiError::Network(_)));
		assert_eq!(error.to_string(), "Failed to reach the server: connection refused");
	}
}
