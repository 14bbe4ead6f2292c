// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interpretation of the remote email uniqueness check.

use super::{FieldError, FieldResult};
use crate::form::Field;
use crate::messages::auth::EmailCheckResponse;

pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";
pub const EMAIL_CHECK_UNAVAILABLE: &str = "Unable to verify this email right now";

/// What to conclude when the uniqueness check itself can't be completed
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OnTransportError {
	/// Let the user continue. The server repeats the check when the signup is submitted.
	#[default]
	TreatAsValid,
	TreatAsInvalid,
}

/// The policy used by the signup form
pub const EMAIL_CHECK_POLICY: OnTransportError = OnTransportError::TreatAsValid;

/// Turns the outcome of an email check request into a validation result.
pub fn interpret_email_check<E>(outcome: Result<EmailCheckResponse, E>, policy: OnTransportError) -> FieldResult {
	match outcome {
		Ok(response) if response.exists => Err(FieldError::new(Field::Email, EMAIL_ALREADY_REGISTERED)),
		Ok(_) => Ok(()),
		Err(_) => match policy {
			OnTransportError::TreatAsValid => Ok(()),
			OnTransportError::TreatAsInvalid => Err(FieldError::new(Field::Email, EMAIL_CHECK_UNAVAILABLE)),
		},
	}
}

/// Progress of the uniqueness check for the address currently in the email field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum EmailCheckState {
	#[default]
	Idle,
	Pending { email: String },
	Settled { email: String, result: FieldResult },
}

impl EmailCheckState {
	/// Gets the settled result of the check, if it was made for this address.
	pub fn result_for(&self, email: &str) -> Option<FieldResult> {
		match self {
			Self::Settled {
				email: checked_email,
				result,
			} if checked_email == email => Some(*result),
			_ => None,
		}
	}

	pub fn is_pending_for(&self, email: &str) -> bool {
		matches!(self, Self::Pending { email: checked_email } if checked_email == email)
	}

	/// Records a finished check. Results for an address other than the one currently being checked
	/// are stale and dropped; returns whether the result was kept.
	pub fn settle(&mut self, email: &str, result: FieldResult) -> bool {
		if !self.is_pending_for(email) {
			return false;
		}
		*self = Self::Settled {
			email: email.to_string(),
			result,
		};
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct TransportFailure;

	#[test]
	fn registered_email_fails() {
		let outcome: Result<EmailCheckResponse, TransportFailure> = Ok(EmailCheckResponse { exists: true });
		let result = interpret_email_check(outcome, EMAIL_CHECK_POLICY);
		assert_eq!(result.map_err(|error| error.message), Err("Email already registered"));
	}

	#[test]
	fn unregistered_email_passes() {
		let outcome: Result<EmailCheckResponse, TransportFailure> = Ok(EmailCheckResponse { exists: false });
		assert_eq!(interpret_email_check(outcome, EMAIL_CHECK_POLICY), Ok(()));
	}

	#[test]
	fn transport_failure_follows_policy() {
		assert_eq!(EMAIL_CHECK_POLICY, OnTransportError::TreatAsValid);
		assert_eq!(
			interpret_email_check::<TransportFailure>(Err(TransportFailure), OnTransportError::TreatAsValid),
			Ok(())
		);
		assert_eq!(
			interpret_email_check::<TransportFailure>(Err(TransportFailure), OnTransportError::TreatAsInvalid)
				.map_err(|error| error.message),
			Err(EMAIL_CHECK_UNAVAILABLE)
		);
	}

	#[test]
	fn stale_results_are_dropped() {
		let mut state = EmailCheckState::Pending {
			email: String::from("second@example.com"),
		};
		assert!(!state.settle("first@example.com", Ok(())));
		assert!(state.is_pending_for("second@example.com"));

		let registered = Err(FieldError::new(Field::Email, EMAIL_ALREADY_REGISTERED));
		assert!(state.settle("second@example.com", registered));
		assert_eq!(state.result_for("second@example.com"), Some(registered));
		assert_eq!(state.result_for("first@example.com"), None);

		// A settled check isn't overwritten by a duplicate response
		assert!(!state.settle("second@example.com", Ok(())));
	}
}
