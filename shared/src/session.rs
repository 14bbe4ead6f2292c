// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Status of the session check performed when a protected view is opened.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SessionStatus {
	/// The check hasn't resolved yet.
	#[default]
	Pending,
	Authenticated,
	Unauthenticated,
}

impl SessionStatus {
	/// Whether the session check has produced a final answer.
	pub fn is_settled(&self) -> bool {
		!matches!(self, Self::Pending)
	}

	/// Gets the status following the resolution of a session check.
	///
	/// Only a pending status can transition. Once settled, later resolutions are ignored, so each
	/// check moves the status out of [`SessionStatus::Pending`] exactly once.
	pub fn resolve(self, authenticated: bool) -> Self {
		match self {
			Self::Pending if authenticated => Self::Authenticated,
			Self::Pending => Self::Unauthenticated,
			settled => settled,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_pending() {
		assert_eq!(SessionStatus::default(), SessionStatus::Pending);
		assert!(!SessionStatus::default().is_settled());
	}

	#[test]
	fn resolves_once_for_each_outcome() {
		for authenticated in [true, false] {
			let status = SessionStatus::Pending.resolve(authenticated);
			assert!(status.is_settled());
			let expected = if authenticated {
				SessionStatus::Authenticated
			} else {
				SessionStatus::Unauthenticated
			};
			assert_eq!(status, expected);

			// A late second resolution can't flip the outcome
			assert_eq!(status.resolve(!authenticated), expected);
		}
	}
}
