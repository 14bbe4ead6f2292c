// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{FieldError, FieldResult};
use crate::form::Field;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_TOO_WEAK: &str = "Password must contain uppercase, lowercase, number and special character";
pub const CONFIRMATION_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols a password may contain. At least one of them is required.
pub const PASSWORD_SYMBOLS: &str = "@#$!%*?&";

/// Checks for a `local@domain.tld` shape: a single `@`, no whitespace, and a dot inside the domain
/// with text on both sides.
pub fn is_email_shaped(email: &str) -> bool {
	if email.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	domain
		.char_indices()
		.any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

pub fn validate_email(email: &str) -> FieldResult {
	if email.is_empty() {
		return Err(FieldError::new(Field::Email, EMAIL_REQUIRED));
	}
	if !is_email_shaped(email) {
		return Err(FieldError::new(Field::Email, EMAIL_INVALID));
	}
	Ok(())
}

fn is_password_symbol(c: char) -> bool {
	PASSWORD_SYMBOLS.contains(c)
}

pub fn validate_password(password: &str) -> FieldResult {
	if password.is_empty() {
		return Err(FieldError::new(Field::Password, PASSWORD_REQUIRED));
	}
	if password.chars().count() < PASSWORD_MIN_LENGTH {
		return Err(FieldError::new(Field::Password, PASSWORD_TOO_SHORT));
	}

	let only_allowed_characters = password
		.chars()
		.all(|c| c.is_ascii_alphanumeric() || is_password_symbol(c));
	let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
	let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
	let has_digit = password.chars().any(|c| c.is_ascii_digit());
	let has_symbol = password.chars().any(is_password_symbol);
	if !(only_allowed_characters && has_lowercase && has_uppercase && has_digit && has_symbol) {
		return Err(FieldError::new(Field::Password, PASSWORD_TOO_WEAK));
	}
	Ok(())
}

/// Checks the confirmation against the password as it is right now.
pub fn validate_password_confirmation(confirmation: &str, password: &str) -> FieldResult {
	if confirmation.is_empty() {
		return Err(FieldError::new(Field::ConfirmPassword, CONFIRMATION_REQUIRED));
	}
	if confirmation != password {
		return Err(FieldError::new(Field::ConfirmPassword, PASSWORDS_DO_NOT_MATCH));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn message(result: FieldResult) -> Option<&'static str> {
		result.err().map(|error| error.message)
	}

	#[test]
	fn email_shape() {
		assert!(is_email_shaped("doctor@clinic.org"));
		assert!(is_email_shaped("a.b+c@mail.example.co"));
		assert!(!is_email_shaped("doctor"));
		assert!(!is_email_shaped("doctor@clinic"));
		assert!(!is_email_shaped("@clinic.org"));
		assert!(!is_email_shaped("doctor@.org"));
		assert!(!is_email_shaped("doctor@clinic."));
		assert!(!is_email_shaped("doc tor@clinic.org"));
		assert!(!is_email_shaped("doctor@clinic@org.com"));
	}

	#[test]
	fn email_messages() {
		assert_eq!(message(validate_email("")), Some(EMAIL_REQUIRED));
		assert_eq!(message(validate_email("not-an-email")), Some(EMAIL_INVALID));
		assert_eq!(message(validate_email("doctor@clinic.org")), None);
	}

	#[test]
	fn password_rules() {
		assert_eq!(message(validate_password("Abcdef1!")), None);
		assert_eq!(message(validate_password("abcdefgh")), Some(PASSWORD_TOO_WEAK));
		assert_eq!(message(validate_password("Ab1!")), Some(PASSWORD_TOO_SHORT));
		assert_eq!(message(validate_password("")), Some(PASSWORD_REQUIRED));
		assert_eq!(message(validate_password("ABCDEFG1!")), Some(PASSWORD_TOO_WEAK));
		assert_eq!(message(validate_password("Abcdefg1")), Some(PASSWORD_TOO_WEAK));
		// Characters outside the allowed set are refused even with every class present
		assert_eq!(message(validate_password("Abcdef1! ")), Some(PASSWORD_TOO_WEAK));
		assert_eq!(message(validate_password("Abcdef1^")), Some(PASSWORD_TOO_WEAK));
	}

	#[test]
	fn confirmation_must_match_exactly() {
		assert_eq!(message(validate_password_confirmation("Abcdef1!", "Abcdef1!")), None);
		assert_eq!(
			message(validate_password_confirmation("Abcdef1?", "Abcdef1!")),
			Some(PASSWORDS_DO_NOT_MATCH)
		);
		assert_eq!(
			message(validate_password_confirmation("abcdef1!", "Abcdef1!")),
			Some(PASSWORDS_DO_NOT_MATCH)
		);
		assert_eq!(message(validate_password_confirmation("", "Abcdef1!")), Some(CONFIRMATION_REQUIRED));
	}
}
