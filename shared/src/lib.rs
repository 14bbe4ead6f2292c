// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Domain types and validation rules for the MediBook signup and session flows.
//!
//! Everything in this crate is free of browser dependencies so that it can be tested natively.

pub mod form;
pub mod messages;
pub mod profile;
pub mod session;
pub mod signup;
pub mod upload;
pub mod validation;
