// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod auth_gate;
pub mod credential_fields;
pub mod custom_day_selector;
pub mod field_error;
pub mod qualification_fields;
pub mod toast_display;
