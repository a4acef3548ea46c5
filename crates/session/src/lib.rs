// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod data;
mod id;
mod search_path;
mod stack;

pub use data::{SessionData, SessionDataBuilder};
pub use id::{SessionId, temporary_schema_name};
pub use search_path::SearchPath;
pub use stack::SessionDataStack;
