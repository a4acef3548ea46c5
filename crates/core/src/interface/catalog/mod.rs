// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use id::*;
pub use schema::*;

mod id;
mod schema;
