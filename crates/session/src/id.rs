// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use pgtemp_core::interface::catalog::PG_TEMP_SCHEMA_NAME;
use uuid::Uuid;

#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq, Ord, Eq, Hash)]
pub struct SessionId(pub u128);

impl SessionId {
	/// A new time ordered session id.
	pub fn generate() -> Self {
		SessionId(Uuid::now_v7().as_u128())
	}

	pub fn from_parts(hi: u64, lo: u64) -> Self {
		SessionId(((hi as u128) << 64) | lo as u128)
	}

	pub fn hi(&self) -> u64 {
		(self.0 >> 64) as u64
	}

	pub fn lo(&self) -> u64 {
		self.0 as u64
	}
}

impl Display for SessionId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:016x}{:016x}", self.hi(), self.lo())
	}
}

/// Display name of the temporary schema owned by `session`.
pub fn temporary_schema_name(session: SessionId) -> String {
	format!("{}_{}_{}", PG_TEMP_SCHEMA_NAME, session.hi(), session.lo())
}
