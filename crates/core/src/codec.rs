// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

const TENANT_PREFIX: u8 = 0xFE;

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(pub u64);

impl TenantId {
	pub const SYSTEM: TenantId = TenantId(1);
}

impl Display for TenantId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// Addresses keys of one tenant inside the shared store. The system tenant
/// uses no prefix; every other tenant prefixes its keys with its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codec {
	tenant: TenantId,
	prefix: Vec<u8>,
}

impl Codec {
	pub fn system() -> Self {
		Self {
			tenant: TenantId::SYSTEM,
			prefix: Vec::new(),
		}
	}

	pub fn for_tenant(tenant: TenantId) -> Self {
		if tenant == TenantId::SYSTEM {
			return Self::system();
		}

		let mut prefix = Vec::with_capacity(9);
		prefix.push(TENANT_PREFIX);
		prefix.extend(&tenant.0.to_be_bytes());

		Self {
			tenant,
			prefix,
		}
	}

	pub fn tenant(&self) -> TenantId {
		self.tenant
	}

	pub fn prefix(&self) -> &[u8] {
		&self.prefix
	}

	pub fn strip_prefix<'a>(&self, key: &'a [u8]) -> Option<&'a [u8]> {
		let rest = key.strip_prefix(self.prefix.as_slice())?;
		// the system tenant must not claim keys of other tenants
		if self.prefix.is_empty() && rest.first() == Some(&TENANT_PREFIX) {
			return None;
		}
		Some(rest)
	}
}

impl Default for Codec {
	fn default() -> Self {
		Self::system()
	}
}
