// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use pgtemp_core::{CommitVersion, EncodedKey, EncodedKeyRange};
use pgtemp_type::Result;

use crate::{
	multi::{Inner, TransactionState},
	store::MultiVersionValues,
};

/// Read-only view of the store at a fixed version.
#[derive(Debug)]
pub struct QueryTransaction {
	inner: Arc<Inner>,
	version: CommitVersion,
	state: TransactionState,
}

impl QueryTransaction {
	pub(crate) fn new(inner: Arc<Inner>, version: CommitVersion) -> Self {
		Self {
			inner,
			version,
			state: TransactionState::Active,
		}
	}

	pub fn version(&self) -> CommitVersion {
		self.version
	}

	pub fn get(&mut self, key: &EncodedKey) -> Result<Option<MultiVersionValues>> {
		self.state.ensure_active()?;
		Ok(self.inner.store.get(key, self.version))
	}

	pub fn contains_key(&mut self, key: &EncodedKey) -> Result<bool> {
		Ok(self.get(key)?.is_some())
	}

	pub fn range(&mut self, range: EncodedKeyRange) -> Result<Vec<MultiVersionValues>> {
		self.state.ensure_active()?;
		Ok(self.inner.store.range(range, self.version))
	}

	/// Releases the snapshot. Any later read fails.
	pub fn rollback(&mut self) -> Result<()> {
		self.state.ensure_active()?;
		self.state = TransactionState::RolledBack;
		Ok(())
	}
}
