// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use parking_lot::Mutex;
use pgtemp_core::CommitVersion;
use pgtemp_type::Result;
use tracing::instrument;

pub use command::CommandTransaction;
pub use query::QueryTransaction;

use crate::{error::TransactionError, store::MultiVersionStore};

mod command;
mod conflict;
mod query;

/// Handle to the store shared by every transaction. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct TransactionMulti {
	inner: Arc<Inner>,
}

#[derive(Debug, Default)]
pub(crate) struct Inner {
	pub(crate) store: MultiVersionStore,
	// guards the latest committed version and serializes commits
	pub(crate) version: Mutex<CommitVersion>,
}

impl TransactionMulti {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn version(&self) -> CommitVersion {
		*self.inner.version.lock()
	}

	/// Read-only transaction over the latest committed snapshot.
	#[instrument(name = "transaction::query::begin", level = "trace", skip(self))]
	pub fn begin_query(&self) -> QueryTransaction {
		QueryTransaction::new(self.inner.clone(), self.version())
	}

	/// Read-only transaction over the snapshot at `version`.
	#[instrument(name = "transaction::query::begin_at", level = "trace", skip(self))]
	pub fn begin_query_at(&self, version: CommitVersion) -> Result<QueryTransaction> {
		let latest = self.version();
		if version > latest {
			return Err(TransactionError::VersionAhead {
				requested: version,
				latest,
			}
			.into());
		}
		Ok(QueryTransaction::new(self.inner.clone(), version))
	}

	#[instrument(name = "transaction::command::begin", level = "trace", skip(self))]
	pub fn begin_command(&self) -> CommandTransaction {
		CommandTransaction::new(self.inner.clone(), self.version())
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum TransactionState {
	Active,
	Committed,
	RolledBack,
}

impl TransactionState {
	pub(crate) fn ensure_active(self) -> Result<()> {
		match self {
			TransactionState::Active => Ok(()),
			TransactionState::Committed | TransactionState::RolledBack => Err(TransactionError::Discarded.into()),
		}
	}
}
