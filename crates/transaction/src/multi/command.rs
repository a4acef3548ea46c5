// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::BTreeMap, ops::RangeBounds, sync::Arc};

use pgtemp_core::{CommitVersion, EncodedKey, EncodedKeyRange};
use pgtemp_type::Result;
use tracing::{debug, instrument, trace};

use crate::{
	error::TransactionError,
	multi::{Inner, TransactionState, conflict::ConflictManager},
	store::{Delta, MultiVersionValues},
};

/// Read-write transaction. Writes are buffered and become visible to other
/// transactions atomically on commit, under a new version. Commit fails with
/// a conflict if anything this transaction read or wrote was committed by
/// another transaction after its snapshot.
#[derive(Debug)]
pub struct CommandTransaction {
	inner: Arc<Inner>,
	version: CommitVersion,
	pending: BTreeMap<EncodedKey, Delta>,
	conflicts: ConflictManager,
	state: TransactionState,
}

impl CommandTransaction {
	pub(crate) fn new(inner: Arc<Inner>, version: CommitVersion) -> Self {
		Self {
			inner,
			version,
			pending: BTreeMap::new(),
			conflicts: ConflictManager::default(),
			state: TransactionState::Active,
		}
	}

	/// Snapshot version reads are served from.
	pub fn version(&self) -> CommitVersion {
		self.version
	}

	pub fn get(&mut self, key: &EncodedKey) -> Result<Option<MultiVersionValues>> {
		self.state.ensure_active()?;

		if let Some(delta) = self.pending.get(key) {
			return Ok(delta.as_ref().map(|values| MultiVersionValues {
				key: key.clone(),
				values: values.clone(),
				version: self.version,
			}));
		}

		self.conflicts.mark_read(key);
		Ok(self.inner.store.get(key, self.version))
	}

	pub fn contains_key(&mut self, key: &EncodedKey) -> Result<bool> {
		Ok(self.get(key)?.is_some())
	}

	/// Committed entries in `range` overlaid with this transaction's own
	/// pending writes, in key order.
	pub fn range(&mut self, range: EncodedKeyRange) -> Result<Vec<MultiVersionValues>> {
		self.state.ensure_active()?;
		self.conflicts.mark_range(range.clone());

		let mut merged: BTreeMap<EncodedKey, MultiVersionValues> = self
			.inner
			.store
			.range(range.clone(), self.version)
			.into_iter()
			.map(|values| (values.key.clone(), values))
			.collect();

		for (key, delta) in self.pending.iter().filter(|(key, _)| range.contains(*key)) {
			match delta {
				Some(values) => {
					merged.insert(
						key.clone(),
						MultiVersionValues {
							key: key.clone(),
							values: values.clone(),
							version: self.version,
						},
					);
				}
				None => {
					merged.remove(key);
				}
			}
		}

		Ok(merged.into_values().collect())
	}

	pub fn set(&mut self, key: EncodedKey, values: Vec<u8>) -> Result<()> {
		self.state.ensure_active()?;
		self.pending.insert(key, Some(values));
		Ok(())
	}

	pub fn remove(&mut self, key: EncodedKey) -> Result<()> {
		self.state.ensure_active()?;
		self.pending.insert(key, None);
		Ok(())
	}

	#[instrument(name = "transaction::command::commit", level = "debug", skip(self), fields(pending_count = self.pending.len()))]
	pub fn commit(&mut self) -> Result<CommitVersion> {
		self.state.ensure_active()?;
		self.state = TransactionState::Committed;

		if self.pending.is_empty() {
			return Ok(self.version);
		}

		let mut latest = self.inner.version.lock();

		if self.conflicts.has_conflict(&self.inner.store, self.version, self.pending.keys()) {
			self.pending.clear();
			self.conflicts.clear();
			debug!(version = %self.version, "command transaction conflicted");
			return Err(TransactionError::Conflict {
				version: self.version,
			}
			.into());
		}

		let version = latest.next();
		self.inner.store.commit(std::mem::take(&mut self.pending), version);
		*latest = version;

		trace!(%version, "command transaction committed");
		Ok(version)
	}

	pub fn rollback(&mut self) -> Result<()> {
		self.state.ensure_active()?;
		self.state = TransactionState::RolledBack;
		self.pending.clear();
		self.conflicts.clear();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use crate::multi::TransactionMulti;

	use super::*;

	fn key(k: &str) -> EncodedKey {
		EncodedKey::new(k.as_bytes())
	}

	#[test]
	fn test_reads_own_writes() {
		let engine = TransactionMulti::new();
		let mut cmd = engine.begin_command();

		cmd.set(key("a"), vec![1]).unwrap();
		assert_eq!(cmd.get(&key("a")).unwrap().unwrap().values, vec![1]);

		cmd.remove(key("a")).unwrap();
		assert!(cmd.get(&key("a")).unwrap().is_none());
	}

	#[test]
	fn test_writes_invisible_until_commit() {
		let engine = TransactionMulti::new();
		let mut cmd = engine.begin_command();
		cmd.set(key("a"), vec![1]).unwrap();

		assert!(engine.begin_query().get(&key("a")).unwrap().is_none());

		cmd.commit().unwrap();
		assert!(engine.begin_query().get(&key("a")).unwrap().is_some());
	}

	#[test]
	fn test_range_overlays_pending() {
		let engine = TransactionMulti::new();
		let mut cmd = engine.begin_command();
		cmd.set(key("a1"), vec![1]).unwrap();
		cmd.set(key("a2"), vec![2]).unwrap();
		cmd.commit().unwrap();

		let mut cmd = engine.begin_command();
		cmd.remove(key("a1")).unwrap();
		cmd.set(key("a3"), vec![3]).unwrap();
		cmd.set(key("b1"), vec![4]).unwrap();

		let keys: Vec<_> =
			cmd.range(EncodedKeyRange::prefix(b"a")).unwrap().into_iter().map(|v| v.key).collect();
		assert_eq!(keys, vec![key("a2"), key("a3")]);
	}

	#[test]
	fn test_rollback_discards_writes() {
		let engine = TransactionMulti::new();
		let mut cmd = engine.begin_command();
		cmd.set(key("a"), vec![1]).unwrap();
		cmd.rollback().unwrap();

		assert_eq!(cmd.set(key("b"), vec![1]).unwrap_err().code, "TXN_002");
		assert_eq!(cmd.commit().unwrap_err().code, "TXN_002");
		assert!(engine.begin_query().get(&key("a")).unwrap().is_none());
		assert_eq!(engine.version(), CommitVersion(0));
	}

	#[test]
	fn test_use_after_commit() {
		let engine = TransactionMulti::new();
		let mut cmd = engine.begin_command();
		cmd.commit().unwrap();

		assert_eq!(cmd.get(&key("a")).unwrap_err().code, "TXN_002");
	}

	#[test]
	fn test_conflict_on_read_key() {
		let engine = TransactionMulti::new();
		let mut first = engine.begin_command();
		let mut second = engine.begin_command();

		assert!(first.get(&key("counter")).unwrap().is_none());
		assert!(second.get(&key("counter")).unwrap().is_none());

		first.set(key("counter"), vec![1]).unwrap();
		second.set(key("counter"), vec![1]).unwrap();

		assert_eq!(first.commit().unwrap(), CommitVersion(1));
		assert_eq!(second.commit().unwrap_err().code, "TXN_003");
		assert_eq!(engine.version(), CommitVersion(1));
	}

	#[test]
	fn test_conflict_on_read_range() {
		let engine = TransactionMulti::new();
		let mut first = engine.begin_command();
		let mut second = engine.begin_command();

		assert!(second.range(EncodedKeyRange::prefix(b"a")).unwrap().is_empty());
		second.set(key("b"), vec![2]).unwrap();

		first.set(key("a1"), vec![1]).unwrap();
		first.commit().unwrap();

		assert_eq!(second.commit().unwrap_err().code, "TXN_003");
		assert!(engine.begin_query().get(&key("b")).unwrap().is_none());
	}

	#[test]
	fn test_blind_writes_to_distinct_keys_commit() {
		let engine = TransactionMulti::new();
		let mut first = engine.begin_command();
		let mut second = engine.begin_command();

		first.set(key("a"), vec![1]).unwrap();
		second.set(key("b"), vec![2]).unwrap();

		assert_eq!(first.commit().unwrap(), CommitVersion(1));
		assert_eq!(second.commit().unwrap(), CommitVersion(2));
	}

	#[test]
	fn test_conflicted_transaction_is_finished() {
		let engine = TransactionMulti::new();
		let mut first = engine.begin_command();
		let mut second = engine.begin_command();

		first.set(key("a"), vec![1]).unwrap();
		second.set(key("a"), vec![2]).unwrap();
		first.commit().unwrap();

		assert_eq!(second.commit().unwrap_err().code, "TXN_003");
		assert_eq!(second.get(&key("a")).unwrap_err().code, "TXN_002");
		assert_eq!(engine.begin_query().get(&key("a")).unwrap().unwrap().values, vec![1]);
	}
}
