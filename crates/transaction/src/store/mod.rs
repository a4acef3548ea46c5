// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use crossbeam_skiplist::SkipMap;
use pgtemp_core::{CommitVersion, EncodedKey, EncodedKeyRange};

pub use versioned::MultiVersionContainer;

mod versioned;

/// A value as seen at some version. `None` marks a deletion.
pub type Delta = Option<Vec<u8>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiVersionValues {
	pub key: EncodedKey,
	pub values: Vec<u8>,
	pub version: CommitVersion,
}

/// Multi-version key-value store held in memory. Every write is kept under
/// the version it was committed at; readers pick the newest version at or
/// below their snapshot.
#[derive(Debug, Default)]
pub struct MultiVersionStore {
	entries: SkipMap<EncodedKey, MultiVersionContainer>,
}

impl MultiVersionStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, key: &EncodedKey, version: CommitVersion) -> Option<MultiVersionValues> {
		let entry = self.entries.get(key)?;
		let (at, values) = entry.value().get(version)?;
		Some(MultiVersionValues {
			key: key.clone(),
			values,
			version: at,
		})
	}

	pub fn range(&self, range: EncodedKeyRange, version: CommitVersion) -> Vec<MultiVersionValues> {
		self.entries
			.range(range)
			.filter_map(|entry| {
				let (at, values) = entry.value().get(version)?;
				Some(MultiVersionValues {
					key: entry.key().clone(),
					values,
					version: at,
				})
			})
			.collect()
	}

	/// Whether `key` was written, or deleted, after `version`.
	pub fn changed_since(&self, key: &EncodedKey, version: CommitVersion) -> bool {
		self.entries
			.get(key)
			.and_then(|entry| entry.value().latest_version())
			.is_some_and(|latest| latest > version)
	}

	/// Whether any key in `range` was written, or deleted, after `version`.
	pub fn range_changed_since(&self, range: EncodedKeyRange, version: CommitVersion) -> bool {
		self.entries.range(range).any(|entry| entry.value().latest_version().is_some_and(|latest| latest > version))
	}

	/// Applies all `deltas` under `version`. Callers serialize commits.
	pub fn commit(&self, deltas: BTreeMap<EncodedKey, Delta>, version: CommitVersion) {
		for (key, delta) in deltas {
			let entry = self.entries.get_or_insert_with(key, MultiVersionContainer::new);
			entry.value().insert(version, delta);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(k: &str) -> EncodedKey {
		EncodedKey::new(k.as_bytes())
	}

	fn deltas(items: &[(&str, Option<&str>)]) -> BTreeMap<EncodedKey, Delta> {
		items.iter().map(|(k, v)| (key(k), v.map(|v| v.as_bytes().to_vec()))).collect()
	}

	#[test]
	fn test_get_respects_version() {
		let store = MultiVersionStore::new();
		store.commit(deltas(&[("a", Some("1"))]), CommitVersion(1));
		store.commit(deltas(&[("a", Some("2"))]), CommitVersion(3));

		assert_eq!(store.get(&key("a"), CommitVersion(0)), None);
		assert_eq!(store.get(&key("a"), CommitVersion(1)).unwrap().values, b"1");
		assert_eq!(store.get(&key("a"), CommitVersion(2)).unwrap().values, b"1");

		let latest = store.get(&key("a"), CommitVersion(5)).unwrap();
		assert_eq!(latest.values, b"2");
		assert_eq!(latest.version, CommitVersion(3));
	}

	#[test]
	fn test_delete_hides_value() {
		let store = MultiVersionStore::new();
		store.commit(deltas(&[("a", Some("1"))]), CommitVersion(1));
		store.commit(deltas(&[("a", None)]), CommitVersion(2));

		assert!(store.get(&key("a"), CommitVersion(1)).is_some());
		assert!(store.get(&key("a"), CommitVersion(2)).is_none());
	}

	#[test]
	fn test_range() {
		let store = MultiVersionStore::new();
		store.commit(deltas(&[("a1", Some("1")), ("a2", Some("2")), ("b1", Some("3"))]), CommitVersion(1));
		store.commit(deltas(&[("a2", None)]), CommitVersion(2));

		let at_one = store.range(EncodedKeyRange::prefix(b"a"), CommitVersion(1));
		assert_eq!(at_one.len(), 2);

		let at_two = store.range(EncodedKeyRange::prefix(b"a"), CommitVersion(2));
		assert_eq!(at_two.len(), 1);
		assert_eq!(at_two[0].key, key("a1"));
	}

	#[test]
	fn test_changed_since() {
		let store = MultiVersionStore::new();
		store.commit(deltas(&[("a1", Some("1"))]), CommitVersion(1));
		store.commit(deltas(&[("a1", None)]), CommitVersion(3));

		assert!(store.changed_since(&key("a1"), CommitVersion(2)));
		assert!(!store.changed_since(&key("a1"), CommitVersion(3)));
		assert!(!store.changed_since(&key("b1"), CommitVersion(0)));

		assert!(store.range_changed_since(EncodedKeyRange::prefix(b"a"), CommitVersion(2)));
		assert!(!store.range_changed_since(EncodedKeyRange::prefix(b"a"), CommitVersion(3)));
		assert!(!store.range_changed_since(EncodedKeyRange::prefix(b"b"), CommitVersion(0)));
	}
}
