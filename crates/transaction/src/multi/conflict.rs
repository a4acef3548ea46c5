// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeSet;

use pgtemp_core::{CommitVersion, EncodedKey, EncodedKeyRange};

use crate::store::MultiVersionStore;

/// Keys and ranges a command transaction read. Checked against the store on
/// commit together with the written keys.
#[derive(Debug, Default)]
pub(crate) struct ConflictManager {
	reads: BTreeSet<EncodedKey>,
	ranges: Vec<EncodedKeyRange>,
}

impl ConflictManager {
	pub(crate) fn mark_read(&mut self, key: &EncodedKey) {
		if !self.reads.contains(key) {
			self.reads.insert(key.clone());
		}
	}

	pub(crate) fn mark_range(&mut self, range: EncodedKeyRange) {
		self.ranges.push(range);
	}

	/// Whether any read key, read range or written key was changed in `store`
	/// after `version`.
	pub(crate) fn has_conflict<'a>(
		&self,
		store: &MultiVersionStore,
		version: CommitVersion,
		writes: impl IntoIterator<Item = &'a EncodedKey>,
	) -> bool {
		self.reads.iter().any(|key| store.changed_since(key, version))
			|| writes.into_iter().any(|key| store.changed_since(key, version))
			|| self.ranges.iter().any(|range| store.range_changed_since(range.clone(), version))
	}

	pub(crate) fn clear(&mut self) {
		self.reads.clear();
		self.ranges.clear();
	}
}
