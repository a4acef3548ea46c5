// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crossbeam_skiplist::SkipMap;
use pgtemp_core::CommitVersion;

use crate::store::Delta;

/// All committed versions of a single key.
#[derive(Debug, Default)]
pub struct MultiVersionContainer {
	versions: SkipMap<CommitVersion, Delta>,
}

impl MultiVersionContainer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&self, version: CommitVersion, delta: Delta) {
		self.versions.insert(version, delta);
	}

	/// Version of the newest write, deletions included.
	pub fn latest_version(&self) -> Option<CommitVersion> {
		self.versions.back().map(|entry| *entry.key())
	}

	/// Newest live value at or below `version`, with the version it was
	/// written at.
	pub fn get(&self, version: CommitVersion) -> Option<(CommitVersion, Vec<u8>)> {
		let entry = self.versions.range(..=version).next_back()?;
		entry.value().clone().map(|values| (*entry.key(), values))
	}
}
