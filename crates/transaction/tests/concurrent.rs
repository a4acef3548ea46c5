// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::thread;

use pgtemp_core::{CommitVersion, EncodedKey, EncodedKeyRange};
use pgtemp_transaction::{Transaction, TransactionMulti};

#[test]
fn test_concurrent_commits_get_distinct_versions() {
	let engine = TransactionMulti::new();

	let handles: Vec<_> = (0..8u8)
		.map(|i| {
			let engine = engine.clone();
			thread::spawn(move || {
				let mut cmd = engine.begin_command();
				cmd.set(EncodedKey::new(vec![b'k', i]), vec![i]).unwrap();
				cmd.commit().unwrap()
			})
		})
		.collect();

	let mut versions: Vec<CommitVersion> = handles.into_iter().map(|h| h.join().unwrap()).collect();
	versions.sort();
	versions.dedup();

	assert_eq!(versions.len(), 8);
	assert_eq!(engine.version(), CommitVersion(8));

	let mut qry = engine.begin_query();
	let mut txn = Transaction::Query(&mut qry);
	assert_eq!(txn.range(EncodedKeyRange::prefix(b"k")).unwrap().len(), 8);
}

#[test]
fn test_snapshot_is_stable_under_writes() {
	let engine = TransactionMulti::new();

	let mut cmd = engine.begin_command();
	cmd.set(EncodedKey::new(b"a"), vec![1]).unwrap();
	cmd.commit().unwrap();

	let mut snapshot = engine.begin_query();

	let writer = {
		let engine = engine.clone();
		thread::spawn(move || {
			for i in 2..10u8 {
				let mut cmd = engine.begin_command();
				cmd.set(EncodedKey::new(b"a"), vec![i]).unwrap();
				cmd.commit().unwrap();
			}
		})
	};
	writer.join().unwrap();

	assert_eq!(snapshot.get(&EncodedKey::new(b"a")).unwrap().unwrap().values, vec![1]);
	assert_eq!(engine.begin_query().get(&EncodedKey::new(b"a")).unwrap().unwrap().values, vec![9]);
}
