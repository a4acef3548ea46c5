// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::{Codec, interface::catalog::DatabaseId, key::NamespaceKey};
use pgtemp_transaction::CommandTransaction;
use tracing::{debug, instrument};

use crate::CatalogStore;

impl CatalogStore {
	/// Removes the namespace entry. Returns whether an entry existed.
	#[instrument(name = "catalog::store::drop_schema", level = "debug", skip(txn, codec))]
	pub fn drop_schema(
		txn: &mut CommandTransaction,
		codec: &Codec,
		database: DatabaseId,
		name: &str,
	) -> crate::Result<bool> {
		let key = NamespaceKey::encoded(codec, database, name);
		if !txn.contains_key(&key)? {
			return Ok(false);
		}

		txn.remove(key)?;
		debug!("schema dropped");
		Ok(true)
	}
}

#[cfg(test)]
pub mod tests {
	use pgtemp_core::{Codec, interface::catalog::DatabaseId};
	use pgtemp_transaction::{Transaction, TransactionMulti};

	use crate::{CatalogStore, test_utils::create_schema};

	#[test]
	fn test_drop_schema() {
		let engine = TransactionMulti::new();
		let codec = Codec::system();
		let mut txn = engine.begin_command();

		create_schema(&mut txn, &codec, DatabaseId(7), "analytics");

		assert!(CatalogStore::drop_schema(&mut txn, &codec, DatabaseId(7), "analytics").unwrap());
		let id = CatalogStore::resolve_schema_id(&mut Transaction::Command(&mut txn), &codec, DatabaseId(7), "analytics")
			.unwrap();
		assert_eq!(id, None);
	}

	#[test]
	fn test_drop_missing() {
		let engine = TransactionMulti::new();
		let mut txn = engine.begin_command();

		assert!(!CatalogStore::drop_schema(&mut txn, &Codec::system(), DatabaseId(7), "analytics").unwrap());
	}

	#[test]
	fn test_drop_is_visible_after_commit() {
		let engine = TransactionMulti::new();
		let codec = Codec::system();

		let mut txn = engine.begin_command();
		create_schema(&mut txn, &codec, DatabaseId(7), "analytics");
		txn.commit().unwrap();

		let mut before = engine.begin_query();

		let mut txn = engine.begin_command();
		CatalogStore::drop_schema(&mut txn, &codec, DatabaseId(7), "analytics").unwrap();
		txn.commit().unwrap();

		let mut after = engine.begin_query();
		let mut before = Transaction::Query(&mut before);
		let mut after = Transaction::Query(&mut after);
		assert!(CatalogStore::resolve_schema_id(&mut before, &codec, DatabaseId(7), "analytics").unwrap().is_some());
		assert!(CatalogStore::resolve_schema_id(&mut after, &codec, DatabaseId(7), "analytics").unwrap().is_none());
	}
}
