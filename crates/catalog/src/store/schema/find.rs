// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::{
	Codec,
	interface::catalog::{DatabaseId, PUBLIC_SCHEMA_NAME, SchemaId},
	key::NamespaceKey,
};
use pgtemp_transaction::Transaction;

use crate::{CatalogStore, store::schema::decode_schema_id};

impl CatalogStore {
	/// Looks up the schema id stored for `(database, name)` at the
	/// transaction's snapshot.
	pub fn resolve_schema_id(
		txn: &mut Transaction<'_>,
		codec: &Codec,
		database: DatabaseId,
		name: &str,
	) -> crate::Result<Option<SchemaId>> {
		// Special case for public schema - hardcoded with fixed ID
		if name == PUBLIC_SCHEMA_NAME {
			return Ok(Some(SchemaId::PUBLIC));
		}

		match txn.get(&NamespaceKey::encoded(codec, database, name))? {
			Some(entry) => decode_schema_id(database, name, &entry.values).map(Some),
			None => Ok(None),
		}
	}
}
