// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::{
	Codec, EncodableKey,
	interface::catalog::{DatabaseId, PUBLIC_SCHEMA_NAME, SchemaId},
	key::NamespaceKey,
};
use pgtemp_transaction::Transaction;

use crate::{CatalogStore, store::schema::decode_schema_id};

impl CatalogStore {
	/// All stored schemas of `database` in key order, preceded by `public`.
	pub fn list_schemas(
		txn: &mut Transaction<'_>,
		codec: &Codec,
		database: DatabaseId,
	) -> crate::Result<Vec<(String, SchemaId)>> {
		let mut result = vec![(PUBLIC_SCHEMA_NAME.to_string(), SchemaId::PUBLIC)];

		for entry in txn.range(NamespaceKey::database_scan(codec, database))? {
			let Some(key) = NamespaceKey::decode(codec, &entry.key) else {
				continue;
			};
			let id = decode_schema_id(database, &key.name, &entry.values)?;
			result.push((key.name, id));
		}

		Ok(result)
	}
}
