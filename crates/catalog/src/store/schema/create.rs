// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::{
	Codec,
	interface::catalog::{DatabaseId, SchemaId},
	key::NamespaceKey,
};
use pgtemp_transaction::{CommandTransaction, Transaction};
use pgtemp_type::return_error;
use tracing::{debug, instrument};

use crate::{
	CatalogStore,
	error::CatalogError,
	store::{schema::encode_schema_id, sequence::SchemaSequence},
};

impl CatalogStore {
	#[instrument(name = "catalog::store::create_schema", level = "debug", skip(txn, codec))]
	pub fn create_schema(
		txn: &mut CommandTransaction,
		codec: &Codec,
		database: DatabaseId,
		name: &str,
	) -> crate::Result<SchemaId> {
		if Self::resolve_schema_id(&mut Transaction::Command(&mut *txn), codec, database, name)?.is_some() {
			return_error!(CatalogError::SchemaAlreadyExists {
				database,
				name: name.to_string(),
			});
		}

		let id = SchemaSequence::next_schema_id(txn, codec)?;
		txn.set(NamespaceKey::encoded(codec, database, name), encode_schema_id(id))?;

		debug!(%id, "schema created");
		Ok(id)
	}
}
