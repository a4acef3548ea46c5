// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use pgtemp_core::{
	Codec,
	interface::catalog::{DatabaseId, SchemaId},
};
use pgtemp_session::{SessionData, SessionDataStack, SessionId};
use pgtemp_transaction::{CommandTransaction, TransactionMulti};

use crate::CatalogStore;

pub fn create_schema(txn: &mut CommandTransaction, codec: &Codec, database: DatabaseId, name: &str) -> SchemaId {
	CatalogStore::create_schema(txn, codec, database, name).unwrap()
}

/// Commits `names` into `database` and returns their ids in order.
pub fn create_committed_schemas(
	engine: &TransactionMulti,
	codec: &Codec,
	database: DatabaseId,
	names: &[&str],
) -> Vec<SchemaId> {
	let mut txn = engine.begin_command();
	let ids = names.iter().map(|name| create_schema(&mut txn, codec, database, name)).collect();
	txn.commit().unwrap();
	ids
}

/// A session whose temporary schemas are `schemas`, keyed by database.
pub fn create_test_session(session_id: SessionId, schemas: &[(DatabaseId, SchemaId)]) -> SessionData {
	schemas
		.iter()
		.fold(SessionData::builder().session_id(session_id), |builder, (database, schema)| {
			builder.temporary_schema(*database, *schema)
		})
		.build()
}

pub fn create_test_stack(session: SessionData) -> Arc<SessionDataStack> {
	Arc::new(SessionDataStack::new(session))
}
