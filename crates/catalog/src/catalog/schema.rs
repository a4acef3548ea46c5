// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::interface::catalog::{DatabaseId, SchemaDef, SchemaId, is_temporary_schema_name};
use pgtemp_session::SessionData;
use pgtemp_transaction::Transaction;
use pgtemp_type::return_error;
use tracing::{instrument, trace};

use crate::{CatalogStore, Result, catalog::Catalog, error::CatalogError, temporary::is_own_name};

impl Catalog {
	#[instrument(name = "catalog::schema::find_by_name", level = "trace", skip(self, txn))]
	pub fn find_schema_by_name(
		&self,
		txn: &mut Transaction<'_>,
		database: DatabaseId,
		name: &str,
	) -> Result<Option<SchemaDef>> {
		let session = self.temporary.session();
		self.find_schema_by_name_in(session.as_deref(), txn, database, name)
	}

	fn find_schema_by_name_in(
		&self,
		session: Option<&SessionData>,
		txn: &mut Transaction<'_>,
		database: DatabaseId,
		name: &str,
	) -> Result<Option<SchemaDef>> {
		if is_temporary_schema_name(name) || session.is_some_and(|session| is_own_name(session, name)) {
			let (stop, schema) = self.temporary.find_schema_by_name_in(session, txn, database, name)?;
			if stop {
				return Ok(schema);
			}
		}

		Ok(CatalogStore::resolve_schema_id(txn, &self.codec, database, name)?
			.map(|id| SchemaDef::persistent(name, id, database)))
	}

	#[instrument(name = "catalog::schema::get_by_name", level = "trace", skip(self, txn))]
	pub fn get_schema_by_name(&self, txn: &mut Transaction<'_>, database: DatabaseId, name: &str) -> Result<SchemaDef> {
		match self.find_schema_by_name(txn, database, name)? {
			Some(schema) => Ok(schema),
			None => return_error!(CatalogError::SchemaNotFound {
				database,
				name: name.to_string(),
			}),
		}
	}

	#[instrument(name = "catalog::schema::find", level = "trace", skip(self, txn))]
	pub fn find_schema(&self, txn: &mut Transaction<'_>, database: DatabaseId, id: SchemaId) -> Result<Option<SchemaDef>> {
		if let Some(schema) = self.temporary.find_schema_by_id(id) {
			return Ok(Some(schema));
		}

		for (name, schema_id) in CatalogStore::list_schemas(txn, &self.codec, database)?.into_iter().rev() {
			if schema_id != id {
				continue;
			}
			if is_temporary_schema_name(&name) {
				trace!(%id, "temporary schema of another session skipped");
				return Ok(None);
			}
			return Ok(Some(SchemaDef::persistent(name, id, database)));
		}

		Ok(None)
	}

	/// Existing schemas of the active session's search path in resolution
	/// order. Entries that do not name a schema of `database` are skipped.
	#[instrument(name = "catalog::schema::search_path", level = "trace", skip(self, txn))]
	pub fn resolve_search_path(&self, txn: &mut Transaction<'_>, database: DatabaseId) -> Result<Vec<SchemaDef>> {
		let Some(session) = self.temporary.session() else {
			return Ok(vec![]);
		};

		let mut result: Vec<SchemaDef> = Vec::new();
		for name in session.search_path.iter() {
			if name.starts_with('$') {
				continue;
			}
			let found = self.find_schema_by_name_in(Some(session.as_ref()), &mut txn.reborrow(), database, name)?;
			if let Some(schema) = found {
				if !result.iter().any(|existing| existing.id() == schema.id()) {
					result.push(schema);
				}
			}
		}

		Ok(result)
	}
}
