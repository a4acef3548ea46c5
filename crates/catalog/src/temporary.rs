// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Resolution of session scoped temporary schemas.
//!
//! A session owns at most one temporary schema per database. It is addressed
//! either through the `pg_temp` alias or through the session's display name
//! (`pg_temp_<hi>_<lo>`). Lookups are answered from the active session frame
//! first; names the session does not own are resolved against storage.

use std::sync::Arc;

use pgtemp_core::{
	Codec,
	interface::catalog::{DatabaseId, PG_TEMP_SCHEMA_NAME, SchemaDef, SchemaId},
};
use pgtemp_session::{SessionData, SessionDataStack};
use pgtemp_transaction::Transaction;
use tracing::{debug, instrument, trace};

use crate::{CatalogStore, Result};

#[derive(Debug, Clone)]
pub struct TemporarySchemas {
	codec: Codec,
	sessions: Option<Arc<SessionDataStack>>,
}

impl TemporarySchemas {
	pub fn new(codec: Codec, sessions: Option<Arc<SessionDataStack>>) -> Self {
		Self {
			codec,
			sessions,
		}
	}

	/// The active session frame, if a stack is attached and non-empty.
	pub fn session(&self) -> Option<Arc<SessionData>> {
		self.sessions.as_ref().and_then(|stack| stack.top())
	}

	/// Resolves a temporary schema by name.
	///
	/// The returned flag tells the caller to stop: the answer is final and
	/// ordinary schema resolution must not be attempted. It is always `true`.
	/// Schemas owned by the active session are returned without reading
	/// `txn`.
	pub fn find_schema_by_name(
		&self,
		txn: &mut Transaction<'_>,
		database: DatabaseId,
		name: &str,
	) -> Result<(bool, Option<SchemaDef>)> {
		self.find_schema_by_name_in(self.session().as_deref(), txn, database, name)
	}

	/// Same as [`find_schema_by_name`](Self::find_schema_by_name), answered
	/// from `session` instead of the current top of the stack. Callers that
	/// already hold a frame pass it here so one lookup sees one frame.
	#[instrument(name = "catalog::temporary::find_schema_by_name", level = "trace", skip(self, session, txn))]
	pub(crate) fn find_schema_by_name_in(
		&self,
		session: Option<&SessionData>,
		txn: &mut Transaction<'_>,
		database: DatabaseId,
		name: &str,
	) -> Result<(bool, Option<SchemaDef>)> {
		if let Some(session) = session {
			if is_own_name(session, name) {
				if let Some(id) = session.temporary_schema_id(database) {
					trace!(%id, "resolved from session");
					return Ok((true, Some(SchemaDef::temporary(display_name(session, name), id, database))));
				}
			}
		}

		debug!("temporary schema not owned by session, falling back to storage");

		match CatalogStore::resolve_schema_id(txn, &self.codec, database, name)? {
			Some(id) => {
				debug!(%id, "temporary schema found in storage");
				Ok((true, Some(SchemaDef::temporary(name, id, database))))
			}
			None => Ok((true, None)),
		}
	}

	/// Resolves a temporary schema owned by the active session. Ids owned by
	/// other sessions are not visible.
	#[instrument(name = "catalog::temporary::find_schema_by_id", level = "trace", skip(self))]
	pub fn find_schema_by_id(&self, id: SchemaId) -> Option<SchemaDef> {
		let session = self.session()?;
		let database = session.database_for_temporary_schema_id(id)?;
		Some(SchemaDef::temporary(display_name(&session, PG_TEMP_SCHEMA_NAME), id, database))
	}
}

/// Whether `name` is the `pg_temp` alias or the display name of `session`.
pub(crate) fn is_own_name(session: &SessionData, name: &str) -> bool {
	let display = session.search_path.temporary_schema_name();
	name == PG_TEMP_SCHEMA_NAME || (!display.is_empty() && name == display)
}

fn display_name(session: &SessionData, fallback: &str) -> String {
	match session.search_path.temporary_schema_name() {
		"" => fallback.to_string(),
		display => display.to_string(),
	}
}
