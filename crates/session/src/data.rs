// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use pgtemp_core::interface::catalog::{DatabaseId, SchemaId};

use crate::{
	id::{SessionId, temporary_schema_name},
	search_path::SearchPath,
};

/// Configuration and state of one session context. Frames are shared
/// read-only once pushed onto a [`SessionDataStack`](crate::SessionDataStack);
/// changes produce a new frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
	pub session_id: SessionId,
	pub search_path: SearchPath,
	temporary_schema_ids: BTreeMap<DatabaseId, SchemaId>,
}

impl SessionData {
	pub fn builder() -> SessionDataBuilder {
		SessionDataBuilder::default()
	}

	/// The session's temporary schema in `database`, if it created one.
	pub fn temporary_schema_id(&self, database: DatabaseId) -> Option<SchemaId> {
		self.temporary_schema_ids.get(&database).copied()
	}

	/// The database owning `schema`, if `schema` is one of this session's
	/// temporary schemas.
	pub fn database_for_temporary_schema_id(&self, schema: SchemaId) -> Option<DatabaseId> {
		self.temporary_schema_ids.iter().find_map(|(database, id)| (*id == schema).then_some(*database))
	}

	/// Returns a copy of this frame that records `schema` as the temporary
	/// schema of `database`. The search path picks up the session's display
	/// name if it has none yet.
	pub fn with_temporary_schema(&self, database: DatabaseId, schema: SchemaId) -> Self {
		let mut result = self.clone();
		result.temporary_schema_ids.insert(database, schema);
		if !result.search_path.has_temporary_schema_name() {
			result.search_path =
				result.search_path.with_temporary_schema_name(temporary_schema_name(self.session_id));
		}
		result
	}
}

impl Default for SessionData {
	fn default() -> Self {
		SessionDataBuilder::default().build()
	}
}

#[derive(Debug, Clone, Default)]
pub struct SessionDataBuilder {
	session_id: Option<SessionId>,
	search_path: Option<SearchPath>,
	temporary_schema_name: Option<String>,
	temporary_schema_ids: BTreeMap<DatabaseId, SchemaId>,
}

impl SessionDataBuilder {
	pub fn session_id(mut self, session_id: SessionId) -> Self {
		self.session_id = Some(session_id);
		self
	}

	pub fn search_path(mut self, search_path: SearchPath) -> Self {
		self.search_path = Some(search_path);
		self
	}

	pub fn temporary_schema_name(mut self, name: impl Into<String>) -> Self {
		self.temporary_schema_name = Some(name.into());
		self
	}

	/// Records `schema` as the temporary schema of `database`, replacing any
	/// earlier entry for that database.
	pub fn temporary_schema(mut self, database: DatabaseId, schema: SchemaId) -> Self {
		self.temporary_schema_ids.insert(database, schema);
		self
	}

	/// Builds the frame. A session without an explicit id gets a freshly
	/// generated one.
	pub fn build(self) -> SessionData {
		let session_id = self.session_id.unwrap_or_else(SessionId::generate);

		let mut search_path = self.search_path.unwrap_or_default();
		if let Some(name) = self.temporary_schema_name {
			search_path = search_path.with_temporary_schema_name(name);
		} else if !self.temporary_schema_ids.is_empty() && !search_path.has_temporary_schema_name() {
			search_path = search_path.with_temporary_schema_name(temporary_schema_name(session_id));
		}

		SessionData {
			session_id,
			search_path,
			temporary_schema_ids: self.temporary_schema_ids,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_has_no_temporary_schema() {
		let data = SessionData::default();
		assert_eq!(data.temporary_schema_id(DatabaseId(7)), None);
		assert_eq!(data.database_for_temporary_schema_id(SchemaId(1500088)), None);
		assert_eq!(data.search_path.temporary_schema_name(), "");
	}

	#[test]
	fn test_build_generates_session_id() {
		let first = SessionData::builder().temporary_schema(DatabaseId(7), SchemaId(1)).build();
		let second = SessionData::builder().temporary_schema(DatabaseId(7), SchemaId(1)).build();

		assert_ne!(first.session_id, second.session_id);
		assert_eq!(first.search_path.temporary_schema_name(), temporary_schema_name(first.session_id));
		assert_ne!(first.search_path.temporary_schema_name(), second.search_path.temporary_schema_name());
	}

	#[test]
	fn test_lookup_both_directions() {
		let data = SessionData::builder()
			.temporary_schema_name("pg_temp_1_1")
			.temporary_schema(DatabaseId(7), SchemaId(1500088))
			.temporary_schema(DatabaseId(8), SchemaId(1500090))
			.build();

		assert_eq!(data.temporary_schema_id(DatabaseId(7)), Some(SchemaId(1500088)));
		assert_eq!(data.temporary_schema_id(DatabaseId(9)), None);
		assert_eq!(data.database_for_temporary_schema_id(SchemaId(1500090)), Some(DatabaseId(8)));
		assert_eq!(data.database_for_temporary_schema_id(SchemaId(9999)), None);
	}

	#[test]
	fn test_one_temporary_schema_per_database() {
		let data = SessionData::builder()
			.temporary_schema(DatabaseId(7), SchemaId(1))
			.temporary_schema(DatabaseId(7), SchemaId(2))
			.build();

		assert_eq!(data.temporary_schema_id(DatabaseId(7)), Some(SchemaId(2)));
		assert_eq!(data.database_for_temporary_schema_id(SchemaId(1)), None);
	}

	#[test]
	fn test_build_derives_display_name() {
		let data = SessionData::builder()
			.session_id(SessionId::from_parts(3, 4))
			.temporary_schema(DatabaseId(7), SchemaId(1))
			.build();

		assert_eq!(data.search_path.temporary_schema_name(), "pg_temp_3_4");
	}

	#[test]
	fn test_with_temporary_schema_leaves_original() {
		let data = SessionData::builder().session_id(SessionId::from_parts(1, 1)).build();
		let updated = data.with_temporary_schema(DatabaseId(7), SchemaId(1500088));

		assert_eq!(data.temporary_schema_id(DatabaseId(7)), None);
		assert_eq!(updated.temporary_schema_id(DatabaseId(7)), Some(SchemaId(1500088)));
		assert_eq!(updated.search_path.temporary_schema_name(), "pg_temp_1_1");
	}
}
