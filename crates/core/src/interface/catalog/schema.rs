// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::interface::catalog::id::{DatabaseId, SchemaId};

/// Reserved alias that always denotes the caller's own temporary schema.
pub const PG_TEMP_SCHEMA_NAME: &str = "pg_temp";

pub const PG_CATALOG_SCHEMA_NAME: &str = "pg_catalog";

pub const PUBLIC_SCHEMA_NAME: &str = "public";

/// Returns true for `pg_temp` itself and for any session display name
/// derived from it (`pg_temp_<hi>_<lo>`, both parts decimal). Other names
/// that merely start with `pg_temp` are ordinary schema names.
pub fn is_temporary_schema_name(name: &str) -> bool {
	let Some(rest) = name.strip_prefix(PG_TEMP_SCHEMA_NAME) else {
		return false;
	};
	if rest.is_empty() {
		return true;
	}

	let is_decimal = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
	match rest.strip_prefix('_').and_then(|parts| parts.split_once('_')) {
		Some((hi, lo)) => is_decimal(hi) && is_decimal(lo),
		None => false,
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaKind {
	Persistent,
	Temporary,
}

impl Display for SchemaKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			SchemaKind::Persistent => f.write_str("persistent"),
			SchemaKind::Temporary => f.write_str("temporary"),
		}
	}
}

/// A schema stored in the namespace table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistentSchemaDef {
	pub id: SchemaId,
	pub name: String,
	pub database: DatabaseId,
}

/// A session scoped schema. Synthesized on every lookup and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporarySchemaDef {
	pub id: SchemaId,
	pub name: String,
	pub database: DatabaseId,
}

impl TemporarySchemaDef {
	pub fn new(name: impl Into<String>, id: SchemaId, database: DatabaseId) -> Self {
		Self {
			id,
			name: name.into(),
			database,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaDef {
	Persistent(PersistentSchemaDef),
	Temporary(TemporarySchemaDef),
}

impl SchemaDef {
	pub fn temporary(name: impl Into<String>, id: SchemaId, database: DatabaseId) -> Self {
		SchemaDef::Temporary(TemporarySchemaDef::new(name, id, database))
	}

	pub fn persistent(name: impl Into<String>, id: SchemaId, database: DatabaseId) -> Self {
		SchemaDef::Persistent(PersistentSchemaDef {
			id,
			name: name.into(),
			database,
		})
	}

	pub fn id(&self) -> SchemaId {
		match self {
			SchemaDef::Persistent(def) => def.id,
			SchemaDef::Temporary(def) => def.id,
		}
	}

	pub fn name(&self) -> &str {
		match self {
			SchemaDef::Persistent(def) => &def.name,
			SchemaDef::Temporary(def) => &def.name,
		}
	}

	pub fn database(&self) -> DatabaseId {
		match self {
			SchemaDef::Persistent(def) => def.database,
			SchemaDef::Temporary(def) => def.database,
		}
	}

	pub fn kind(&self) -> SchemaKind {
		match self {
			SchemaDef::Persistent(_) => SchemaKind::Persistent,
			SchemaDef::Temporary(_) => SchemaKind::Temporary,
		}
	}

	pub fn is_temporary(&self) -> bool {
		matches!(self, SchemaDef::Temporary(_))
	}
}
