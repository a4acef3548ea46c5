// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	codec::Codec,
	interface::catalog::{DatabaseId, SchemaId},
	key::{EncodableKey, EncodedKey, EncodedKeyRange, KeyKind, key_header, key_payload},
};

/// Maps `(database, parent schema, name)` to the id of a schema entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceKey {
	pub database: DatabaseId,
	pub parent_schema: SchemaId,
	pub name: String,
}

impl NamespaceKey {
	/// Key of a schema entry. Schemas hang directly off their database, so
	/// their parent is [`SchemaId::ROOT`].
	pub fn schema(database: DatabaseId, name: impl Into<String>) -> Self {
		Self {
			database,
			parent_schema: SchemaId::ROOT,
			name: name.into(),
		}
	}

	pub fn encoded(codec: &Codec, database: DatabaseId, name: impl Into<String>) -> EncodedKey {
		Self::schema(database, name).encode(codec)
	}

	/// Every schema entry of `database`.
	pub fn database_scan(codec: &Codec, database: DatabaseId) -> EncodedKeyRange {
		let mut out = key_header(codec, Self::KIND, 16);
		out.extend(&database.0.to_be_bytes());
		out.extend(&SchemaId::ROOT.to_be_bytes());
		EncodedKeyRange::prefix(&out)
	}

	pub fn full_scan(codec: &Codec) -> EncodedKeyRange {
		EncodedKeyRange::prefix(&key_header(codec, Self::KIND, 0))
	}
}

impl EncodableKey for NamespaceKey {
	const KIND: KeyKind = KeyKind::Namespace;

	fn encode(&self, codec: &Codec) -> EncodedKey {
		let mut out = key_header(codec, Self::KIND, 16 + self.name.len());
		out.extend(&self.database.0.to_be_bytes());
		out.extend(&self.parent_schema.to_be_bytes());
		out.extend(self.name.as_bytes());
		EncodedKey::new(out)
	}

	fn decode(codec: &Codec, key: &EncodedKey) -> Option<Self> {
		let payload = key_payload(codec, Self::KIND, key)?;
		if payload.len() < 16 {
			return None;
		}
		let (database, rest) = payload.split_at(8);
		let (parent_schema, name) = rest.split_at(8);

		Some(Self {
			database: DatabaseId(u64::from_be_bytes(database.try_into().ok()?)),
			parent_schema: SchemaId(u64::from_be_bytes(parent_schema.try_into().ok()?)),
			name: String::from_utf8(name.to_vec()).ok()?,
		})
	}
}
