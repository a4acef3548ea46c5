// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Visitor};

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash)]
pub struct DatabaseId(pub u64);

impl Deref for DatabaseId {
	type Target = u64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u64> for DatabaseId {
	fn eq(&self, other: &u64) -> bool {
		self.0.eq(other)
	}
}

impl From<DatabaseId> for u64 {
	fn from(value: DatabaseId) -> Self {
		value.0
	}
}

impl Display for DatabaseId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Serialize for DatabaseId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_u64(self.0)
	}
}

impl<'de> Deserialize<'de> for DatabaseId {
	fn deserialize<D>(deserializer: D) -> Result<DatabaseId, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct U64Visitor;

		impl Visitor<'_> for U64Visitor {
			type Value = DatabaseId;

			fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
				formatter.write_str("an unsigned 64-bit number")
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
				Ok(DatabaseId(value))
			}
		}

		deserializer.deserialize_u64(U64Visitor)
	}
}

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash)]
pub struct SchemaId(pub u64);

impl SchemaId {
	/// Parent of every schema entry in the namespace table; not a real schema.
	pub const ROOT: SchemaId = SchemaId(0);

	/// Fixed id of the `public` schema, present in every database.
	pub const PUBLIC: SchemaId = SchemaId(29);

	/// First id handed out to schemas created at runtime.
	pub const FIRST_USER: SchemaId = SchemaId(1025);

	pub fn to_be_bytes(self) -> [u8; 8] {
		self.0.to_be_bytes()
	}
}

impl Deref for SchemaId {
	type Target = u64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u64> for SchemaId {
	fn eq(&self, other: &u64) -> bool {
		self.0.eq(other)
	}
}

impl From<SchemaId> for u64 {
	fn from(value: SchemaId) -> Self {
		value.0
	}
}

impl Display for SchemaId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Serialize for SchemaId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_u64(self.0)
	}
}

impl<'de> Deserialize<'de> for SchemaId {
	fn deserialize<D>(deserializer: D) -> Result<SchemaId, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct U64Visitor;

		impl Visitor<'_> for U64Visitor {
			type Value = SchemaId;

			fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
				formatter.write_str("an unsigned 64-bit number")
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
				Ok(SchemaId(value))
			}
		}

		deserializer.deserialize_u64(U64Visitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_schema_id_serde() {
		let json = serde_json::to_string(&SchemaId(1500088)).unwrap();
		assert_eq!(json, "1500088");
		let back: SchemaId = serde_json::from_str(&json).unwrap();
		assert_eq!(back, 1500088);
	}

	#[test]
	fn test_database_id_serde() {
		let back: DatabaseId = serde_json::from_str("7").unwrap();
		assert_eq!(back, DatabaseId(7));
		assert_eq!(back.to_string(), "7");
	}
}
