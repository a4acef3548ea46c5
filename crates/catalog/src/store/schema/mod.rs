// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::interface::catalog::{DatabaseId, SchemaId};
use pgtemp_type::return_error;

use crate::error::CatalogError;

pub mod create;
pub mod drop;
pub mod find;
pub mod list;

/// Namespace entries store the schema id as 8 big-endian bytes.
pub(crate) fn decode_schema_id(database: DatabaseId, name: &str, values: &[u8]) -> crate::Result<SchemaId> {
	let Ok(bytes) = <[u8; 8]>::try_from(values) else {
		return_error!(CatalogError::CorruptedNamespaceEntry {
			database,
			name: name.to_string(),
			len: values.len(),
		});
	};
	Ok(SchemaId(u64::from_be_bytes(bytes)))
}

pub(crate) fn encode_schema_id(id: SchemaId) -> Vec<u8> {
	id.to_be_bytes().to_vec()
}
