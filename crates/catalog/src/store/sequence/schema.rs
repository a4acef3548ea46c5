// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::{Codec, interface::catalog::SchemaId, key::SchemaSequenceKey};
use pgtemp_transaction::CommandTransaction;
use pgtemp_type::{error, internal, return_error};

use crate::error::CatalogError;

pub(crate) struct SchemaSequence {}

impl SchemaSequence {
	/// Hands out the next schema id for `codec`, starting at
	/// [`SchemaId::FIRST_USER`].
	pub(crate) fn next_schema_id(txn: &mut CommandTransaction, codec: &Codec) -> crate::Result<SchemaId> {
		let key = SchemaSequenceKey::encoded(codec);

		let next = match txn.get(&key)? {
			Some(entry) => {
				let bytes: [u8; 8] = entry.values.as_slice().try_into().map_err(|_| {
					error!(internal!("schema sequence value has {} bytes", entry.values.len()))
				})?;
				let current = u64::from_be_bytes(bytes);
				if current == u64::MAX {
					return_error!(CatalogError::SequenceExhausted);
				}
				current + 1
			}
			None => SchemaId::FIRST_USER.0,
		};

		txn.set(key, next.to_be_bytes().to_vec())?;
		Ok(SchemaId(next))
	}
}
