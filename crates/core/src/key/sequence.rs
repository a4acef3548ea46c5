// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	codec::Codec,
	key::{EncodableKey, EncodedKey, KeyKind, key_header, key_payload},
};

/// Holds the last schema id handed out for one tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSequenceKey;

impl SchemaSequenceKey {
	pub fn encoded(codec: &Codec) -> EncodedKey {
		SchemaSequenceKey.encode(codec)
	}
}

impl EncodableKey for SchemaSequenceKey {
	const KIND: KeyKind = KeyKind::SchemaSequence;

	fn encode(&self, codec: &Codec) -> EncodedKey {
		EncodedKey::new(key_header(codec, Self::KIND, 0))
	}

	fn decode(codec: &Codec, key: &EncodedKey) -> Option<Self> {
		match key_payload(codec, Self::KIND, key)? {
			[] => Some(SchemaSequenceKey),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_encode_decode() {
		let codec = Codec::system();
		let key = SchemaSequenceKey::encoded(&codec);
		assert_eq!(key.as_slice(), &[1, KeyKind::SchemaSequence as u8]);
		assert_eq!(SchemaSequenceKey::decode(&codec, &key), Some(SchemaSequenceKey));
	}
}
