// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

pub use namespace::NamespaceKey;
pub use range::EncodedKeyRange;
pub use sequence::SchemaSequenceKey;

use crate::codec::Codec;

mod namespace;
mod range;
mod sequence;

const VERSION: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum KeyKind {
	Namespace = 0x01,
	SchemaSequence = 0x02,
}

#[derive(Debug, Clone, PartialOrd, Ord, Hash, PartialEq, Eq)]
pub struct EncodedKey(pub Vec<u8>);

impl Deref for EncodedKey {
	type Target = Vec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedKey {
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self(key.into())
	}
}

pub trait EncodableKey: Sized {
	const KIND: KeyKind;

	fn encode(&self, codec: &Codec) -> EncodedKey;

	fn decode(codec: &Codec, key: &EncodedKey) -> Option<Self>;
}

/// Writes `codec prefix | VERSION | kind` and returns the buffer for the
/// payload.
fn key_header(codec: &Codec, kind: KeyKind, payload_len: usize) -> Vec<u8> {
	let mut out = Vec::with_capacity(codec.prefix().len() + 2 + payload_len);
	out.extend(codec.prefix());
	out.push(VERSION);
	out.push(kind as u8);
	out
}

/// Strips the header written by [`key_header`], returning the payload.
fn key_payload<'a>(codec: &Codec, kind: KeyKind, key: &'a [u8]) -> Option<&'a [u8]> {
	let rest = codec.strip_prefix(key)?;
	match rest {
		[VERSION, k, payload @ ..] if *k == kind as u8 => Some(payload),
		_ => None,
	}
}
