// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use pgtemp_type::{Error, Result};

pub mod codec;
pub mod common;
pub mod interface;
pub mod key;

pub use codec::{Codec, TenantId};
pub use common::CommitVersion;
pub use key::{EncodableKey, EncodedKey, EncodedKeyRange, KeyKind};
