// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub(crate) mod schema;
pub(crate) mod sequence;

/// Durable catalog reads and writes. Every operation runs against the
/// caller's transaction and is scoped by the caller's codec.
pub struct CatalogStore;
