// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use catalog::Catalog;
pub use pgtemp_type::Result;
pub use store::CatalogStore;
pub use temporary::TemporarySchemas;

pub mod catalog;
pub mod error;
pub mod store;
pub mod temporary;
pub mod test_utils;
