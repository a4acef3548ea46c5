// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use pgtemp_type::Result;

pub mod error;
pub mod multi;
pub mod store;
pub mod transaction;

pub use multi::{CommandTransaction, QueryTransaction, TransactionMulti};
pub use transaction::Transaction;
