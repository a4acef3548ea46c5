// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::{CommitVersion, EncodedKey, EncodedKeyRange};
use pgtemp_type::Result;

use crate::{
	multi::{CommandTransaction, QueryTransaction},
	store::MultiVersionValues,
};

/// Borrowed handle to whichever transaction the caller holds. Catalog reads
/// accept this so they work inside both read-only and read-write work.
pub enum Transaction<'a> {
	Command(&'a mut CommandTransaction),
	Query(&'a mut QueryTransaction),
}

impl<'a> Transaction<'a> {
	pub fn reborrow(&mut self) -> Transaction<'_> {
		match self {
			Transaction::Command(cmd) => Transaction::Command(&mut **cmd),
			Transaction::Query(qry) => Transaction::Query(&mut **qry),
		}
	}

	pub fn version(&self) -> CommitVersion {
		match self {
			Transaction::Command(cmd) => cmd.version(),
			Transaction::Query(qry) => qry.version(),
		}
	}

	pub fn get(&mut self, key: &EncodedKey) -> Result<Option<MultiVersionValues>> {
		match self {
			Transaction::Command(cmd) => cmd.get(key),
			Transaction::Query(qry) => qry.get(key),
		}
	}

	pub fn range(&mut self, range: EncodedKeyRange) -> Result<Vec<MultiVersionValues>> {
		match self {
			Transaction::Command(cmd) => cmd.range(range),
			Transaction::Query(qry) => qry.range(range),
		}
	}
}

impl<'a> From<&'a mut CommandTransaction> for Transaction<'a> {
	fn from(cmd: &'a mut CommandTransaction) -> Self {
		Transaction::Command(cmd)
	}
}

impl<'a> From<&'a mut QueryTransaction> for Transaction<'a> {
	fn from(qry: &'a mut QueryTransaction) -> Self {
		Transaction::Query(qry)
	}
}
