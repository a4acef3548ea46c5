// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::interface::catalog::{PG_CATALOG_SCHEMA_NAME, PG_TEMP_SCHEMA_NAME, PUBLIC_SCHEMA_NAME};

const USER_SCHEMA_NAME: &str = "$user";

/// Ordered list of schemas used to resolve unqualified names, together with
/// the display name of the session's temporary schema. The display name is
/// empty until the session creates a temporary schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
	paths: Vec<String>,
	temporary_schema_name: String,
}

impl SearchPath {
	pub fn new<I, S>(paths: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			paths: paths.into_iter().map(Into::into).collect(),
			temporary_schema_name: String::new(),
		}
	}

	pub fn with_temporary_schema_name(mut self, name: impl Into<String>) -> Self {
		self.temporary_schema_name = name.into();
		self
	}

	pub fn temporary_schema_name(&self) -> &str {
		&self.temporary_schema_name
	}

	pub fn has_temporary_schema_name(&self) -> bool {
		!self.temporary_schema_name.is_empty()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.paths.iter().any(|p| p == name)
	}

	/// Effective resolution order. `pg_temp` is searched first and
	/// `pg_catalog` second unless either is listed explicitly; an explicit
	/// `pg_temp` entry is replaced by the display name, or skipped while the
	/// session has no temporary schema.
	pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
		let mut result = Vec::with_capacity(self.paths.len() + 2);

		if self.has_temporary_schema_name() && !self.contains(PG_TEMP_SCHEMA_NAME) {
			result.push(self.temporary_schema_name.as_str());
		}

		if !self.contains(PG_CATALOG_SCHEMA_NAME) {
			result.push(PG_CATALOG_SCHEMA_NAME);
		}

		for path in &self.paths {
			if path == PG_TEMP_SCHEMA_NAME {
				if self.has_temporary_schema_name() {
					result.push(self.temporary_schema_name.as_str());
				}
				continue;
			}
			result.push(path.as_str());
		}

		result.into_iter()
	}
}

impl Default for SearchPath {
	fn default() -> Self {
		Self::new([USER_SCHEMA_NAME, PUBLIC_SCHEMA_NAME])
	}
}
