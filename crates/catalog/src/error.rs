// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::interface::catalog::DatabaseId;
use pgtemp_type::error::{Error, IntoDiagnostic, diagnostic::Diagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("Schema '{name}' already exists in database {database}")]
	SchemaAlreadyExists {
		database: DatabaseId,
		name: String,
	},

	#[error("Namespace entry for schema '{name}' in database {database} is corrupted")]
	CorruptedNamespaceEntry {
		database: DatabaseId,
		name: String,
		len: usize,
	},

	#[error("Schema '{name}' does not exist")]
	SchemaNotFound {
		database: DatabaseId,
		name: String,
	},

	#[error("Schema id sequence exhausted")]
	SequenceExhausted,
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			CatalogError::SchemaAlreadyExists {
				database,
				name,
			} => Diagnostic {
				code: "CATALOG_001".to_string(),
				message,
				label: Some(format!("duplicate schema definition in database {}", database)),
				help: Some(format!("choose a different name or drop the existing schema '{}' first", name)),
				notes: vec![],
				cause: None,
			},
			CatalogError::CorruptedNamespaceEntry {
				database,
				name,
				len,
			} => Diagnostic {
				code: "CATALOG_002".to_string(),
				message,
				label: Some(format!("expected an 8 byte schema id, found {} bytes", len)),
				help: None,
				notes: vec![
					format!("the entry maps ({}, '{}') in the namespace table", database, name),
					"This error indicates a critical catalog inconsistency.".to_string(),
				],
				cause: None,
			},
			CatalogError::SchemaNotFound {
				database,
				name,
			} => Diagnostic {
				code: "CATALOG_003".to_string(),
				message,
				label: Some(format!("unknown schema in database {}", database)),
				help: Some(format!("check for typos or create the schema '{}' first", name)),
				notes: vec![],
				cause: None,
			},
			CatalogError::SequenceExhausted => Diagnostic {
				code: "CATALOG_004".to_string(),
				message,
				label: None,
				help: None,
				notes: vec![format!("the last schema id handed out was {}", u64::MAX)],
				cause: None,
			},
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_schema_already_exists_display() {
		let err = CatalogError::SchemaAlreadyExists {
			database: DatabaseId(7),
			name: "analytics".to_string(),
		};
		assert_eq!(err.to_string(), "Schema 'analytics' already exists in database 7");
	}

	#[test]
	fn test_codes() {
		let err: Error = CatalogError::CorruptedNamespaceEntry {
			database: DatabaseId(7),
			name: "x".to_string(),
			len: 3,
		}
		.into();
		assert_eq!(err.code, "CATALOG_002");

		let err: Error = CatalogError::SchemaNotFound {
			database: DatabaseId(7),
			name: "x".to_string(),
		}
		.into();
		assert_eq!(err.code, "CATALOG_003");
		assert_eq!(err.message, "Schema 'x' does not exist");
	}
}
