// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pgtemp_core::CommitVersion;
use pgtemp_type::error::{Error, IntoDiagnostic, diagnostic::Diagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransactionError {
	#[error("Cannot read at version {requested}, latest committed version is {latest}")]
	VersionAhead {
		requested: CommitVersion,
		latest: CommitVersion,
	},

	#[error("Transaction has been discarded and cannot be reused")]
	Discarded,

	#[error("Transaction conflict: keys read or written were changed after version {version}")]
	Conflict {
		version: CommitVersion,
	},
}

impl IntoDiagnostic for TransactionError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TransactionError::VersionAhead {
				requested,
				latest,
			} => Diagnostic {
				code: "TXN_001".to_string(),
				message,
				label: Some(format!("version {} has not been committed yet", requested)),
				help: Some(format!("read at or below version {}", latest)),
				notes: vec![],
				cause: None,
			},
			TransactionError::Discarded => Diagnostic {
				code: "TXN_002".to_string(),
				message,
				label: None,
				help: Some("Create a new transaction".to_string()),
				notes: vec!["a transaction is discarded once it commits or rolls back".to_string()],
				cause: None,
			},
			TransactionError::Conflict {
				version,
			} => Diagnostic {
				code: "TXN_003".to_string(),
				message,
				label: Some(format!("a concurrent transaction committed after version {}", version)),
				help: Some("retry the transaction".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<TransactionError> for Error {
	fn from(err: TransactionError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_discarded_diagnostic() {
		let err: Error = TransactionError::Discarded.into();
		assert_eq!(err.code, "TXN_002");
		assert_eq!(err.message, "Transaction has been discarded and cannot be reused");
	}

	#[test]
	fn test_version_ahead_diagnostic() {
		let err: Error = TransactionError::VersionAhead {
			requested: CommitVersion(9),
			latest: CommitVersion(3),
		}
		.into();
		assert_eq!(err.code, "TXN_001");
		assert_eq!(err.message, "Cannot read at version 9, latest committed version is 3");
	}

	#[test]
	fn test_conflict_diagnostic() {
		let err: Error = TransactionError::Conflict {
			version: CommitVersion(4),
		}
		.into();
		assert_eq!(err.code, "TXN_003");
		assert_eq!(err.help.as_deref(), Some("retry the transaction"));
	}
}
