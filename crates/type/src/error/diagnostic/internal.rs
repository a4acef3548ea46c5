// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Creates an internal error diagnostic carrying the source location of the
/// violated invariant.
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();

	let error_id =
		format!("ERR-{}:{}", file.rsplit('/').next().unwrap_or(file).trim_end_matches(".rs"), line);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error [{}]: {}", error_id, reason),
		label: Some(format!("Internal invariant violated at {}:{}:{}", file, line, column)),
		help: Some(format!(
			"This is an internal error that should never occur in normal operation.\n\
			 Location: {}:{}:{}\nModule: {}\nVersion: {}",
			file,
			line,
			column,
			module_path,
			env!("CARGO_PKG_VERSION"),
		)),
		notes: vec![
			"This error indicates a critical internal inconsistency.".to_string(),
			format!("Error tracking ID: {}", error_id),
		],
		cause: None,
	}
}

/// Internal error without source location.
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_with_context(reason, "unknown", 0, 0, "unknown")
}

/// Creates an internal error diagnostic capturing the call site.
#[macro_export]
macro_rules! internal {
	($reason:expr) => {
		$crate::error::diagnostic::internal::internal_with_context(
			$reason,
			file!(),
			line!(),
			column!(),
			module_path!(),
		)
	};
	($fmt:expr, $($arg:tt)*) => {
		$crate::error::diagnostic::internal::internal_with_context(
			format!($fmt, $($arg)*),
			file!(),
			line!(),
			column!(),
			module_path!(),
		)
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_internal_literal() {
		let diagnostic = internal!("simple error message");

		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert!(diagnostic.message.contains("simple error message"));
		assert!(diagnostic.label.as_ref().unwrap().contains("Internal invariant violated"));
	}

	#[test]
	fn test_internal_with_format() {
		let diagnostic = internal!("value {} for {}", 42, "test");
		assert!(diagnostic.message.contains("value 42 for test"));
	}

	#[test]
	fn test_internal_function() {
		let diagnostic = internal("basic internal error");
		assert!(diagnostic.label.as_ref().unwrap().contains("unknown:0:0"));
		assert!(diagnostic.message.contains("ERR-unknown:0"));
	}

	#[test]
	fn test_internal_with_context_function() {
		let diagnostic = internal_with_context("context error", "src/test.rs", 100, 20, "test::module");

		assert!(diagnostic.message.contains("[ERR-test:100]"));
		let help = diagnostic.help.as_ref().unwrap();
		assert!(help.contains("src/test.rs:100:20"));
		assert!(help.contains("test::module"));
	}
}
