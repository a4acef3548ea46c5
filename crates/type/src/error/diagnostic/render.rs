// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::error::diagnostic::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		render_into(&mut output, d, 0);
		output
	}
}

fn render_into(output: &mut String, d: &Diagnostic, depth: usize) {
	let indent = "  ".repeat(depth);

	let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);

	if let Some(label) = &d.label {
		let _ = writeln!(output, "{} = {}", indent, label);
	}

	if let Some(help) = &d.help {
		let _ = writeln!(output, "\n{}help: {}", indent, help);
	}

	for note in &d.notes {
		let _ = writeln!(output, "\n{}note: {}", indent, note);
	}

	if let Some(cause) = &d.cause {
		let _ = writeln!(output, "\n{}caused by:", indent);
		render_into(output, cause, depth + 1);
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_with_cause() {
		let cause = Diagnostic {
			code: "INNER_001".to_string(),
			message: "inner".to_string(),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		};
		let outer = Diagnostic {
			code: "OUTER_001".to_string(),
			message: "outer".to_string(),
			label: Some("here".to_string()),
			help: None,
			notes: vec![],
			cause: Some(Box::new(cause)),
		};

		let rendered = DefaultRenderer::render_string(&outer);
		assert!(rendered.starts_with("error[OUTER_001]: outer\n = here\n"));
		assert!(rendered.contains("caused by:\n  error[INNER_001]: inner"));
	}
}
