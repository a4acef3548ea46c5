// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::data::SessionData;

/// Nested session contexts of one connection. Only the top frame is active.
/// The base frame is never popped.
#[derive(Debug, Default)]
pub struct SessionDataStack {
	frames: RwLock<Vec<Arc<SessionData>>>,
}

impl SessionDataStack {
	pub fn new(base: SessionData) -> Self {
		Self {
			frames: RwLock::new(vec![Arc::new(base)]),
		}
	}

	pub fn top(&self) -> Option<Arc<SessionData>> {
		self.frames.read().last().cloned()
	}

	pub fn base(&self) -> Option<Arc<SessionData>> {
		self.frames.read().first().cloned()
	}

	pub fn push(&self, frame: SessionData) {
		let mut frames = self.frames.write();
		frames.push(Arc::new(frame));
		trace!(depth = frames.len(), "session data frame pushed");
	}

	/// Pops the top frame unless it is the base frame.
	pub fn pop(&self) -> Option<Arc<SessionData>> {
		let mut frames = self.frames.write();
		if frames.len() <= 1 {
			return None;
		}
		let result = frames.pop();
		trace!(depth = frames.len(), "session data frame popped");
		result
	}

	/// Pops every frame above the base, returning how many were removed.
	pub fn pop_all(&self) -> usize {
		let mut frames = self.frames.write();
		let removed = frames.len().saturating_sub(1);
		frames.truncate(1);
		removed
	}

	/// Replaces the active frame, or installs `frame` as base of an empty stack.
	pub fn replace_top(&self, frame: SessionData) {
		let mut frames = self.frames.write();
		match frames.last_mut() {
			Some(top) => *top = Arc::new(frame),
			None => frames.push(Arc::new(frame)),
		}
	}

	pub fn len(&self) -> usize {
		self.frames.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.frames.read().is_empty()
	}
}
