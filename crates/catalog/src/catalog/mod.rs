// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use pgtemp_core::Codec;
use pgtemp_session::SessionDataStack;

use crate::TemporarySchemas;

pub mod schema;

/// Schema resolution for one codec. Names in the temporary namespace are
/// answered by [`TemporarySchemas`], everything else by the durable
/// namespace entries.
#[derive(Debug, Clone)]
pub struct Catalog {
	codec: Codec,
	temporary: TemporarySchemas,
}

impl Catalog {
	pub fn new(codec: Codec, sessions: Option<Arc<SessionDataStack>>) -> Self {
		Self {
			temporary: TemporarySchemas::new(codec.clone(), sessions),
			codec,
		}
	}

	pub fn temporary(&self) -> &TemporarySchemas {
		&self.temporary
	}
}
