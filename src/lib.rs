//! Typed OpenID Connect provider presets: immutable descriptors, pure claim mappers, and an
//! init-once provider registry for whichever OIDC engine drives the actual protocol.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod oauth;
pub mod obs;
pub mod presets;
pub mod profile;
pub mod provider;
pub mod registry;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::Result;
}

pub use url;
#[cfg(test)] use color_eyre as _;
