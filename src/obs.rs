//! Optional observability helpers for the registry and engine-facing profile mapping.
//!
//! Descriptor factories never emit anything; only registration, installation, and
//! [`map_user_info`](crate::provider::ProviderDescriptor::map_user_info) are instrumented.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `oidc_presets.provider` with the `provider` and `stage`
//!   fields, plus a `warn` event whenever a stage fails.
//! - Enable `metrics` to increment the `oidc_presets_provider_total` counter for every outcome,
//!   labeled by `stage`, `provider`, and `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Instrumented stages of a provider's lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderStage {
	/// Descriptor validation and insertion into a registry builder.
	Register,
	/// Installation of the process-wide registry.
	Install,
	/// Parsing and mapping of user-info claims.
	MapProfile,
}
impl ProviderStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderStage::Register => "register",
			ProviderStage::Install => "install",
			ProviderStage::MapProfile => "map_profile",
		}
	}
}
impl Display for ProviderStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded per stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// The stage completed.
	Success,
	/// The stage returned an error to the caller.
	Failure,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Success => "success",
			Outcome::Failure => "failure",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
