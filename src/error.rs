//! Crate-level error types shared by descriptors, profile mapping, and the registry.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Raw user-info claims could not be turned into a normalized identity.
	#[error(transparent)]
	Profile(#[from] crate::profile::ProfileError),
	/// Registry lookup or installation failure.
	#[error(transparent)]
	Registry(#[from] crate::registry::RegistryError),
}

/// Configuration and validation failures raised while assembling providers.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Provider identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
	/// Issuer identifier failed validation.
	#[error(transparent)]
	InvalidIssuer(#[from] crate::provider::IssuerError),
	/// Requested scopes cannot be normalized.
	#[error("Requested scopes are invalid.")]
	InvalidScope(#[from] crate::auth::ScopeValidationError),
	/// Descriptor violates an invariant checked at registration.
	#[error(transparent)]
	InvalidDescriptor(#[from] crate::provider::DescriptorError),
	/// User overrides could not be parsed from their serialized form.
	#[error("User overrides are malformed.")]
	InvalidOverrides {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// User overrides are followed by content other than whitespace.
	#[error("User overrides contain trailing content.")]
	TrailingOverrides {
		/// Position of the trailing content.
		#[source]
		source: serde_json::Error,
	},
}
