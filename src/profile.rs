//! Normalized identities and typed parsing of raw user-info claims.
//!
//! Every provider declares its own claims type (see [`crate::presets`]) together with a pure
//! [`MapProfile`] function. Engines hand the deserialized user-info response to
//! [`parse_profile`] and then to the mapper exactly once per successful token exchange.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::_prelude::*;

/// Pure mapping from a provider's claims into the framework identity shape.
///
/// The mapper borrows its input, so it cannot mutate the claims it was given.
pub type MapProfile<P> = fn(&P) -> NormalizedIdentity;

/// Framework-facing user shape every provider must produce.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedIdentity {
	/// Stable provider-scoped user identifier.
	pub id: String,
	/// Human-readable handle.
	pub name: Option<String>,
	/// Email address.
	pub email: Option<String>,
	/// Avatar URL.
	pub image: Option<String>,
}

/// Errors raised while turning raw claims into a provider profile.
#[derive(Debug, ThisError)]
pub enum ProfileError {
	/// Claims did not match the provider's profile shape.
	#[error("User-info claims for `{provider}` do not match the expected profile at `{path}`.")]
	Claims {
		/// Provider whose profile type rejected the claims.
		provider: String,
		/// JSON path of the first offending claim.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Deserializes raw user-info claims into the profile type `P`.
///
/// Unknown claims are accepted when `P` keeps an open extra-claims map.
pub fn parse_profile<P>(provider: &str, claims: &serde_json::Value) -> Result<P, ProfileError>
where
	P: DeserializeOwned,
{
	serde_path_to_error::deserialize(claims).map_err(|e| {
		let path = e.path().to_string();

		ProfileError::Claims { provider: provider.to_owned(), path, source: e.into_inner() }
	})
}
