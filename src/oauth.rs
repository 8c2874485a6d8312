//! Bridges descriptors to the `oauth2` crate so engines built on it can consume them directly.

pub use oauth2;

// crates.io
use oauth2::{ClientId, ClientSecret, Scope};
// self
use crate::{
	_prelude::*,
	auth::ScopeValidationError,
	provider::{ProviderDescriptor, SCOPE_PARAM},
};

impl<P> ProviderDescriptor<P> {
	/// Client identifier as an [`oauth2::ClientId`].
	pub fn oauth2_client_id(&self) -> ClientId {
		ClientId::new(self.client_id().to_owned())
	}

	/// Client secret as an [`oauth2::ClientSecret`].
	pub fn oauth2_client_secret(&self) -> ClientSecret {
		ClientSecret::new(self.client_secret().expose().to_owned())
	}

	/// Requested scopes as [`oauth2::Scope`] values, normalized and deduplicated.
	pub fn oauth2_scopes(&self) -> Result<Vec<Scope>, ScopeValidationError> {
		let scopes = self.authorization.scopes()?;

		Ok(scopes.iter().map(|scope| Scope::new(scope.to_owned())).collect())
	}

	/// Authorization parameters other than `scope`, ready for `add_extra_param`.
	pub fn oauth2_extra_params(&self) -> Vec<(String, String)> {
		self.authorization
			.iter()
			.filter(|(key, _)| *key != SCOPE_PARAM)
			.map(|(key, value)| (key.to_owned(), value.to_owned()))
			.collect()
	}
}
