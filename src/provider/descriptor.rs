//! Provider descriptor data structures and helpers shared by every preset.
//!
//! A descriptor is a plain value: it is assembled once from defaults plus the caller's
//! [`OidcUserConfig`], never touches the network, and owns no external resources.

/// Builder API that merges defaults with caller overrides.
pub mod builder;
/// Caller-supplied credentials and overrides.
pub mod config;
/// OIDC issuer identifiers.
pub mod issuer;
/// Protocol engine selection.
pub mod kind;
/// Authorization request parameters.
pub mod params;
/// Presentation metadata.
pub mod style;

pub use builder::*;
pub use config::*;
pub use issuer::*;
pub use kind::*;
pub use params::*;
pub use style::*;

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
// self
use crate::{
	_prelude::*,
	auth::{ClientSecret, ProviderId},
	obs::{self, Outcome, ProviderSpan, ProviderStage},
	profile::{self, MapProfile, NormalizedIdentity, ProfileError},
};

/// Immutable provider descriptor consumed by OIDC engines.
pub struct ProviderDescriptor<P> {
	/// Routing identifier, used as the callback path segment.
	pub id: ProviderId,
	/// Display name.
	pub name: String,
	/// Protocol engine handling this provider.
	pub kind: ProtocolKind,
	/// Issuer used for endpoint discovery.
	pub issuer: Issuer,
	/// Extra query parameters for the authorization request.
	pub authorization: AuthorizationParams,
	/// Pure mapping from the provider's claims to the framework identity.
	pub map_profile: MapProfile<P>,
	/// Presentation metadata.
	pub style: ProviderStyle,
	/// Caller configuration exactly as supplied.
	pub user_overrides: OidcUserConfig<P>,
}
impl<P> ProviderDescriptor<P> {
	/// Starts a descriptor from its mandatory defaults.
	pub fn builder(
		id: ProviderId,
		name: impl Into<String>,
		issuer: Issuer,
		map_profile: MapProfile<P>,
	) -> ProviderDescriptorBuilder<P> {
		ProviderDescriptorBuilder::new(id, name, issuer, map_profile)
	}

	/// Applies the profile mapper.
	pub fn map(&self, profile: &P) -> NormalizedIdentity {
		(self.map_profile)(profile)
	}

	/// OAuth client identifier from the caller configuration.
	pub fn client_id(&self) -> &str {
		&self.user_overrides.client_id
	}

	/// OAuth client secret from the caller configuration.
	pub fn client_secret(&self) -> &ClientSecret {
		&self.user_overrides.client_secret
	}

	/// Callback URL the engine registers for this provider: `{base}/callback/{id}`.
	pub fn callback_url(&self, base: &Url) -> Url {
		let mut url = base.clone();
		let path = format!("{}/callback/{}", base.path().trim_end_matches('/'), self.id);

		url.set_path(&path);

		url
	}

	/// Stable digest of the behavior-relevant fields.
	///
	/// Covers id, name, kind, issuer, authorization parameters, style, and client id. The client
	/// secret and the mapper address are excluded. Every field is length-prefixed, so values
	/// containing separators cannot collide with other layouts.
	pub fn fingerprint(&self) -> String {
		let mut hasher = Sha256::new();
		let mut field = |value: &str| {
			hasher.update((value.len() as u64).to_be_bytes());
			hasher.update(value.as_bytes());
		};

		field(self.id.as_str());
		field(self.name.as_str());
		field(self.kind.as_str());
		field(self.issuer.as_str());
		field(self.client_id());
		field(self.authorization.len().to_string().as_str());

		for (key, value) in self.authorization.iter() {
			field(key);
			field(value);
		}

		for value in [
			&self.style.logo,
			&self.style.logo_dark,
			&self.style.bg,
			&self.style.text,
			&self.style.bg_dark,
			&self.style.text_dark,
		] {
			field(value.as_str());
		}

		STANDARD_NO_PAD.encode(hasher.finalize())
	}
}
impl<P> ProviderDescriptor<P>
where
	P: DeserializeOwned,
{
	/// Parses raw user-info claims and maps them to the framework identity.
	///
	/// Engines call this once per successful token exchange with the deserialized user-info
	/// response. The claims are only borrowed.
	pub fn map_user_info(
		&self,
		claims: &serde_json::Value,
	) -> Result<NormalizedIdentity, ProfileError> {
		const STAGE: ProviderStage = ProviderStage::MapProfile;

		let span = ProviderSpan::new(&self.id, STAGE);
		let _guard = span.clone().entered();
		let result = profile::parse_profile::<P>(&self.id, claims).map(|p| self.map(&p));

		match &result {
			Ok(_) => obs::record_outcome(STAGE, &self.id, Outcome::Success),
			Err(e) => {
				span.record_failure(e);
				obs::record_outcome(STAGE, &self.id, Outcome::Failure);
			},
		}

		result
	}
}
impl<P> Clone for ProviderDescriptor<P> {
	fn clone(&self) -> Self {
		Self {
			id: self.id.clone(),
			name: self.name.clone(),
			kind: self.kind,
			issuer: self.issuer.clone(),
			authorization: self.authorization.clone(),
			map_profile: self.map_profile,
			style: self.style.clone(),
			user_overrides: self.user_overrides.clone(),
		}
	}
}
impl<P> PartialEq for ProviderDescriptor<P> {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
			&& self.name == other.name
			&& self.kind == other.kind
			&& self.issuer == other.issuer
			&& self.authorization == other.authorization
			&& std::ptr::fn_addr_eq(self.map_profile, other.map_profile)
			&& self.style == other.style
			&& self.user_overrides == other.user_overrides
	}
}
impl<P> Eq for ProviderDescriptor<P> {}
impl<P> Debug for ProviderDescriptor<P> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderDescriptor")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("issuer", &self.issuer)
			.field("authorization", &self.authorization)
			.field("style", &self.style)
			.field("user_overrides", &self.user_overrides)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[derive(Debug, Deserialize)]
	struct Claims {
		login: String,
	}

	fn by_login(claims: &Claims) -> NormalizedIdentity {
		NormalizedIdentity { id: claims.login.clone(), ..Default::default() }
	}

	fn descriptor() -> ProviderDescriptor<Claims> {
		ProviderDescriptor::builder(
			ProviderId::new("demo").expect("Provider identifier should be valid."),
			"Demo",
			Issuer::new("https://id.example.com").expect("Issuer should be valid."),
			by_login,
		)
		.scope("openid")
		.build(OidcUserConfig::new("client", "secret"))
	}

	#[test]
	fn callback_url_collapses_trailing_slash() {
		let descriptor = descriptor();

		for base in ["https://app.example.com/api/auth", "https://app.example.com/api/auth/"] {
			let base = Url::parse(base).expect("Base URL should parse.");

			assert_eq!(
				descriptor.callback_url(&base).as_str(),
				"https://app.example.com/api/auth/callback/demo"
			);
		}
	}

	#[test]
	fn fingerprint_tracks_configuration_but_not_secret() {
		let base = descriptor();
		let rotated = ProviderDescriptor::builder(
			base.id.clone(),
			"Demo",
			base.issuer.clone(),
			by_login as MapProfile<Claims>,
		)
		.scope("openid")
		.build(OidcUserConfig::new("client", "rotated-secret"));
		let renamed = ProviderDescriptor::builder(
			base.id.clone(),
			"Demo",
			base.issuer.clone(),
			by_login as MapProfile<Claims>,
		)
		.scope("openid")
		.build(OidcUserConfig::new("client", "secret").with_name("Renamed"));

		assert_eq!(base.fingerprint(), descriptor().fingerprint());
		assert_eq!(base.fingerprint(), rotated.fingerprint());
		assert_ne!(base.fingerprint(), renamed.fingerprint());
		assert_eq!(base.fingerprint().len(), 43, "SHA-256 without padding is 43 base64 chars.");
	}

	#[test]
	fn fingerprint_separates_values_containing_separators() {
		let with_params = |params: &[(&str, &str)]| {
			params
				.iter()
				.fold(OidcUserConfig::new("client", "secret"), |config, (key, value)| {
					config.with_authorization_param(*key, *value)
				})
		};
		let folded: ProviderDescriptor<Claims> = ProviderDescriptor::builder(
			ProviderId::new("demo").expect("Provider identifier should be valid."),
			"Demo",
			Issuer::new("https://id.example.com").expect("Issuer should be valid."),
			by_login,
		)
		.build(with_params(&[("x", "1\nauthorization.y=2")]));
		let split = ProviderDescriptor::builder(
			folded.id.clone(),
			"Demo",
			folded.issuer.clone(),
			by_login as MapProfile<Claims>,
		)
		.build(with_params(&[("x", "1"), ("y", "2")]));

		assert_ne!(folded, split);
		assert_ne!(folded.fingerprint(), split.fingerprint());
	}

	#[test]
	fn map_user_info_parses_then_maps() {
		let descriptor = descriptor();
		let identity = descriptor
			.map_user_info(&json!({ "login": "octo", "ignored": true }))
			.expect("Claims should map.");

		assert_eq!(identity.id, "octo");
		assert!(descriptor.map_user_info(&json!({ "user": "octo" })).is_err());
	}

	#[test]
	fn debug_omits_secret() {
		let rendered = format!("{:?}", descriptor());

		assert!(rendered.contains("Provider(demo)"));
		assert!(!rendered.contains("\"secret\""));
	}
}
