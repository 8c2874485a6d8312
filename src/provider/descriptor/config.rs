// self
use crate::{
	_prelude::*,
	auth::{ClientSecret, ProviderId},
	error::ConfigError,
	profile::MapProfile,
	provider::{Issuer, ProtocolKind, ProviderStyleOverrides, SCOPE_PARAM},
};

/// Caller-supplied configuration for a provider.
///
/// The client credentials are mandatory; every other field overrides the matching default when
/// present. The profile mapper can only be overridden from code and is skipped by serde.
#[derive(Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct OidcUserConfig<P> {
	/// OAuth client identifier issued by the provider.
	pub client_id: String,
	/// OAuth client secret issued by the provider.
	pub client_secret: ClientSecret,
	/// Replacement provider identifier (changes the callback path).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<ProviderId>,
	/// Replacement display name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Replacement protocol kind.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub kind: Option<ProtocolKind>,
	/// Replacement issuer.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub issuer: Option<Issuer>,
	/// Authorization parameters merged key by key over the defaults.
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub authorization_params: BTreeMap<String, String>,
	/// Presentation overrides applied field by field.
	#[serde(default)]
	pub style: ProviderStyleOverrides,
	/// Replacement profile mapper.
	#[serde(skip)]
	pub map_profile: Option<MapProfile<P>>,
}
impl<P> OidcUserConfig<P> {
	/// Creates a configuration carrying only the mandatory client credentials.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: ClientSecret::new(client_secret),
			id: None,
			name: None,
			kind: None,
			issuer: None,
			authorization_params: BTreeMap::new(),
			style: ProviderStyleOverrides::default(),
			map_profile: None,
		}
	}

	/// Loads a configuration from JSON, reporting the path of the first invalid field.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(json);
		let config = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ConfigError::InvalidOverrides { source })?;

		de.end().map_err(|source| ConfigError::TrailingOverrides { source })?;

		Ok(config)
	}

	/// Overrides the provider identifier.
	pub fn with_id(mut self, id: ProviderId) -> Self {
		self.id = Some(id);

		self
	}

	/// Overrides the display name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Overrides the protocol kind.
	pub fn with_kind(mut self, kind: ProtocolKind) -> Self {
		self.kind = Some(kind);

		self
	}

	/// Overrides the issuer.
	pub fn with_issuer(mut self, issuer: Issuer) -> Self {
		self.issuer = Some(issuer);

		self
	}

	/// Overrides the requested scopes (space-delimited).
	pub fn with_scope(self, scope: impl Into<String>) -> Self {
		self.with_authorization_param(SCOPE_PARAM, scope)
	}

	/// Adds or replaces a single authorization parameter.
	pub fn with_authorization_param(
		mut self,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> Self {
		self.authorization_params.insert(key.into(), value.into());

		self
	}

	/// Overrides presentation metadata.
	pub fn with_style(mut self, style: ProviderStyleOverrides) -> Self {
		self.style = style;

		self
	}

	/// Overrides the profile mapper.
	pub fn with_map_profile(mut self, map_profile: MapProfile<P>) -> Self {
		self.map_profile = Some(map_profile);

		self
	}
}
impl<P> Clone for OidcUserConfig<P> {
	fn clone(&self) -> Self {
		Self {
			client_id: self.client_id.clone(),
			client_secret: self.client_secret.clone(),
			id: self.id.clone(),
			name: self.name.clone(),
			kind: self.kind,
			issuer: self.issuer.clone(),
			authorization_params: self.authorization_params.clone(),
			style: self.style.clone(),
			map_profile: self.map_profile,
		}
	}
}
impl<P> PartialEq for OidcUserConfig<P> {
	fn eq(&self, other: &Self) -> bool {
		let same_mapper = match (self.map_profile, other.map_profile) {
			(Some(lhs), Some(rhs)) => std::ptr::fn_addr_eq(lhs, rhs),
			(None, None) => true,
			_ => false,
		};

		same_mapper
			&& self.client_id == other.client_id
			&& self.client_secret == other.client_secret
			&& self.id == other.id
			&& self.name == other.name
			&& self.kind == other.kind
			&& self.issuer == other.issuer
			&& self.authorization_params == other.authorization_params
			&& self.style == other.style
	}
}
impl<P> Eq for OidcUserConfig<P> {}
impl<P> Debug for OidcUserConfig<P> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OidcUserConfig")
			.field("client_id", &self.client_id)
			.field("client_secret", &self.client_secret)
			.field("id", &self.id)
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("issuer", &self.issuer)
			.field("authorization_params", &self.authorization_params)
			.field("style", &self.style)
			.field("map_profile", &self.map_profile.map(|_| "fn(..)"))
			.finish()
	}
}
