// self
use crate::{
	_prelude::*,
	auth::{OPENID_SCOPE, ProviderId, ScopeValidationError},
	profile::MapProfile,
	provider::{
		AuthorizationParams, Issuer, IssuerError, OidcUserConfig, ProtocolKind, ProviderDescriptor,
		ProviderStyle,
	},
};

/// Errors raised while validating descriptors before registration.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum DescriptorError {
	/// Display name is required for provider buttons.
	#[error("Provider `{provider}` has an empty display name.")]
	EmptyName {
		/// Provider identifier.
		provider: String,
	},
	/// Issuer could not be parsed.
	#[error(transparent)]
	InvalidIssuer(#[from] IssuerError),
	/// Issuers must use HTTPS unless they are served from a loopback host.
	#[error("The issuer of provider `{provider}` must use HTTPS: {issuer}.")]
	InsecureIssuer {
		/// Provider identifier.
		provider: String,
		/// Issuer that failed validation.
		issuer: String,
	},
	/// The `scope` parameter cannot be normalized.
	#[error("Provider `{provider}` requests invalid scopes.")]
	InvalidScope {
		/// Provider identifier.
		provider: String,
		/// Underlying validation failure.
		#[source]
		source: ScopeValidationError,
	},
	/// OIDC authentication requests must include the `openid` scope.
	#[error("OIDC provider `{provider}` must request the `openid` scope.")]
	MissingOpenIdScope {
		/// Provider identifier.
		provider: String,
	},
}

/// Defaults for a [`ProviderDescriptor`], merged with caller overrides by [`build`](Self::build).
#[derive(Debug)]
pub struct ProviderDescriptorBuilder<P> {
	/// Default routing identifier.
	pub id: ProviderId,
	/// Default display name.
	pub name: String,
	/// Default protocol kind.
	pub kind: ProtocolKind,
	/// Default issuer.
	pub issuer: Issuer,
	/// Default authorization parameters.
	pub authorization: AuthorizationParams,
	/// Default profile mapper.
	pub map_profile: MapProfile<P>,
	/// Default presentation metadata.
	pub style: ProviderStyle,
}
impl<P> ProviderDescriptorBuilder<P> {
	/// Creates a builder for an OIDC provider with no authorization parameters and empty style.
	pub fn new(
		id: ProviderId,
		name: impl Into<String>,
		issuer: Issuer,
		map_profile: MapProfile<P>,
	) -> Self {
		Self {
			id,
			name: name.into(),
			kind: ProtocolKind::Oidc,
			issuer,
			authorization: AuthorizationParams::new(),
			map_profile,
			style: ProviderStyle::default(),
		}
	}

	/// Sets the protocol kind.
	pub fn kind(mut self, kind: ProtocolKind) -> Self {
		self.kind = kind;

		self
	}

	/// Sets the default scopes (space-delimited).
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.authorization = self.authorization.with_scope(scope);

		self
	}

	/// Sets an additional default authorization parameter.
	pub fn authorization_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.authorization.insert(key, value);

		self
	}

	/// Sets the default presentation metadata.
	pub fn style(mut self, style: ProviderStyle) -> Self {
		self.style = style;

		self
	}

	/// Merges the caller configuration over the defaults, field by field.
	///
	/// Scalar fields present in `config` replace the default, authorization parameters are merged
	/// key by key, and style fields are replaced individually. `config` is stored unchanged in
	/// [`ProviderDescriptor::user_overrides`]. Nothing is validated here.
	pub fn build(self, config: OidcUserConfig<P>) -> ProviderDescriptor<P> {
		ProviderDescriptor {
			id: config.id.clone().unwrap_or(self.id),
			name: config.name.clone().unwrap_or(self.name),
			kind: config.kind.unwrap_or(self.kind),
			issuer: config.issuer.clone().unwrap_or(self.issuer),
			authorization: self.authorization.merged(&config.authorization_params),
			map_profile: config.map_profile.unwrap_or(self.map_profile),
			style: self.style.apply(&config.style),
			user_overrides: config,
		}
	}
}

impl<P> ProviderDescriptor<P> {
	/// Checks the invariants an engine relies on.
	///
	/// The issuer must use HTTPS; plain HTTP is accepted only for loopback hosts so local
	/// development identity providers can be registered. Factories never call this; the registry
	/// does, at registration time.
	pub fn validate(&self) -> Result<(), DescriptorError> {
		let provider = || self.id.to_string();

		if self.name.trim().is_empty() {
			return Err(DescriptorError::EmptyName { provider: provider() });
		}

		self.issuer.url()?;

		if !self.issuer.is_https() && !self.issuer.is_loopback() {
			return Err(DescriptorError::InsecureIssuer {
				provider: provider(),
				issuer: self.issuer.to_string(),
			});
		}

		let scopes = self
			.authorization
			.scopes()
			.map_err(|source| DescriptorError::InvalidScope { provider: provider(), source })?;

		if self.kind == ProtocolKind::Oidc && !scopes.contains(OPENID_SCOPE) {
			return Err(DescriptorError::MissingOpenIdScope { provider: provider() });
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		profile::NormalizedIdentity,
		provider::{ProviderStyleOverrides, SCOPE_PARAM},
	};

	#[derive(Debug)]
	struct Claims {
		id: String,
	}

	fn by_id(claims: &Claims) -> NormalizedIdentity {
		NormalizedIdentity { id: claims.id.clone(), ..Default::default() }
	}

	fn by_upper_id(claims: &Claims) -> NormalizedIdentity {
		NormalizedIdentity { id: claims.id.to_uppercase(), ..Default::default() }
	}

	fn builder() -> ProviderDescriptorBuilder<Claims> {
		ProviderDescriptor::builder(
			ProviderId::new("acme").expect("Provider identifier should be valid."),
			"Acme",
			Issuer::new("https://sso.acme.test").expect("Issuer should be valid."),
			by_id,
		)
		.scope("openid profile")
		.authorization_param("prompt", "login")
		.style(ProviderStyle { bg: "#fff".into(), text: "#000".into(), ..Default::default() })
	}

	#[test]
	fn build_without_overrides_keeps_defaults() {
		let config = OidcUserConfig::new("client", "secret");
		let descriptor = builder().build(config.clone());

		assert_eq!(descriptor.id.as_str(), "acme");
		assert_eq!(descriptor.name, "Acme");
		assert_eq!(descriptor.kind, ProtocolKind::Oidc);
		assert_eq!(descriptor.issuer.as_str(), "https://sso.acme.test");
		assert_eq!(descriptor.authorization.scope(), Some("openid profile"));
		assert_eq!(descriptor.authorization.get("prompt"), Some("login"));
		assert_eq!(descriptor.map(&Claims { id: "u1".into() }).id, "u1");
		assert_eq!(descriptor.user_overrides, config);
		assert!(descriptor.validate().is_ok());
	}

	#[test]
	fn build_applies_each_override() {
		let descriptor = builder().build(
			OidcUserConfig::new("client", "secret")
				.with_id(ProviderId::new("acme-eu").expect("Override identifier should be valid."))
				.with_name("Acme EU")
				.with_kind(ProtocolKind::OAuth)
				.with_issuer(Issuer::new("https://eu.sso.acme.test").expect("Issuer is valid."))
				.with_authorization_param(SCOPE_PARAM, "openid profile email")
				.with_style(ProviderStyleOverrides { bg: Some("#111".into()), ..Default::default() })
				.with_map_profile(by_upper_id),
		);

		assert_eq!(descriptor.id.as_str(), "acme-eu");
		assert_eq!(descriptor.name, "Acme EU");
		assert_eq!(descriptor.kind, ProtocolKind::OAuth);
		assert_eq!(descriptor.issuer.as_str(), "https://eu.sso.acme.test");
		assert_eq!(descriptor.authorization.scope(), Some("openid profile email"));
		assert_eq!(descriptor.authorization.get("prompt"), Some("login"));
		assert_eq!(descriptor.style.bg, "#111");
		assert_eq!(descriptor.style.text, "#000");
		assert_eq!(descriptor.map(&Claims { id: "u1".into() }).id, "U1");
	}

	#[test]
	fn validate_rejects_broken_descriptors() {
		let config = || OidcUserConfig::new("client", "secret");
		let insecure = builder()
			.build(config().with_issuer(Issuer::new("http://sso.acme.test").expect("Parses.")));
		let unnamed = builder().build(config().with_name("  "));
		let no_openid = builder().build(config().with_scope("profile"));
		let bad_scope = builder().build(config().with_scope("   "));

		assert!(matches!(insecure.validate(), Err(DescriptorError::InsecureIssuer { .. })));
		assert!(matches!(unnamed.validate(), Err(DescriptorError::EmptyName { .. })));
		assert_eq!(
			no_openid.validate(),
			Err(DescriptorError::MissingOpenIdScope { provider: "acme".into() })
		);
		assert!(matches!(bad_scope.validate(), Err(DescriptorError::InvalidScope { .. })));
	}

	#[test]
	fn plain_http_is_accepted_only_on_loopback() {
		let with_issuer = |raw: &str| {
			builder().build(
				OidcUserConfig::new("client", "secret")
					.with_issuer(Issuer::new(raw).expect("Issuer should parse.")),
			)
		};

		assert!(with_issuer("http://localhost:5556").validate().is_ok());
		assert!(with_issuer("http://127.0.0.1:5556/dex").validate().is_ok());
		assert!(matches!(
			with_issuer("http://sso.acme.test").validate(),
			Err(DescriptorError::InsecureIssuer { .. })
		));
	}

	#[test]
	fn plain_oauth_skips_openid_requirement() {
		let descriptor = builder().build(
			OidcUserConfig::new("client", "secret").with_kind(ProtocolKind::OAuth).with_scope("read"),
		);

		assert!(descriptor.validate().is_ok());
	}
}
