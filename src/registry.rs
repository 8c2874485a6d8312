//! Process-wide provider registry.
//!
//! A [`ProviderRegistry`] is assembled once during startup through
//! [`ProviderRegistryBuilder`], which validates every descriptor and rejects duplicate ids.
//! After [`install`] the registry is reachable from anywhere through [`global`] and is never
//! mutated again. Descriptors with different claim types are stored behind [`DynProvider`].

// std
use std::sync::OnceLock;
// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::ProviderId,
	error::ConfigError,
	obs::{self, Outcome, ProviderSpan, ProviderStage},
	profile::{NormalizedIdentity, ProfileError},
	provider::{AuthorizationParams, Issuer, ProtocolKind, ProviderDescriptor, ProviderStyle},
};

static GLOBAL: OnceLock<ProviderRegistry> = OnceLock::new();

/// Errors raised while building, installing, or querying a registry.
#[derive(Debug, ThisError)]
pub enum RegistryError {
	/// Two descriptors share the same identifier.
	#[error("Provider `{id}` is already registered.")]
	DuplicateProvider {
		/// Conflicting identifier.
		id: String,
	},
	/// No descriptor is registered under the identifier.
	#[error("Provider `{id}` is not registered.")]
	UnknownProvider {
		/// Requested identifier.
		id: String,
	},
	/// The process-wide registry was installed earlier.
	#[error("The global provider registry is already installed.")]
	AlreadyInstalled,
	/// A descriptor failed validation.
	#[error("Provider `{id}` is misconfigured.")]
	InvalidProvider {
		/// Identifier of the rejected descriptor.
		id: String,
		/// Validation failure.
		#[source]
		source: ConfigError,
	},
}

/// Object-safe view of a [`ProviderDescriptor`] with its claim type erased.
pub trait DynProvider: Send + Sync {
	/// Routing identifier.
	fn id(&self) -> &ProviderId;

	/// Display name.
	fn name(&self) -> &str;

	/// Protocol engine handling the provider.
	fn kind(&self) -> ProtocolKind;

	/// Issuer used for discovery.
	fn issuer(&self) -> &Issuer;

	/// Extra authorization request parameters.
	fn authorization(&self) -> &AuthorizationParams;

	/// Presentation metadata.
	fn style(&self) -> &ProviderStyle;

	/// OAuth client identifier.
	fn client_id(&self) -> &str;

	/// Callback URL under `base`.
	fn callback_url(&self, base: &Url) -> Url;

	/// Parses raw user-info claims and maps them to the framework identity.
	fn map_user_info(
		&self,
		claims: &serde_json::Value,
	) -> Result<NormalizedIdentity, ProfileError>;
}
impl<P> DynProvider for ProviderDescriptor<P>
where
	P: 'static + DeserializeOwned,
{
	fn id(&self) -> &ProviderId {
		&self.id
	}

	fn name(&self) -> &str {
		&self.name
	}

	fn kind(&self) -> ProtocolKind {
		self.kind
	}

	fn issuer(&self) -> &Issuer {
		&self.issuer
	}

	fn authorization(&self) -> &AuthorizationParams {
		&self.authorization
	}

	fn style(&self) -> &ProviderStyle {
		&self.style
	}

	fn client_id(&self) -> &str {
		ProviderDescriptor::client_id(self)
	}

	fn callback_url(&self, base: &Url) -> Url {
		ProviderDescriptor::callback_url(self, base)
	}

	fn map_user_info(
		&self,
		claims: &serde_json::Value,
	) -> Result<NormalizedIdentity, ProfileError> {
		ProviderDescriptor::map_user_info(self, claims)
	}
}
impl Debug for dyn DynProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DynProvider")
			.field("id", self.id())
			.field("kind", &self.kind())
			.field("issuer", self.issuer())
			.finish_non_exhaustive()
	}
}

/// Read-only mapping from provider id to descriptor.
#[derive(Clone, Debug, Default)]
pub struct ProviderRegistry {
	providers: BTreeMap<ProviderId, Arc<dyn DynProvider>>,
}
impl ProviderRegistry {
	/// Starts an empty registry builder.
	pub fn builder() -> ProviderRegistryBuilder {
		ProviderRegistryBuilder::default()
	}

	/// Looks up a provider by id.
	pub fn get(&self, id: &str) -> Option<&Arc<dyn DynProvider>> {
		self.providers.get(id)
	}

	/// Looks up a provider by id, failing when it is unknown.
	pub fn require(&self, id: &str) -> Result<&Arc<dyn DynProvider>, RegistryError> {
		self.get(id).ok_or_else(|| RegistryError::UnknownProvider { id: id.to_owned() })
	}

	/// Iterates providers in id order.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn DynProvider>> {
		self.providers.values()
	}

	/// Number of registered providers.
	pub fn len(&self) -> usize {
		self.providers.len()
	}

	/// Returns true when no providers are registered.
	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	/// Maps raw user-info claims through the provider registered under `id`.
	pub fn map_user_info(
		&self,
		id: &str,
		claims: &serde_json::Value,
	) -> Result<NormalizedIdentity> {
		Ok(self.require(id)?.map_user_info(claims)?)
	}
}

/// Collects descriptors for a [`ProviderRegistry`].
#[derive(Debug, Default)]
pub struct ProviderRegistryBuilder {
	providers: BTreeMap<ProviderId, Arc<dyn DynProvider>>,
}
impl ProviderRegistryBuilder {
	/// Validates and adds a descriptor.
	pub fn register<P>(mut self, descriptor: ProviderDescriptor<P>) -> Result<Self, RegistryError>
	where
		P: 'static + DeserializeOwned,
	{
		const STAGE: ProviderStage = ProviderStage::Register;

		let id = descriptor.id.clone();
		let span = ProviderSpan::new(&id, STAGE);
		let _guard = span.clone().entered();
		let result = if self.providers.contains_key(&id) {
			Err(RegistryError::DuplicateProvider { id: id.to_string() })
		} else {
			descriptor.validate().map_err(|e| RegistryError::InvalidProvider {
				id: id.to_string(),
				source: ConfigError::from(e),
			})
		};

		if let Err(e) = result {
			span.record_failure(&e);
			obs::record_outcome(STAGE, &id, Outcome::Failure);

			return Err(e);
		}

		obs::record_outcome(STAGE, &id, Outcome::Success);
		self.providers.insert(id, Arc::new(descriptor));

		Ok(self)
	}

	/// Finishes the registry.
	pub fn build(self) -> ProviderRegistry {
		ProviderRegistry { providers: self.providers }
	}
}

/// Installs the process-wide registry; succeeds only once per process.
pub fn install(registry: ProviderRegistry) -> Result<&'static ProviderRegistry, RegistryError> {
	const STAGE: ProviderStage = ProviderStage::Install;

	let span = ProviderSpan::new("*", STAGE);
	let _guard = span.clone().entered();

	if GLOBAL.set(registry).is_err() {
		let e = RegistryError::AlreadyInstalled;

		span.record_failure(&e);
		obs::record_outcome(STAGE, "*", Outcome::Failure);

		return Err(e);
	}

	obs::record_outcome(STAGE, "*", Outcome::Success);

	GLOBAL.get().ok_or(RegistryError::AlreadyInstalled)
}

/// Returns the process-wide registry, if installed.
pub fn global() -> Option<&'static ProviderRegistry> {
	GLOBAL.get()
}
