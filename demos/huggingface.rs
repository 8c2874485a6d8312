//! Builds the Hugging Face preset, installs it into the global registry, and maps a sample
//! user-info payload the way an OIDC engine would after a successful token exchange.

// crates.io
use color_eyre::Result;
use serde_json::json;
use url::Url;
// self
use oidc_presets::{
	presets::huggingface,
	provider::OidcUserConfig,
	registry::{self, ProviderRegistry},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let provider = huggingface(
		OidcUserConfig::new("hf-client-id", "hf-client-secret").with_scope("openid profile email"),
	);
	let base = Url::parse("https://app.example.com/api/auth")?;

	println!("Register {} as the redirect URI.", provider.callback_url(&base));
	println!("Discovery document: {}.", provider.issuer.discovery_url()?);
	println!("Descriptor fingerprint: {}.", provider.fingerprint());

	let registry = registry::install(ProviderRegistry::builder().register(provider)?.build())?;
	let identity = registry.map_user_info(
		"huggingface",
		&json!({
			"sub": "62f0c5b8d4e1a2b3c4d5e6f7",
			"email": "alice@example.com",
			"preferred_username": "alice",
			"name": "Alice A",
			"picture": "https://cdn-avatars.huggingface.co/alice.png",
		}),
	)?;

	println!("Signed in as {identity:?}.");

	Ok(())
}
