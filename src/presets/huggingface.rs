//! Sign in with Hugging Face.
//!
//! Register `{base}/callback/huggingface` as the redirect URI of the Hugging Face OAuth app, then
//! pass its credentials to [`huggingface`]:
//!
//! ```
//! use oidc_presets::{presets::huggingface, provider::OidcUserConfig};
//!
//! let provider = huggingface(OidcUserConfig::new("hf-client-id", "hf-client-secret"));
//!
//! assert_eq!(provider.issuer.as_str(), "https://huggingface.co");
//! assert_eq!(provider.authorization.scope(), Some("openid profile"));
//! ```

// self
use crate::{
	_prelude::*,
	auth::ProviderId,
	profile::NormalizedIdentity,
	provider::{Issuer, OidcUserConfig, ProviderDescriptor, ProviderStyle},
};

/// Routing identifier of the preset.
pub const HUGGINGFACE_ID: &str = "huggingface";
/// Issuer used for OIDC discovery.
pub const HUGGINGFACE_ISSUER: &str = "https://huggingface.co";
/// Scopes needed for an ID token and a basic profile.
pub const HUGGINGFACE_SCOPE: &str = "openid profile";

const HUGGINGFACE_NAME: &str = "Hugging Face";
const HUGGINGFACE_LOGO: &str = "/huggingface.svg";

/// User-info claims returned by Hugging Face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuggingFaceProfile {
	/// Subject identifier; unique per user for this client.
	pub sub: String,
	/// Email address.
	pub email: String,
	/// Username on huggingface.co.
	pub preferred_username: String,
	/// Free-text display name.
	pub name: String,
	/// Avatar URL on huggingface.co.
	pub picture: String,
	/// Any other claims, kept but ignored by the mapper.
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}

/// Builds the Hugging Face descriptor from the caller's configuration.
pub fn huggingface(
	config: OidcUserConfig<HuggingFaceProfile>,
) -> ProviderDescriptor<HuggingFaceProfile> {
	ProviderDescriptor::builder(
		ProviderId::from_static(HUGGINGFACE_ID),
		HUGGINGFACE_NAME,
		Issuer::from_static(HUGGINGFACE_ISSUER),
		map_profile,
	)
	.scope(HUGGINGFACE_SCOPE)
	.style(ProviderStyle {
		logo: HUGGINGFACE_LOGO.into(),
		logo_dark: HUGGINGFACE_LOGO.into(),
		bg: "#fff".into(),
		text: "#000".into(),
		bg_dark: "#000".into(),
		text_dark: "#fff".into(),
	})
	.build(config)
}

/// Maps Hugging Face claims to the framework identity.
///
/// `name` comes from `preferred_username`, not from the `name` claim: the username is unique and
/// stable while the display name is free text.
pub fn map_profile(profile: &HuggingFaceProfile) -> NormalizedIdentity {
	NormalizedIdentity {
		id: profile.sub.clone(),
		name: Some(profile.preferred_username.clone()),
		email: Some(profile.email.clone()),
		image: Some(profile.picture.clone()),
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn profile() -> HuggingFaceProfile {
		serde_json::from_value(json!({
			"sub": "u1",
			"email": "a@b.com",
			"preferred_username": "alice",
			"name": "Alice A",
			"picture": "https://x/y.png",
			"isPro": true,
		}))
		.expect("Profile fixture should deserialize.")
	}

	#[test]
	fn name_comes_from_preferred_username() {
		let profile = profile();
		let identity = map_profile(&profile);

		assert_eq!(
			identity,
			NormalizedIdentity {
				id: "u1".into(),
				name: Some("alice".into()),
				email: Some("a@b.com".into()),
				image: Some("https://x/y.png".into()),
			}
		);
		assert_eq!(profile.extra.get("isPro"), Some(&json!(true)));
	}

	#[test]
	fn defaults_match_the_hosted_service() {
		let descriptor = huggingface(OidcUserConfig::new("id", "secret"));

		assert_eq!(descriptor.id.as_str(), HUGGINGFACE_ID);
		assert_eq!(descriptor.name, "Hugging Face");
		assert_eq!(descriptor.issuer.as_str(), HUGGINGFACE_ISSUER);
		assert_eq!(descriptor.authorization.scope(), Some("openid profile"));
		assert_eq!(descriptor.authorization.len(), 1);
		assert_eq!(descriptor.style.logo, "/huggingface.svg");
		assert_eq!(descriptor.style.logo_dark, "/huggingface.svg");
		assert_eq!((descriptor.style.bg.as_str(), descriptor.style.text.as_str()), ("#fff", "#000"));
		assert_eq!(
			(descriptor.style.bg_dark.as_str(), descriptor.style.text_dark.as_str()),
			("#000", "#fff")
		);
		assert!(descriptor.validate().is_ok());
	}
}
