// self
use crate::_prelude::*;

/// Cosmetic metadata for sign-in buttons; has no behavioral effect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderStyle {
	/// Logo path for light themes.
	pub logo: String,
	/// Logo path for dark themes.
	pub logo_dark: String,
	/// Background color for light themes.
	pub bg: String,
	/// Text color for light themes.
	pub text: String,
	/// Background color for dark themes.
	pub bg_dark: String,
	/// Text color for dark themes.
	pub text_dark: String,
}
impl ProviderStyle {
	/// Returns a copy with every field present in `overrides` replaced.
	pub fn apply(&self, overrides: &ProviderStyleOverrides) -> Self {
		fn pick(default: &str, custom: &Option<String>) -> String {
			custom.as_deref().unwrap_or(default).to_owned()
		}

		Self {
			logo: pick(&self.logo, &overrides.logo),
			logo_dark: pick(&self.logo_dark, &overrides.logo_dark),
			bg: pick(&self.bg, &overrides.bg),
			text: pick(&self.text, &overrides.text),
			bg_dark: pick(&self.bg_dark, &overrides.bg_dark),
			text_dark: pick(&self.text_dark, &overrides.text_dark),
		}
	}
}

/// Per-field presentation overrides supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderStyleOverrides {
	/// Replacement light logo.
	pub logo: Option<String>,
	/// Replacement dark logo.
	pub logo_dark: Option<String>,
	/// Replacement light background.
	pub bg: Option<String>,
	/// Replacement light text color.
	pub text: Option<String>,
	/// Replacement dark background.
	pub bg_dark: Option<String>,
	/// Replacement dark text color.
	pub text_dark: Option<String>,
}
