// self
use crate::_prelude::*;

/// Protocol engine responsible for a provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolKind {
	/// OpenID Connect; endpoints come from discovery against the issuer.
	#[default]
	Oidc,
	/// Plain OAuth 2.0 with statically configured endpoints.
	OAuth,
}
impl ProtocolKind {
	/// Returns the stable tag used in configuration files.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProtocolKind::Oidc => "oidc",
			ProtocolKind::OAuth => "oauth",
		}
	}

	/// Returns true when the engine locates endpoints through OIDC discovery.
	pub const fn uses_discovery(self) -> bool {
		matches!(self, ProtocolKind::Oidc)
	}
}
impl Display for ProtocolKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn tags_match_serde_names() {
		for kind in [ProtocolKind::Oidc, ProtocolKind::OAuth] {
			let json = serde_json::to_string(&kind).expect("Protocol kind should serialize.");

			assert_eq!(json, format!("\"{kind}\""));
		}

		assert!(ProtocolKind::Oidc.uses_discovery());
		assert!(!ProtocolKind::OAuth.uses_discovery());
	}
}
