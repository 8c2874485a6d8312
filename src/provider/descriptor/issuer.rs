// crates.io
use url::Host;
// self
use crate::_prelude::*;

const DISCOVERY_PATH: &str = ".well-known/openid-configuration";

/// Errors raised while validating an issuer identifier.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IssuerError {
	/// The issuer is not an absolute URL.
	#[error("Issuer `{issuer}` is not a valid URL.")]
	Invalid {
		/// Issuer string that failed to parse.
		issuer: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The issuer uses a scheme other than `http` or `https`.
	#[error("Issuer `{issuer}` must use http or https.")]
	UnsupportedScheme {
		/// Offending issuer string.
		issuer: String,
	},
	/// OIDC issuers must not carry query or fragment components.
	#[error("Issuer `{issuer}` must not contain a query or fragment.")]
	QueryOrFragment {
		/// Offending issuer string.
		issuer: String,
	},
}

/// OpenID Connect issuer identifier.
///
/// The string is kept verbatim: `iss` claims are compared byte-for-byte, so no trailing slash is
/// added or removed.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Issuer(String);
impl Issuer {
	/// Creates a validated issuer identifier.
	pub fn new(value: impl Into<String>) -> Result<Self, IssuerError> {
		let value = value.into();

		parse(&value)?;

		Ok(Self(value))
	}

	/// Wraps a compile-time preset issuer.
	pub(crate) fn from_static(value: &'static str) -> Self {
		debug_assert!(parse(value).is_ok(), "Preset issuer `{value}` is invalid.");

		Self(value.to_owned())
	}

	/// Returns the issuer exactly as configured.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Parses the issuer into a [`Url`].
	pub fn url(&self) -> Result<Url, IssuerError> {
		parse(&self.0)
	}

	/// Returns true when the issuer uses HTTPS.
	pub fn is_https(&self) -> bool {
		self.url().map(|url| url.scheme() == "https").unwrap_or(false)
	}

	/// Returns true when the issuer points at the local machine (`localhost` or a loopback IP).
	pub fn is_loopback(&self) -> bool {
		let Ok(url) = self.url() else {
			return false;
		};

		match url.host() {
			Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
			Some(Host::Ipv4(ip)) => ip.is_loopback(),
			Some(Host::Ipv6(ip)) => ip.is_loopback(),
			None => false,
		}
	}

	/// Builds the OIDC discovery document location for this issuer.
	pub fn discovery_url(&self) -> Result<Url, IssuerError> {
		let raw = format!("{}/{DISCOVERY_PATH}", self.0.trim_end_matches('/'));

		parse(&raw)
	}
}
impl Debug for Issuer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Issuer({})", self.0)
	}
}
impl Display for Issuer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl From<Issuer> for String {
	fn from(value: Issuer) -> Self {
		value.0
	}
}
impl TryFrom<String> for Issuer {
	type Error = IssuerError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for Issuer {
	type Err = IssuerError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn parse(raw: &str) -> Result<Url, IssuerError> {
	let url = Url::parse(raw)
		.map_err(|source| IssuerError::Invalid { issuer: raw.to_owned(), source })?;

	if !matches!(url.scheme(), "http" | "https") {
		return Err(IssuerError::UnsupportedScheme { issuer: raw.to_owned() });
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(IssuerError::QueryOrFragment { issuer: raw.to_owned() });
	}

	Ok(url)
}
