//! Strongly typed provider identifiers.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("Provider identifier cannot be empty.")]
	Empty,
	/// The identifier contains characters that cannot appear in a callback path segment.
	#[error("Provider identifier contains `{found}`; only ASCII letters, digits, `-`, and `_` are allowed.")]
	InvalidCharacter {
		/// First offending character.
		found: char,
	},
	/// The identifier exceeded the allowed character count.
	#[error("Provider identifier exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Identifier for a provider descriptor.
///
/// The identifier doubles as the last segment of the callback URL
/// (`{base}/callback/{id}`), so it is restricted to URL-safe ASCII.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId(String);
impl ProviderId {
	/// Creates a new identifier after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}

	/// Wraps a compile-time preset identifier.
	pub(crate) fn from_static(value: &'static str) -> Self {
		debug_assert!(validate_view(value).is_ok(), "Preset identifier `{value}` is invalid.");

		Self(value.to_owned())
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for ProviderId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ProviderId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for ProviderId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<ProviderId> for String {
	fn from(value: ProviderId) -> Self {
		value.0
	}
}
impl TryFrom<String> for ProviderId {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Debug for ProviderId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Provider({})", self.0)
	}
}
impl Display for ProviderId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for ProviderId {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty);
	}
	if let Some(found) = view.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
	{
		return Err(IdentifierError::InvalidCharacter { found });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	#[test]
	fn identifiers_validate_path_safety() {
		assert!(ProviderId::new(" huggingface").is_err(), "Leading whitespace must be rejected.");
		assert!(ProviderId::new("hugging/face").is_err(), "Slashes would break callback routing.");
		assert_eq!(
			ProviderId::new("hugging face"),
			Err(IdentifierError::InvalidCharacter { found: ' ' })
		);
		assert_eq!(ProviderId::new(""), Err(IdentifierError::Empty));

		let id = ProviderId::new("hugging-face_2").expect("URL-safe identifier should be valid.");

		assert_eq!(id.as_str(), "hugging-face_2");
		assert_eq!(format!("{id:?}"), "Provider(hugging-face_2)");
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let id: ProviderId = serde_json::from_str("\"huggingface\"")
			.expect("Provider identifier should deserialize successfully.");

		assert_eq!(id.as_ref(), "huggingface");
		assert!(serde_json::from_str::<ProviderId>("\"with space\"").is_err());
		assert_eq!(
			serde_json::to_string(&id).expect("Provider identifier should serialize."),
			"\"huggingface\""
		);
	}

	#[test]
	fn length_limits() {
		ProviderId::new("a".repeat(IDENTIFIER_MAX_LEN)).expect("Exact length should succeed.");

		assert_eq!(
			ProviderId::new("a".repeat(IDENTIFIER_MAX_LEN + 1)),
			Err(IdentifierError::TooLong { max: IDENTIFIER_MAX_LEN })
		);
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<ProviderId, u8> = HashMap::from_iter([(
			ProviderId::new("huggingface").expect("Provider used for lookup should be valid."),
			7_u8,
		)]);

		assert_eq!(map.get("huggingface"), Some(&7));
	}
}
