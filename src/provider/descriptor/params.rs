// self
use crate::{
	_prelude::*,
	auth::{ScopeSet, ScopeValidationError},
};

/// Query parameter carrying the requested scopes.
pub const SCOPE_PARAM: &str = "scope";

/// Extra query parameters merged into the authorization request.
///
/// Requested scopes live under [`SCOPE_PARAM`] as a single space-delimited string, the same form
/// they take on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationParams(BTreeMap<String, String>);
impl AuthorizationParams {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the parameters with `scope` set to the provided value.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.insert(SCOPE_PARAM, scope);

		self
	}

	/// Inserts or replaces a parameter.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), value.into());
	}

	/// Looks up a parameter.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Raw `scope` value, if any.
	pub fn scope(&self) -> Option<&str> {
		self.get(SCOPE_PARAM)
	}

	/// Parses the `scope` value into a normalized set; a missing value yields an empty set.
	pub fn scopes(&self) -> Result<ScopeSet, ScopeValidationError> {
		self.scope().map(ScopeSet::from_str).transpose().map(Option::unwrap_or_default)
	}

	/// Iterates parameters in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no parameters are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns a copy where each key in `overrides` replaces the default; other keys are kept.
	pub fn merged(&self, overrides: &BTreeMap<String, String>) -> Self {
		let mut merged = self.0.clone();

		merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));

		Self(merged)
	}

	/// Appends every parameter to the query string of `url`.
	pub fn append_to(&self, url: &mut Url) {
		if self.is_empty() {
			return;
		}

		url.query_pairs_mut().extend_pairs(self.iter());
	}
}
impl<K, V> FromIterator<(K, V)> for AuthorizationParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
