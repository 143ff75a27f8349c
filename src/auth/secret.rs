//! Credential material that must never reach logs.

// self
use crate::_prelude::*;

/// App secrets, STK passkeys, and bearer tokens.
///
/// `Debug` prints a placeholder, so configs and tokens holding a `Secret` can be logged
/// with `{:?}`. There is no `Display` impl; reading the value requires [`Secret::expose`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);
impl Secret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw value for signing or request headers.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Whether the wrapped value is the empty string.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("Secret(<redacted>)")
	}
}
