//! Bearer tokens issued by the OAuth endpoint.

// crates.io
use serde::{Deserializer, de::Error as _};
// self
use crate::{_prelude::*, auth::Secret};

/// Bearer token returned by `GET /oauth/v1/generate?grant_type=client_credentials`.
///
/// Tokens are scoped to a single operation call and never cached.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
	/// Token presented as `Authorization: Bearer <token>`; callers must avoid logging it.
	pub access_token: Secret,
	/// Lifetime reported by the gateway.
	#[serde(deserialize_with = "deserialize_expires_in")]
	pub expires_in: Duration,
}
impl AccessToken {
	/// Returns the `Authorization` header value for this token.
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.access_token.expose())
	}
}

// The live gateway encodes `expires_in` as a string ("3599"); accept either form.
fn deserialize_expires_in<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Number(i64),
		Text(String),
	}

	let secs = match Raw::deserialize(deserializer)? {
		Raw::Number(secs) => secs,
		Raw::Text(text) => text.trim().parse::<i64>().map_err(D::Error::custom)?,
	};

	if secs <= 0 {
		return Err(D::Error::custom("expires_in must be positive"));
	}

	Ok(Duration::seconds(secs))
}
