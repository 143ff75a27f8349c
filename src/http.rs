//! Transport primitives shared by the authenticator and operation clients.
//!
//! [`ReqwestHttpClient`] is the only HTTP dependency of the crate. Callers may inject a
//! preconfigured [`ReqwestClient`] (timeouts, proxies, custom roots) through
//! [`ReqwestHttpClient::with_client`]; otherwise a default client is used.

// std
use std::ops::Deref;
// crates.io
use reqwest::{
	Response,
	header::{HeaderMap, RETRY_AFTER},
};
use serde::de::DeserializeOwned;
use time::format_description::well_known::Rfc2822;
// self
use crate::{
	_prelude::*,
	error::{DecodeError, HttpStatusError, TransportError},
};

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl From<ReqwestClient> for ReqwestHttpClient {
	fn from(client: ReqwestClient) -> Self {
		Self::with_client(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Consumes a gateway response: non-2xx becomes [`HttpStatusError`], 2xx bodies are decoded
/// as JSON into `T`.
pub(crate) async fn read_json<T>(response: Response) -> Result<T>
where
	T: DeserializeOwned,
{
	let status = response.status();
	let url = response.url().to_owned();
	let retry_after = parse_retry_after(response.headers());
	let body = response.bytes().await.map_err(TransportError::from)?;

	if !status.is_success() {
		return Err(HttpStatusError {
			status: status.as_u16(),
			body: String::from_utf8_lossy(&body).into_owned(),
			url,
			retry_after,
		}
		.into());
	}

	decode_json(status.as_u16(), &body)
}

pub(crate) fn decode_json<T>(status: u16, body: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);
	let value = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| DecodeError { source, status })?;

	Ok(value)
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
