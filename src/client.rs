//! Shared request pipeline behind every operation client.
//!
//! [`ApiClient`] owns the immutable [`ClientConfig`] and the HTTP transport. Each call to
//! [`ApiClient::post`] authenticates afresh, sends the payload with the bearer token, and
//! hands back the decoded JSON body. Nothing is cached between calls.

// crates.io
use reqwest::header::AUTHORIZATION;
// self
use crate::{
	_prelude::*,
	api::ApiResponse,
	auth::Authenticator,
	config::{ClientConfig, Credentials},
	error::TransportError,
	http::{self, ReqwestHttpClient},
	obs::{self, OperationKind, OperationSpan},
};

/// Configuration plus transport shared by the typed operation clients.
#[derive(Clone, Debug)]
pub struct ApiClient {
	config: ClientConfig,
	http_client: Arc<ReqwestHttpClient>,
	authenticator: Authenticator,
}
impl ApiClient {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(config: ClientConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}

	/// Creates a client that reuses the caller-provided transport for both the OAuth and
	/// operation endpoints.
	pub fn with_http_client(
		config: ClientConfig,
		http_client: impl Into<Arc<ReqwestHttpClient>>,
	) -> Self {
		let http_client = http_client.into();
		let authenticator = Authenticator::with_http_client(http_client.clone());

		Self { config, http_client, authenticator }
	}

	/// Replaces the configuration while keeping the transport.
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = config;

		self
	}

	/// Returns the configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Authenticates, then POSTs `payload` as JSON to `path` under the configured base URL.
	///
	/// Taking [`Credentials`] forces callers to run [`ClientConfig::credentials`] first, so a
	/// client without credentials fails before any request is sent.
	pub async fn post<P>(
		&self,
		kind: OperationKind,
		path: &str,
		credentials: Credentials<'_>,
		payload: &P,
	) -> Result<ApiResponse>
	where
		P: ?Sized + Serialize,
	{
		let span = OperationSpan::new(kind, path);

		obs::record_attempt(kind);

		let result = span
			.instrument(async move {
				let base_url = self.config.base_url()?;
				let token = self.authenticator.authenticate_at(&base_url, credentials).await?;
				let url = self.config.endpoint(path)?;
				let response = self
					.http_client
					.post(url)
					.header(AUTHORIZATION, token.bearer())
					.json(payload)
					.send()
					.await
					.map_err(TransportError::from)?;

				http::read_json::<ApiResponse>(response).await
			})
			.await;

		obs::record_result(kind, &result);

		result
	}
}
