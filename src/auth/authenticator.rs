//! Client-credentials exchange against the gateway OAuth endpoint.

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	config::{self, ClientConfig, Credentials, Environment},
	error::{ConfigError, TransportError},
	http::{self, ReqwestHttpClient},
	obs::{self, OperationKind, OperationSpan},
};

/// Path of the OAuth token endpoint, relative to the gateway base URL.
pub const OAUTH_PATH: &str = "/oauth/v1/generate";

/// Exchanges an app key/secret pair for a bearer token.
///
/// The authenticator is stateless: every call performs a fresh exchange and nothing is
/// cached between calls.
#[derive(Clone, Debug, Default)]
pub struct Authenticator {
	http_client: Arc<ReqwestHttpClient>,
}
impl Authenticator {
	/// Creates an authenticator backed by a default reqwest client.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an authenticator that reuses the caller-provided transport.
	pub fn with_http_client(http_client: impl Into<Arc<ReqwestHttpClient>>) -> Self {
		Self { http_client: http_client.into() }
	}

	/// Authenticates against the host selected by `environment`.
	pub async fn authenticate(
		&self,
		environment: Environment,
		credentials: Credentials<'_>,
	) -> Result<AccessToken> {
		let base_url = Url::parse(environment.base_url()).map_err(ConfigError::from)?;

		self.authenticate_at(&base_url, credentials).await
	}

	/// Authenticates using the environment, base URL override, and credentials in `config`.
	///
	/// Fails with [`crate::error::ValidationError::MissingCredentials`] before any request
	/// when the key or secret is absent.
	pub async fn authenticate_with(&self, config: &ClientConfig) -> Result<AccessToken> {
		let credentials = config.credentials()?;
		let base_url = config.base_url()?;

		self.authenticate_at(&base_url, credentials).await
	}

	/// Authenticates against an explicit gateway base URL.
	pub async fn authenticate_at(
		&self,
		base_url: &Url,
		credentials: Credentials<'_>,
	) -> Result<AccessToken> {
		const KIND: OperationKind = OperationKind::Authenticate;

		let span = OperationSpan::new(KIND, OAUTH_PATH);

		obs::record_attempt(KIND);

		let result = span
			.instrument(async move {
				let url = config::join_endpoint(base_url, OAUTH_PATH)?;
				let response = self
					.http_client
					.get(url)
					.query(&[("grant_type", "client_credentials")])
					.basic_auth(credentials.app_key, Some(credentials.app_secret.expose()))
					.send()
					.await
					.map_err(TransportError::from)?;

				http::read_json::<AccessToken>(response).await
			})
			.await;

		obs::record_result(KIND, &result);

		result
	}
}
