//! Client configuration: environment selection, app credentials, and endpoint resolution.
//!
//! A [`ClientConfig`] never validates credentials when it is built. Operation clients call
//! [`ClientConfig::credentials`] at the start of every operation so that a client created
//! without credentials fails on use, before any request leaves the process.

pub mod environment;

pub use environment::*;

// self
use crate::{
	_prelude::*,
	auth::Secret,
	error::{ConfigError, ValidationError},
};

/// Environment variable holding the deployment target.
pub const ENV_ENVIRONMENT: &str = "MPESA_ENVIRONMENT";
/// Environment variable holding the app (consumer) key.
pub const ENV_APP_KEY: &str = "MPESA_APP_KEY";
/// Environment variable holding the app (consumer) secret.
pub const ENV_APP_SECRET: &str = "MPESA_APP_SECRET";
/// Environment variable overriding the gateway base URL.
pub const ENV_BASE_URL: &str = "MPESA_BASE_URL";

/// Immutable settings shared by the authenticator and every operation client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
	/// Deployment target selecting the gateway host.
	pub environment: Environment,
	/// App key issued by the gateway portal.
	pub app_key: Option<String>,
	/// App secret issued by the gateway portal.
	pub app_secret: Option<Secret>,
	/// Explicit base URL that replaces the environment host (proxies, mock servers).
	pub base_url: Option<Url>,
}
impl ClientConfig {
	/// Creates a configuration without credentials.
	pub fn new(environment: Environment) -> Self {
		Self { environment, app_key: None, app_secret: None, base_url: None }
	}

	/// Loads settings from the process environment.
	///
	/// `MPESA_ENVIRONMENT` is required; `MPESA_APP_KEY`, `MPESA_APP_SECRET`, and
	/// `MPESA_BASE_URL` are optional.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Loads settings through `lookup`, which maps a variable name to its value.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let environment = lookup(ENV_ENVIRONMENT)
			.ok_or(ConfigError::MissingVariable(ENV_ENVIRONMENT))?
			.parse::<Environment>()?;
		let mut config = Self::new(environment);

		config.app_key = lookup(ENV_APP_KEY).filter(|value| !value.is_empty());
		config.app_secret =
			lookup(ENV_APP_SECRET).filter(|value| !value.is_empty()).map(Secret::new);

		if let Some(raw) = lookup(ENV_BASE_URL).filter(|value| !value.is_empty()) {
			config.base_url = Some(Url::parse(&raw)?);
		}

		Ok(config)
	}

	/// Sets the app key.
	pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
		self.app_key = Some(app_key.into());

		self
	}

	/// Sets the app secret.
	pub fn with_app_secret(mut self, app_secret: impl Into<String>) -> Self {
		self.app_secret = Some(Secret::new(app_secret));

		self
	}

	/// Sets both halves of the credential pair.
	pub fn with_credentials(
		self,
		app_key: impl Into<String>,
		app_secret: impl Into<String>,
	) -> Self {
		self.with_app_key(app_key).with_app_secret(app_secret)
	}

	/// Overrides the gateway host chosen by [`Environment`].
	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = Some(base_url);

		self
	}

	/// Returns the validated credential pair or the fixed missing-credentials error.
	///
	/// An empty key or secret counts as absent, matching [`ClientConfig::from_lookup`].
	pub fn credentials(&self) -> Result<Credentials<'_>, ValidationError> {
		match (
			self.app_key.as_deref().filter(|app_key| !app_key.is_empty()),
			self.app_secret.as_ref().filter(|app_secret| !app_secret.is_empty()),
		) {
			(Some(app_key), Some(app_secret)) => Ok(Credentials { app_key, app_secret }),
			_ => Err(ValidationError::MissingCredentials),
		}
	}

	/// Resolves the base URL: the explicit override, or the environment host.
	pub fn base_url(&self) -> Result<Url, ConfigError> {
		match &self.base_url {
			Some(url) => Ok(url.clone()),
			None => Ok(Url::parse(self.environment.base_url())?),
		}
	}

	/// Resolves an absolute endpoint URL for `path` (e.g. `/mpesa/reversal/v1/request`).
	///
	/// Any path prefix on the base URL is kept: `https://proxy/daraja` resolves
	/// `/oauth/v1/generate` to `https://proxy/daraja/oauth/v1/generate`.
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		join_endpoint(&self.base_url()?, path)
	}
}

/// Appends `path` below `base`, keeping the base path as a prefix.
pub(crate) fn join_endpoint(base: &Url, path: &str) -> Result<Url, ConfigError> {
	let mut base = base.clone();

	if !base.path().ends_with('/') {
		let prefix = format!("{}/", base.path());

		base.set_path(&prefix);
	}

	Ok(base.join(path.trim_start_matches('/'))?)
}

/// Borrowed app key + secret pair that passed the presence check.
#[derive(Clone, Copy, Debug)]
pub struct Credentials<'a> {
	/// App key.
	pub app_key: &'a str,
	/// App secret; callers must avoid logging it.
	pub app_secret: &'a Secret,
}
