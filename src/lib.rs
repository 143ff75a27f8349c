//! Async client for the M-Pesa Daraja gateway: OAuth client-credentials authentication plus
//! typed account balance, transaction status, reversal, B2C payment, and STK push operations.
//!
//! Every operation client holds an immutable [`config::ClientConfig`] and validates that an
//! app key and secret are present when an operation is invoked, not when the client is
//! built. Each call authenticates afresh, POSTs the operation payload with the bearer token,
//! and returns the gateway's JSON body unmodified as an [`api::ApiResponse`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test`
	//! crate feature.

	pub use crate::{_prelude::*, error::Error};

	// self
	use crate::{
		config::{ClientConfig, Environment},
		http::ReqwestHttpClient,
	};

	/// App key used by test fixtures.
	pub const TEST_APP_KEY: &str = "test_key";
	/// App secret used by test fixtures.
	pub const TEST_APP_SECRET: &str = "test_secret";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Sandbox configuration with fixture credentials, pointed at `base_url`.
	pub fn test_config(base_url: &str) -> ClientConfig {
		ClientConfig::new(Environment::Sandbox)
			.with_credentials(TEST_APP_KEY, TEST_APP_SECRET)
			.with_base_url(Url::parse(base_url).expect("Mock server base URL should parse."))
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		str::FromStr,
		sync::Arc,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::Result;
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};

pub use crate::{
	api::{
		ApiResponse, B2cPayment, Balance, IdentifierType, Reversal, StkPush, TransactionStatus,
	},
	auth::{AccessToken, Authenticator},
	config::{ClientConfig, Environment},
	error::{Error, Result},
};
