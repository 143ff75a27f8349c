//! Demonstrates the account balance query against a local mock gateway, including the
//! deferred credential check on a client built without credentials.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use mpesa_sdk::{
	Balance, ClientConfig, Environment, IdentifierType, api::BalanceQuery, url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let oauth_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/v1/generate");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"demo-access\",\"expires_in\":\"3599\"}");
		})
		.await;
	let balance_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/mpesa/accountbalance/v1/query");
			then.status(200).header("content-type", "application/json").body(
				"{\"OriginatorConversationID\":\"515-5258779-3\",\"ConversationID\":\"AG_20240115_00004e48cf7e3533f581\",\"ResponseCode\":\"0\",\"ResponseDescription\":\"Accept the service request successfully.\"}",
			);
		})
		.await;
	let query = BalanceQuery {
		initiator: "testapi".into(),
		security_credential: "encrypted-initiator-password".into(),
		party_a: "600000".into(),
		identifier_type: IdentifierType::ShortCode,
		remarks: "Daily reconciliation".into(),
		queue_timeout_url: Url::parse("https://merchant.example.com/mpesa/timeout")?,
		result_url: Url::parse("https://merchant.example.com/mpesa/result")?,
	};

	if let Err(e) = Balance::new(Environment::Sandbox).get_balance(&query).await {
		println!("Client without credentials: {e}");
	}

	let config = ClientConfig::new(Environment::Sandbox)
		.with_credentials("demo-key", "demo-secret")
		.with_base_url(Url::parse(&server.base_url())?);
	let response = Balance::from_config(config).get_balance(&query).await?;

	println!(
		"Balance query accepted: code={:?}, conversation={:?}.",
		response.response_code(),
		response.conversation_id()
	);

	oauth_mock.assert_async().await;
	balance_mock.assert_async().await;

	Ok(())
}
