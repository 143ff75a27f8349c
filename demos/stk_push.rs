//! Demonstrates signing and sending an STK push, then polling its status, against a local
//! mock gateway.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use mpesa_sdk::{
	ClientConfig, Environment, StkPush,
	api::{StkPushQuery, StkPushRequest, TransactionType},
	auth::Secret,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let _oauth_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/v1/generate");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"demo-access\",\"expires_in\":\"3599\"}");
		})
		.await;
	let _push_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/mpesa/stkpush/v1/processrequest");
			then.status(200).header("content-type", "application/json").body(
				"{\"MerchantRequestID\":\"29115-34620561-1\",\"CheckoutRequestID\":\"ws_CO_191220191020363925\",\"ResponseCode\":\"0\",\"ResponseDescription\":\"Success. Request accepted for processing\",\"CustomerMessage\":\"Success. Request accepted for processing\"}",
			);
		})
		.await;
	let _query_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/mpesa/stkpushquery/v1/query");
			then.status(200).header("content-type", "application/json").body(
				"{\"ResponseCode\":\"0\",\"ResponseDescription\":\"The service request has been accepted successsfully\",\"ResultCode\":\"0\",\"ResultDesc\":\"The service request is processed successfully.\"}",
			);
		})
		.await;
	let passkey = Secret::new("bfb279f9aa9bdbcf158e97dd71a467cd2e0c893059b10f78e6b72ada1ed2c919");
	let client = StkPush::from_config(
		ClientConfig::new(Environment::Sandbox)
			.with_credentials("demo-key", "demo-secret")
			.with_base_url(Url::parse(&server.base_url())?),
	);
	let accepted = client
		.initiate(&StkPushRequest {
			business_short_code: "174379".into(),
			passkey: passkey.clone(),
			transaction_type: TransactionType::CustomerPayBillOnline,
			amount: 1,
			party_a: "254708374149".into(),
			party_b: "174379".into(),
			phone_number: "254708374149".into(),
			callback_url: Url::parse("https://merchant.example.com/mpesa/callback")?,
			account_reference: "INV-001".into(),
			transaction_desc: "Invoice payment".into(),
			timestamp: None,
		})
		.await?;
	let checkout_request_id = accepted.get_str("CheckoutRequestID").unwrap_or_default().to_owned();

	println!("Prompt sent: {}.", accepted.get_str("CustomerMessage").unwrap_or_default());

	let outcome = client
		.query(&StkPushQuery {
			business_short_code: "174379".into(),
			passkey,
			checkout_request_id,
			timestamp: None,
		})
		.await?;

	println!("Payment result: {}.", outcome.get_str("ResultDesc").unwrap_or_default());

	Ok(())
}
