// crates.io
use httpmock::prelude::*;
use serde_json::json;
use time::macros::datetime;
// self
use mpesa_sdk::{
	B2cPayment, ClientConfig, Environment, Error, IdentifierType, Reversal, StkPush,
	api::{B2cCommand, B2cPaymentRequest, ReversalRequest, StkPushQuery, StkPushRequest, TransactionType},
	auth::Secret,
	error::ValidationError,
	url::Url,
};

const PASSKEY: &str = "bfb279f9aa9bdbcf158e97dd71a467cd2e0c893059b10f78e6b72ada1ed2c919";
const PASSWORD: &str = "MTc0Mzc5YmZiMjc5ZjlhYTliZGJjZjE1OGU5N2RkNzFhNDY3Y2QyZTBjODkzMDU5YjEwZjc4ZTZiNzJhZGExZWQyYzkxOTIwMjQwMTE1MTIzMDAw";

fn config(server: &MockServer) -> ClientConfig {
	ClientConfig::new(Environment::Sandbox)
		.with_credentials("test_key", "test_secret")
		.with_base_url(Url::parse(&server.base_url()).expect("Mock base URL should parse."))
}

fn url(value: &str) -> Url {
	Url::parse(value).expect("Fixture URL should parse.")
}

fn uncredentialed_config(server: &MockServer) -> ClientConfig {
	ClientConfig::new(Environment::Sandbox)
		.with_base_url(Url::parse(&server.base_url()).expect("Mock base URL should parse."))
}

async fn mock_oauth(server: &MockServer) -> httpmock::Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/oauth/v1/generate")
				.query_param("grant_type", "client_credentials");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"mock_token\",\"expires_in\":3599}");
		})
		.await
}

fn accepted_body() -> String {
	json!({
		"OriginatorConversationID": "5118-111210482-1",
		"ConversationID": "AG_20240115_2010759fd5662ef6d054",
		"ResponseCode": "0",
		"ResponseDescription": "Accept the service request successfully."
	})
	.to_string()
}

fn b2c_request() -> B2cPaymentRequest {
	B2cPaymentRequest {
		initiator_name: "testapi".into(),
		security_credential: "cred".into(),
		command: B2cCommand::BusinessPayment,
		amount: 250,
		party_a: "600996".into(),
		party_b: "254708374149".into(),
		remarks: "Supplier refund".into(),
		queue_timeout_url: url("https://example.com/timeout"),
		result_url: url("https://example.com/result"),
		occasion: None,
	}
}

fn stk_push_request() -> StkPushRequest {
	StkPushRequest {
		business_short_code: "174379".into(),
		passkey: Secret::new(PASSKEY),
		transaction_type: TransactionType::CustomerPayBillOnline,
		amount: 1,
		party_a: "254708374149".into(),
		party_b: "174379".into(),
		phone_number: "254708374149".into(),
		callback_url: url("https://example.com/callback"),
		account_reference: "INV-001".into(),
		transaction_desc: "Invoice".into(),
		timestamp: Some(datetime!(2024-01-15 09:30:00 UTC)),
	}
}

fn assert_missing_credentials(err: Error) {
	assert!(matches!(err, Error::Validation(ValidationError::MissingCredentials)));
	assert_eq!(err.to_string(), "App key and app secret must be provided for authentication.");
}

fn reversal_request() -> ReversalRequest {
	ReversalRequest {
		initiator: "apiop".into(),
		security_credential: "cred".into(),
		transaction_id: "OEI2AK4Q16".into(),
		amount: 100,
		receiver_party: "600992".into(),
		receiver_identifier_type: IdentifierType::Organisation,
		remarks: "Wrong recipient".into(),
		result_url: url("https://example.com/result"),
		queue_timeout_url: url("https://example.com/timeout"),
		occasion: None,
	}
}

#[tokio::test]
async fn reverse_transaction_posts_reversal_payload() {
	let server = MockServer::start_async().await;
	let oauth = mock_oauth(&server).await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/mpesa/reversal/v1/request")
				.header("authorization", "Bearer mock_token")
				.json_body(json!({
					"Initiator": "apiop",
					"SecurityCredential": "cred",
					"CommandID": "TransactionReversal",
					"TransactionID": "OEI2AK4Q16",
					"Amount": 100,
					"ReceiverParty": "600992",
					"RecieverIdentifierType": "11",
					"ResultURL": "https://example.com/result",
					"QueueTimeOutURL": "https://example.com/timeout",
					"Remarks": "Wrong recipient"
				}));
			then.status(200).header("content-type", "application/json").body(accepted_body());
		})
		.await;
	let response = Reversal::from_config(config(&server))
		.reverse_transaction(&reversal_request())
		.await
		.expect("Reversal should be accepted.");

	assert_eq!(response.response_code(), Some("0"));
	assert_eq!(response.conversation_id(), Some("AG_20240115_2010759fd5662ef6d054"));

	oauth.assert_calls_async(1).await;
	endpoint.assert_calls_async(1).await;
}

#[tokio::test]
async fn reversal_client_gains_credentials_after_construction() {
	let server = MockServer::start_async().await;
	let oauth = mock_oauth(&server).await;
	let _endpoint = server
		.mock_async(|when, then| {
			when.method(POST).path("/mpesa/reversal/v1/request");
			then.status(200).header("content-type", "application/json").body(accepted_body());
		})
		.await;
	let bare = ClientConfig::new(Environment::Sandbox)
		.with_base_url(Url::parse(&server.base_url()).expect("Mock base URL should parse."));
	let reversal = Reversal::from_config(bare);
	let err = reversal
		.reverse_transaction(&reversal_request())
		.await
		.expect_err("Credentials are missing.");

	assert!(matches!(err, Error::Validation(ValidationError::MissingCredentials)));

	let reversal = reversal.with_credentials("test_key", "test_secret");

	reversal
		.reverse_transaction(&reversal_request())
		.await
		.expect("Reversal should succeed once credentials are set.");

	oauth.assert_calls_async(1).await;
}

#[tokio::test]
async fn send_payment_posts_b2c_payload() {
	let server = MockServer::start_async().await;
	let _oauth = mock_oauth(&server).await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/mpesa/b2c/v1/paymentrequest")
				.header("authorization", "Bearer mock_token")
				.json_body(json!({
					"InitiatorName": "testapi",
					"SecurityCredential": "cred",
					"CommandID": "BusinessPayment",
					"Amount": 250,
					"PartyA": "600996",
					"PartyB": "254708374149",
					"Remarks": "Supplier refund",
					"QueueTimeOutURL": "https://example.com/timeout",
					"ResultURL": "https://example.com/result"
				}));
			then.status(200).header("content-type", "application/json").body(accepted_body());
		})
		.await;
	let response = B2cPayment::from_config(config(&server))
		.send_payment(&b2c_request())
		.await
		.expect("B2C payment should be accepted.");

	assert_eq!(response.originator_conversation_id(), Some("5118-111210482-1"));

	endpoint.assert_calls_async(1).await;
}

#[tokio::test]
async fn stk_push_initiate_and_query_are_signed() {
	let server = MockServer::start_async().await;
	let oauth = mock_oauth(&server).await;
	let push = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/mpesa/stkpush/v1/processrequest")
				.header("authorization", "Bearer mock_token")
				.json_body(json!({
					"BusinessShortCode": "174379",
					"Password": PASSWORD,
					"Timestamp": "20240115123000",
					"TransactionType": "CustomerPayBillOnline",
					"Amount": 1,
					"PartyA": "254708374149",
					"PartyB": "174379",
					"PhoneNumber": "254708374149",
					"CallBackURL": "https://example.com/callback",
					"AccountReference": "INV-001",
					"TransactionDesc": "Invoice"
				}));
			then.status(200).header("content-type", "application/json").body(
				json!({
					"MerchantRequestID": "29115-34620561-1",
					"CheckoutRequestID": "ws_CO_15012024123000000",
					"ResponseCode": "0",
					"ResponseDescription": "Success. Request accepted for processing",
					"CustomerMessage": "Success. Request accepted for processing"
				})
				.to_string(),
			);
		})
		.await;
	let status = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/mpesa/stkpushquery/v1/query")
				.json_body(json!({
					"BusinessShortCode": "174379",
					"Password": PASSWORD,
					"Timestamp": "20240115123000",
					"CheckoutRequestID": "ws_CO_15012024123000000"
				}));
			then.status(200).header("content-type", "application/json").body(
				json!({
					"ResponseCode": "0",
					"ResponseDescription": "The service request has been accepted successsfully",
					"ResultCode": "1032",
					"ResultDesc": "Request cancelled by user"
				})
				.to_string(),
			);
		})
		.await;
	let client = StkPush::from_config(config(&server));
	let signed_at = datetime!(2024-01-15 09:30:00 UTC);
	let accepted = client.initiate(&stk_push_request()).await.expect("STK push should be accepted.");
	let checkout_request_id = accepted
		.get_str("CheckoutRequestID")
		.expect("Acknowledgement should carry a checkout id.")
		.to_owned();
	let query = StkPushQuery {
		business_short_code: "174379".into(),
		passkey: Secret::new(PASSKEY),
		checkout_request_id,
		timestamp: Some(signed_at),
	};
	let outcome = client.query(&query).await.expect("STK push query should succeed.");

	assert_eq!(outcome.get_str("ResultCode"), Some("1032"));
	assert_eq!(outcome.get_str("ResultDesc"), Some("Request cancelled by user"));

	oauth.assert_calls_async(2).await;
	push.assert_calls_async(1).await;
	status.assert_calls_async(1).await;
}

#[tokio::test]
async fn stk_push_surfaces_gateway_rejection() {
	let server = MockServer::start_async().await;
	let _oauth = mock_oauth(&server).await;
	let _push = server
		.mock_async(|when, then| {
			when.method(POST).path("/mpesa/stkpush/v1/processrequest");
			then.status(400).header("content-type", "application/json").body(
				"{\"requestId\":\"1\",\"errorCode\":\"400.002.02\",\"errorMessage\":\"Bad Request - Invalid PhoneNumber\"}",
			);
		})
		.await;
	let request = StkPushRequest {
		business_short_code: "174379".into(),
		passkey: Secret::new(PASSKEY),
		transaction_type: TransactionType::CustomerBuyGoodsOnline,
		amount: 1,
		party_a: "0700".into(),
		party_b: "174379".into(),
		phone_number: "0700".into(),
		callback_url: url("https://example.com/callback"),
		account_reference: "INV-002".into(),
		transaction_desc: "Invoice".into(),
		timestamp: None,
	};
	let err = StkPush::from_config(config(&server))
		.initiate(&request)
		.await
		.expect_err("Invalid phone number should be rejected.");

	assert_eq!(err.status(), Some(400));
	assert!(matches!(err, Error::HttpStatus(ref e) if e.body.contains("Invalid PhoneNumber")));
}

#[tokio::test]
async fn send_payment_without_credentials_never_touches_the_network() {
	let server = MockServer::start_async().await;
	let oauth = mock_oauth(&server).await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(POST).path("/mpesa/b2c/v1/paymentrequest");
			then.status(200).header("content-type", "application/json").body(accepted_body());
		})
		.await;
	let err = B2cPayment::from_config(uncredentialed_config(&server))
		.send_payment(&b2c_request())
		.await
		.expect_err("Credentials are missing.");

	assert_missing_credentials(err);

	oauth.assert_calls_async(0).await;
	endpoint.assert_calls_async(0).await;
}

#[tokio::test]
async fn stk_push_without_credentials_never_touches_the_network() {
	let server = MockServer::start_async().await;
	let oauth = mock_oauth(&server).await;
	let push = server
		.mock_async(|when, then| {
			when.method(POST).path("/mpesa/stkpush/v1/processrequest");
			then.status(200).header("content-type", "application/json").body(accepted_body());
		})
		.await;
	let status = server
		.mock_async(|when, then| {
			when.method(POST).path("/mpesa/stkpushquery/v1/query");
			then.status(200).header("content-type", "application/json").body(accepted_body());
		})
		.await;
	let client = StkPush::from_config(uncredentialed_config(&server));
	let err = client.initiate(&stk_push_request()).await.expect_err("Credentials are missing.");

	assert_missing_credentials(err);

	let query = StkPushQuery {
		business_short_code: "174379".into(),
		passkey: Secret::new(PASSKEY),
		checkout_request_id: "ws_CO_15012024123000000".into(),
		timestamp: None,
	};
	let err = client.query(&query).await.expect_err("Credentials are missing.");

	assert_missing_credentials(err);

	oauth.assert_calls_async(0).await;
	push.assert_calls_async(0).await;
	status.assert_calls_async(0).await;
}
