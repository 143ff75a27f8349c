//! Lipa Na M-Pesa Online: STK push initiation (`POST /mpesa/stkpush/v1/processrequest`) and
//! status query (`POST /mpesa/stkpushquery/v1/query`).
//!
//! Both requests are signed with `base64(short_code + passkey + timestamp)`, where the
//! timestamp is `YYYYMMDDHHmmss` in East Africa Time.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use time::macros::{format_description, offset};
// self
use crate::{
	_prelude::*,
	api::ApiResponse,
	auth::Secret,
	error::ConfigError,
	obs::OperationKind,
};

/// Endpoint path of the STK push initiation.
pub const STK_PUSH_PATH: &str = "/mpesa/stkpush/v1/processrequest";
/// Endpoint path of the STK push status query.
pub const STK_PUSH_QUERY_PATH: &str = "/mpesa/stkpushquery/v1/query";

def_operation_client! { StkPush, "Client for Lipa Na M-Pesa Online (STK push) payments." }
impl StkPush {
	/// Prompts the customer's handset to authorize a payment. The final result is delivered
	/// to `request.callback_url`.
	pub async fn initiate(&self, request: &StkPushRequest) -> Result<ApiResponse> {
		let credentials = self.client.config().credentials()?;
		let payload = StkPushPayload::new(request, OffsetDateTime::now_utc())?;

		self.client.post(OperationKind::StkPush, STK_PUSH_PATH, credentials, &payload).await
	}

	/// Queries the state of a previously initiated STK push.
	pub async fn query(&self, query: &StkPushQuery) -> Result<ApiResponse> {
		let credentials = self.client.config().credentials()?;
		let payload = StkPushQueryPayload::new(query, OffsetDateTime::now_utc())?;

		self.client
			.post(OperationKind::StkPushQuery, STK_PUSH_QUERY_PATH, credentials, &payload)
			.await
	}
}

/// `TransactionType` values accepted by the STK push endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionType {
	/// Payment to a paybill number.
	#[default]
	CustomerPayBillOnline,
	/// Payment to a Buy Goods till number.
	CustomerBuyGoodsOnline,
}

/// Business parameters of an STK push.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StkPushRequest {
	/// Organisation short code used to sign the request.
	pub business_short_code: String,
	/// Lipa Na M-Pesa Online passkey issued with the short code.
	pub passkey: Secret,
	/// Paybill or Buy Goods.
	pub transaction_type: TransactionType,
	/// Amount in whole shillings.
	pub amount: u64,
	/// Paying customer MSISDN.
	pub party_a: String,
	/// Receiving short code or till number.
	pub party_b: String,
	/// MSISDN that receives the prompt.
	pub phone_number: String,
	/// Callback receiving the payment result.
	pub callback_url: Url,
	/// Account reference shown to the customer.
	pub account_reference: String,
	/// Short description shown to the customer.
	pub transaction_desc: String,
	/// Fixed signing instant; `None` signs with the current time.
	pub timestamp: Option<OffsetDateTime>,
}

/// Business parameters of an STK push status query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StkPushQuery {
	/// Organisation short code used to sign the request.
	pub business_short_code: String,
	/// Lipa Na M-Pesa Online passkey issued with the short code.
	pub passkey: Secret,
	/// `CheckoutRequestID` returned by [`StkPush::initiate`].
	pub checkout_request_id: String,
	/// Fixed signing instant; `None` signs with the current time.
	pub timestamp: Option<OffsetDateTime>,
}

/// Renders `moment` as the gateway's `YYYYMMDDHHmmss` timestamp in East Africa Time.
pub fn format_timestamp(moment: OffsetDateTime) -> Result<String, ConfigError> {
	Ok(moment
		.to_offset(offset!(+3))
		.format(format_description!("[year][month][day][hour][minute][second]"))?)
}

/// Computes the request password: `base64(short_code + passkey + timestamp)`.
pub fn password(short_code: &str, passkey: &Secret, timestamp: &str) -> String {
	STANDARD.encode(format!("{short_code}{}{timestamp}", passkey.expose()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct StkPushPayload<'a> {
	business_short_code: &'a str,
	password: String,
	timestamp: String,
	transaction_type: TransactionType,
	amount: u64,
	party_a: &'a str,
	party_b: &'a str,
	phone_number: &'a str,
	#[serde(rename = "CallBackURL")]
	callback_url: &'a Url,
	account_reference: &'a str,
	transaction_desc: &'a str,
}
impl<'a> StkPushPayload<'a> {
	fn new(request: &'a StkPushRequest, now: OffsetDateTime) -> Result<Self, ConfigError> {
		let timestamp = format_timestamp(request.timestamp.unwrap_or(now))?;

		Ok(Self {
			business_short_code: &request.business_short_code,
			password: password(&request.business_short_code, &request.passkey, &timestamp),
			timestamp,
			transaction_type: request.transaction_type,
			amount: request.amount,
			party_a: &request.party_a,
			party_b: &request.party_b,
			phone_number: &request.phone_number,
			callback_url: &request.callback_url,
			account_reference: &request.account_reference,
			transaction_desc: &request.transaction_desc,
		})
	}
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct StkPushQueryPayload<'a> {
	business_short_code: &'a str,
	password: String,
	timestamp: String,
	#[serde(rename = "CheckoutRequestID")]
	checkout_request_id: &'a str,
}
impl<'a> StkPushQueryPayload<'a> {
	fn new(query: &'a StkPushQuery, now: OffsetDateTime) -> Result<Self, ConfigError> {
		let timestamp = format_timestamp(query.timestamp.unwrap_or(now))?;

		Ok(Self {
			business_short_code: &query.business_short_code,
			password: password(&query.business_short_code, &query.passkey, &timestamp),
			timestamp,
			checkout_request_id: &query.checkout_request_id,
		})
	}
}
