//! Business-to-customer payment (`POST /mpesa/b2c/v1/paymentrequest`).

// self
use crate::{_prelude::*, api::ApiResponse, obs::OperationKind};

/// Endpoint path of the B2C payment request.
pub const B2C_PAYMENT_PATH: &str = "/mpesa/b2c/v1/paymentrequest";

def_operation_client! { B2cPayment, "Client for business-to-customer payments." }
impl B2cPayment {
	/// Sends `request.amount` from the organisation short code to a customer's MSISDN.
	/// The final result is delivered to `request.result_url`.
	pub async fn send_payment(&self, request: &B2cPaymentRequest) -> Result<ApiResponse> {
		let credentials = self.client.config().credentials()?;

		self.client
			.post(
				OperationKind::B2cPayment,
				B2C_PAYMENT_PATH,
				credentials,
				&B2cPaymentPayload::from(request),
			)
			.await
	}
}

/// `CommandID` values accepted by the B2C endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum B2cCommand {
	/// Salary disbursement; allowed for registered and unregistered customers.
	SalaryPayment,
	/// Ordinary business payment to a registered customer.
	#[default]
	BusinessPayment,
	/// Promotional payment to a registered customer.
	PromotionPayment,
}

/// Business parameters of a B2C payment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct B2cPaymentRequest {
	/// API operator username.
	pub initiator_name: String,
	/// Encrypted initiator password.
	pub security_credential: String,
	/// Payment kind.
	pub command: B2cCommand,
	/// Amount in whole shillings.
	pub amount: u64,
	/// Paying organisation short code.
	pub party_a: String,
	/// Receiving customer MSISDN.
	pub party_b: String,
	/// Free-form remarks.
	pub remarks: String,
	/// Callback invoked when the request times out in the gateway queue.
	pub queue_timeout_url: Url,
	/// Callback receiving the payment result.
	pub result_url: Url,
	/// Optional free-form occasion.
	pub occasion: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct B2cPaymentPayload<'a> {
	initiator_name: &'a str,
	security_credential: &'a str,
	#[serde(rename = "CommandID")]
	command_id: B2cCommand,
	amount: u64,
	party_a: &'a str,
	party_b: &'a str,
	remarks: &'a str,
	#[serde(rename = "QueueTimeOutURL")]
	queue_timeout_url: &'a Url,
	#[serde(rename = "ResultURL")]
	result_url: &'a Url,
	// Gateway spelling.
	#[serde(rename = "Occassion", skip_serializing_if = "Option::is_none")]
	occasion: Option<&'a str>,
}
impl<'a> From<&'a B2cPaymentRequest> for B2cPaymentPayload<'a> {
	fn from(request: &'a B2cPaymentRequest) -> Self {
		Self {
			initiator_name: &request.initiator_name,
			security_credential: &request.security_credential,
			command_id: request.command,
			amount: request.amount,
			party_a: &request.party_a,
			party_b: &request.party_b,
			remarks: &request.remarks,
			queue_timeout_url: &request.queue_timeout_url,
			result_url: &request.result_url,
			occasion: request.occasion.as_deref(),
		}
	}
}
