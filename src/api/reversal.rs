//! Transaction reversal (`POST /mpesa/reversal/v1/request`).

// self
use crate::{
	_prelude::*,
	api::{ApiResponse, CommandId, IdentifierType},
	obs::OperationKind,
};

/// Endpoint path of the reversal request.
pub const REVERSAL_PATH: &str = "/mpesa/reversal/v1/request";

def_operation_client! { Reversal, "Client for reversing a completed transaction." }
impl Reversal {
	/// Requests the reversal of `request.transaction_id`. The outcome is delivered to
	/// `request.result_url`.
	pub async fn reverse_transaction(&self, request: &ReversalRequest) -> Result<ApiResponse> {
		let credentials = self.client.config().credentials()?;

		self.client
			.post(
				OperationKind::Reversal,
				REVERSAL_PATH,
				credentials,
				&ReversalPayload::from(request),
			)
			.await
	}
}

/// Business parameters of a reversal request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReversalRequest {
	/// API operator username.
	pub initiator: String,
	/// Encrypted initiator password.
	pub security_credential: String,
	/// Gateway receipt number of the transaction to reverse.
	pub transaction_id: String,
	/// Amount to reverse, in whole shillings.
	pub amount: u64,
	/// Organisation that received the original payment.
	pub receiver_party: String,
	/// Kind of identifier in `receiver_party`.
	pub receiver_identifier_type: IdentifierType,
	/// Free-form remarks.
	pub remarks: String,
	/// Callback receiving the reversal result.
	pub result_url: Url,
	/// Callback invoked when the request times out in the gateway queue.
	pub queue_timeout_url: Url,
	/// Optional free-form occasion.
	pub occasion: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ReversalPayload<'a> {
	initiator: &'a str,
	security_credential: &'a str,
	#[serde(rename = "CommandID")]
	command_id: CommandId,
	#[serde(rename = "TransactionID")]
	transaction_id: &'a str,
	amount: u64,
	receiver_party: &'a str,
	// Gateway spelling.
	#[serde(rename = "RecieverIdentifierType")]
	receiver_identifier_type: IdentifierType,
	#[serde(rename = "ResultURL")]
	result_url: &'a Url,
	#[serde(rename = "QueueTimeOutURL")]
	queue_timeout_url: &'a Url,
	remarks: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	occasion: Option<&'a str>,
}
impl<'a> From<&'a ReversalRequest> for ReversalPayload<'a> {
	fn from(request: &'a ReversalRequest) -> Self {
		Self {
			initiator: &request.initiator,
			security_credential: &request.security_credential,
			command_id: CommandId::TransactionReversal,
			transaction_id: &request.transaction_id,
			amount: request.amount,
			receiver_party: &request.receiver_party,
			receiver_identifier_type: request.receiver_identifier_type,
			result_url: &request.result_url,
			queue_timeout_url: &request.queue_timeout_url,
			remarks: &request.remarks,
			occasion: request.occasion.as_deref(),
		}
	}
}
