//! Transaction status query (`POST /mpesa/transactionstatus/v1/query`).

// self
use crate::{
	_prelude::*,
	api::{ApiResponse, CommandId, IdentifierType},
	obs::OperationKind,
};

/// Endpoint path of the transaction status query.
pub const TRANSACTION_STATUS_PATH: &str = "/mpesa/transactionstatus/v1/query";

def_operation_client! { TransactionStatus, "Client for the transaction status query." }
impl TransactionStatus {
	/// Requests the status of a transaction identified by its receipt number or originator
	/// conversation id. The final status is delivered to `query.result_url`.
	pub async fn check_transaction_status(
		&self,
		query: &TransactionStatusQuery,
	) -> Result<ApiResponse> {
		let credentials = self.client.config().credentials()?;

		self.client
			.post(
				OperationKind::TransactionStatus,
				TRANSACTION_STATUS_PATH,
				credentials,
				&TransactionStatusPayload::from(query),
			)
			.await
	}
}

/// Business parameters of a transaction status query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionStatusQuery {
	/// Encrypted initiator password.
	pub security_credential: String,
	/// Originator conversation id of the original request.
	pub originator_conversation_id: String,
	/// Organisation or MSISDN that took part in the transaction.
	pub party_a: String,
	/// Kind of identifier in `party_a`.
	pub identifier_type: IdentifierType,
	/// Gateway receipt number of the transaction.
	pub transaction_id: String,
	/// Free-form remarks.
	pub remarks: String,
	/// API operator username.
	pub initiator: String,
	/// Callback receiving the status result.
	pub result_url: Url,
	/// Callback invoked when the request times out in the gateway queue.
	pub queue_timeout_url: Url,
	/// Optional free-form occasion.
	pub occasion: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TransactionStatusPayload<'a> {
	initiator: &'a str,
	security_credential: &'a str,
	#[serde(rename = "CommandID")]
	command_id: CommandId,
	#[serde(rename = "TransactionID")]
	transaction_id: &'a str,
	#[serde(rename = "OriginatorConversationID")]
	originator_conversation_id: &'a str,
	party_a: &'a str,
	identifier_type: IdentifierType,
	#[serde(rename = "ResultURL")]
	result_url: &'a Url,
	#[serde(rename = "QueueTimeOutURL")]
	queue_timeout_url: &'a Url,
	remarks: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	occasion: Option<&'a str>,
}
impl<'a> From<&'a TransactionStatusQuery> for TransactionStatusPayload<'a> {
	fn from(query: &'a TransactionStatusQuery) -> Self {
		Self {
			initiator: &query.initiator,
			security_credential: &query.security_credential,
			command_id: CommandId::TransactionStatusQuery,
			transaction_id: &query.transaction_id,
			originator_conversation_id: &query.originator_conversation_id,
			party_a: &query.party_a,
			identifier_type: query.identifier_type,
			result_url: &query.result_url,
			queue_timeout_url: &query.queue_timeout_url,
			remarks: &query.remarks,
			occasion: query.occasion.as_deref(),
		}
	}
}
