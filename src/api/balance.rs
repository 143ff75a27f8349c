//! Account balance query (`POST /mpesa/accountbalance/v1/query`).

// self
use crate::{
	_prelude::*,
	api::{ApiResponse, CommandId, IdentifierType},
	obs::OperationKind,
};

/// Endpoint path of the account balance query.
pub const ACCOUNT_BALANCE_PATH: &str = "/mpesa/accountbalance/v1/query";

def_operation_client! { Balance, "Client for the account balance query." }
impl Balance {
	/// Requests the balance of `query.party_a`.
	///
	/// The gateway acknowledges synchronously; the balance itself is delivered later to
	/// `query.result_url`.
	pub async fn get_balance(&self, query: &BalanceQuery) -> Result<ApiResponse> {
		let credentials = self.client.config().credentials()?;

		self.client
			.post(
				OperationKind::AccountBalance,
				ACCOUNT_BALANCE_PATH,
				credentials,
				&BalancePayload::from(query),
			)
			.await
	}
}

/// Business parameters of an account balance query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceQuery {
	/// API operator username.
	pub initiator: String,
	/// Encrypted initiator password.
	pub security_credential: String,
	/// Short code, till, or MSISDN whose balance is queried.
	pub party_a: String,
	/// Kind of identifier in `party_a`.
	pub identifier_type: IdentifierType,
	/// Free-form remarks.
	pub remarks: String,
	/// Callback invoked when the request times out in the gateway queue.
	pub queue_timeout_url: Url,
	/// Callback receiving the balance result.
	pub result_url: Url,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct BalancePayload<'a> {
	initiator: &'a str,
	security_credential: &'a str,
	#[serde(rename = "CommandID")]
	command_id: CommandId,
	party_a: &'a str,
	identifier_type: IdentifierType,
	remarks: &'a str,
	#[serde(rename = "QueueTimeOutURL")]
	queue_timeout_url: &'a Url,
	#[serde(rename = "ResultURL")]
	result_url: &'a Url,
}
impl<'a> From<&'a BalanceQuery> for BalancePayload<'a> {
	fn from(query: &'a BalanceQuery) -> Self {
		Self {
			initiator: &query.initiator,
			security_credential: &query.security_credential,
			command_id: CommandId::AccountBalance,
			party_a: &query.party_a,
			identifier_type: query.identifier_type,
			remarks: &query.remarks,
			queue_timeout_url: &query.queue_timeout_url,
			result_url: &query.result_url,
		}
	}
}
