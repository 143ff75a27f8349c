//! Optional observability helpers for gateway calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `mpesa_sdk.operation` with the
//!   `operation` and `endpoint` (request path) fields.
//! - Enable `metrics` to increment the `mpesa_sdk_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::OPERATION_TOTAL;
pub use tracing::*;

pub(crate) use metrics::{record_attempt, record_result};

// self
use crate::_prelude::*;

/// Gateway calls observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// OAuth client-credentials exchange.
	Authenticate,
	/// Account balance query.
	AccountBalance,
	/// Transaction status query.
	TransactionStatus,
	/// Transaction reversal.
	Reversal,
	/// Business-to-customer payment.
	B2cPayment,
	/// STK push initiation.
	StkPush,
	/// STK push status query.
	StkPushQuery,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::Authenticate => "authenticate",
			OperationKind::AccountBalance => "account_balance",
			OperationKind::TransactionStatus => "transaction_status",
			OperationKind::Reversal => "reversal",
			OperationKind::B2cPayment => "b2c_payment",
			OperationKind::StkPush => "stk_push",
			OperationKind::StkPushQuery => "stk_push_query",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to a client helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
