//! Counters for gateway calls, backed by the global `metrics` recorder.

// self
use crate::{
	_prelude::*,
	obs::{OperationKind, OperationOutcome},
};

/// Counter name, labeled by `operation` and `outcome`.
pub const OPERATION_TOTAL: &str = "mpesa_sdk_operation_total";

pub(crate) fn record_attempt(kind: OperationKind) {
	increment(kind, OperationOutcome::Attempt);
}

pub(crate) fn record_result<T>(kind: OperationKind, result: &Result<T>) -> OperationOutcome {
	let outcome =
		if result.is_ok() { OperationOutcome::Success } else { OperationOutcome::Failure };

	increment(kind, outcome);

	outcome
}

fn increment(kind: OperationKind, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(OPERATION_TOTAL, "operation" => kind.as_str(), "outcome" => outcome.as_str())
		.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}
