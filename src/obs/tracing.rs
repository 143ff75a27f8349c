//! `mpesa_sdk.operation` spans around gateway calls.

// self
use crate::{_prelude::*, obs::OperationKind};

/// Future returned by [`OperationSpan::instrument`].
#[cfg(feature = "tracing")]
pub type Instrumented<F> = tracing::instrument::Instrumented<F>;
/// The input future itself; spans are compiled out.
#[cfg(not(feature = "tracing"))]
pub type Instrumented<F> = F;

/// Span covering one HTTP exchange, carrying the operation label and endpoint path.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Opens a span for `kind` calling `endpoint` (a path such as `/oauth/v1/generate`).
	pub fn new(kind: OperationKind, endpoint: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			Self {
				span: tracing::info_span!(
					"mpesa_sdk.operation",
					operation = kind.as_str(),
					endpoint
				),
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, endpoint);

			Self {}
		}
	}

	/// Attaches the span to `fut` for every poll.
	pub fn instrument<Fut>(&self, fut: Fut) -> Instrumented<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			tracing::Instrument::instrument(fut, self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::{Error, ValidationError};

	#[tokio::test]
	async fn instrumented_future_yields_inner_result() {
		let span = OperationSpan::new(OperationKind::StkPushQuery, "/mpesa/stkpushquery/v1/query");
		let result: Result<()> =
			span.instrument(async { Err(ValidationError::MissingCredentials.into()) }).await;

		assert!(matches!(result, Err(Error::Validation(ValidationError::MissingCredentials))));
	}
}
