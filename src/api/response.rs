//! Pass-through wrapper for decoded gateway responses.

// std
use std::ops::Deref;
// crates.io
use serde_json::{Map, Value};
// self
use crate::_prelude::*;

/// Decoded JSON object returned by an operation endpoint, unmodified.
///
/// The client does not interpret response semantics; the accessors below are shortcuts
/// for fields every synchronous acknowledgement carries.
///
/// Only JSON objects decode into this type. A 2xx body holding any other JSON value fails
/// with [`crate::error::DecodeError`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(Map<String, Value>);
impl ApiResponse {
	/// Returns the raw value of `field`, if present.
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.0.get(field)
	}

	/// Returns `field` when it is a JSON string.
	pub fn get_str(&self, field: &str) -> Option<&str> {
		self.get(field).and_then(Value::as_str)
	}

	/// Returns the `ResponseCode` field (`"0"` means the request was accepted).
	pub fn response_code(&self) -> Option<&str> {
		self.get_str("ResponseCode")
	}

	/// Returns the `ResponseDescription` field.
	pub fn response_description(&self) -> Option<&str> {
		self.get_str("ResponseDescription")
	}

	/// Returns the `ConversationID` assigned by the gateway to asynchronous requests.
	pub fn conversation_id(&self) -> Option<&str> {
		self.get_str("ConversationID")
	}

	/// Returns the `OriginatorConversationID` echoed by the gateway.
	pub fn originator_conversation_id(&self) -> Option<&str> {
		self.get_str("OriginatorConversationID")
	}

	/// Consumes the wrapper, returning the underlying JSON object.
	pub fn into_inner(self) -> Map<String, Value> {
		self.0
	}
}
impl Deref for ApiResponse {
	type Target = Map<String, Value>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<Map<String, Value>> for ApiResponse {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}
impl From<ApiResponse> for Value {
	fn from(response: ApiResponse) -> Self {
		Value::Object(response.0)
	}
}
