use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The error body the backend attaches to a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
	/// A human-readable description of what went wrong
	pub error: String,
	/// The outcome status, used to style the notification
	pub status: String,
}

/// Everything that can go wrong between issuing a request and decoding its
/// response. Only [`ApiError::Response`] is shown to the user; the rest is
/// logged and otherwise silent.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The backend replied with a structured error body
	#[error("{status_code}: {}", body.error)]
	Response {
		/// The HTTP status code of the response
		status_code: StatusCode,
		/// The structured error body
		body: ApiErrorBody,
	},
	/// The request never produced a response
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	/// A response arrived but its payload could not be decoded
	#[error("unexpected response: {0}")]
	UnexpectedResponse(String),
}

impl ApiError {
	/// The structured error body, if the backend produced one.
	pub fn response_body(&self) -> Option<&ApiErrorBody> {
		match self {
			ApiError::Response { body, .. } => Some(body),
			_ => None,
		}
	}
}
