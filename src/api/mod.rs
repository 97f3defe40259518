use reqwest::Method;
use serde::de::DeserializeOwned;

/// The clients collection: create and update.
mod clients;
/// The error taxonomy of the API boundary.
mod error;
/// The users reference collection.
mod users;

pub use self::{clients::*, error::*};

use crate::utils::constants;

/// A decoded success response, with the status code kept around because the
/// submit workflow checks it narrowly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
	/// The HTTP status code of the response
	pub status_code: reqwest::StatusCode,
	/// The decoded response body
	pub body: T,
}

/// The REST client talking to the real backend. Every request carries the
/// session cookie.
#[derive(Debug, Clone)]
pub struct RestApi {
	/// The underlying HTTP client
	http: reqwest::Client,
	/// The base URL all routes are joined onto
	base_url: String,
}

impl RestApi {
	/// A client pointed at the configured backend.
	pub fn new() -> Self {
		Self::with_base_url(constants::API_BASE_URL)
	}

	/// A client pointed at the given base URL.
	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		RestApi {
			http: reqwest::Client::new(),
			base_url: base_url.into(),
		}
	}

	/// The base URL all routes are joined onto.
	pub(crate) fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Starts a credentialed request. On the browser fetch backend this
	/// attaches the session cookie; authorization stays server-side.
	pub(crate) fn request(
		&self,
		method: Method,
		route: String,
	) -> reqwest::RequestBuilder {
		let builder = self.http.request(method, route);
		#[cfg(target_arch = "wasm32")]
		let builder = builder.fetch_credentials_include();
		builder
	}
}

/// Splits a response into the decoded body or the structured error the
/// backend produced for it.
pub(crate) async fn decode<T>(
	response: reqwest::Response,
) -> Result<ApiResponse<T>, ApiError>
where
	T: DeserializeOwned,
{
	let status_code = response.status();
	if !status_code.is_success() {
		return match response.json::<ApiErrorBody>().await {
			Ok(body) => Err(ApiError::Response { status_code, body }),
			Err(error) => Err(ApiError::UnexpectedResponse(error.to_string())),
		};
	}

	let body = response
		.json::<T>()
		.await
		.map_err(|error| ApiError::UnexpectedResponse(error.to_string()))?;
	Ok(ApiResponse { status_code, body })
}
