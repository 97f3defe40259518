use reqwest::Method;

use super::{decode, ApiError, ApiResponse, RestApi};
use crate::models::{ListClientsResponse, SaveClientRequest, SaveClientResponse};

/// The REST surface the submit workflow depends on. A trait so that the
/// workflow can be exercised against a canned implementation. Only used
/// through static dispatch, so the future need not be boxed or `Send`.
#[allow(async_fn_in_trait)]
pub trait ClientsApi {
	/// Creates a client when no id is given, updates the addressed one
	/// otherwise.
	async fn save(
		&self,
		client_id: Option<&str>,
		body: &SaveClientRequest,
	) -> Result<ApiResponse<SaveClientResponse>, ApiError>;
}

/// The route a save goes to: the collection for creates, the item for
/// edits.
fn save_route(base_url: &str, client_id: Option<&str>) -> String {
	if let Some(client_id) = client_id {
		format!("{base_url}/clients/{client_id}")
	} else {
		format!("{base_url}/clients")
	}
}

/// POST creates, PATCH edits.
fn save_method(client_id: Option<&str>) -> Method {
	if client_id.is_some() {
		Method::PATCH
	} else {
		Method::POST
	}
}

impl ClientsApi for RestApi {
	async fn save(
		&self,
		client_id: Option<&str>,
		body: &SaveClientRequest,
	) -> Result<ApiResponse<SaveClientResponse>, ApiError> {
		let response = self
			.request(
				save_method(client_id),
				save_route(self.base_url(), client_id),
			)
			.json(body)
			.send()
			.await?;
		decode(response).await
	}
}

impl RestApi {
	/// Fetches the whole clients collection for the initial dashboard load.
	pub async fn list_clients(
		&self,
	) -> Result<ApiResponse<ListClientsResponse>, ApiError> {
		let response = self
			.request(Method::GET, format!("{}/clients", self.base_url()))
			.send()
			.await?;
		decode(response).await
	}
}
