use reqwest::Method;

use super::{decode, ApiError, ApiResponse, RestApi};
use crate::models::ListUsersResponse;

impl RestApi {
	/// Fetches the assignable-user reference list for the initial dashboard
	/// load.
	pub async fn list_users(
		&self,
	) -> Result<ApiResponse<ListUsersResponse>, ApiError> {
		let response = self
			.request(Method::GET, format!("{}/users", self.base_url()))
			.send()
			.await?;
		decode(response).await
	}
}
