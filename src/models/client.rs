use serde::{Deserialize, Serialize};

/// A client business record as the backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
	/// The opaque identifier of the record
	#[serde(rename = "_id")]
	pub id: String,
	/// The display name of the client
	pub name: String,
	/// The postal address of the client
	pub address: String,
	/// The identifier of the user this client is assigned to, if any
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
}

/// The request body for creating or updating a client. An absent `user_id`
/// means the client is unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveClientRequest {
	/// The display name of the client
	pub name: String,
	/// The postal address of the client
	pub address: String,
	/// The identifier of the user this client is assigned to, if any
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
}

/// The response body of a successful create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveClientResponse {
	/// The record as the backend stored it
	pub client: Client,
	/// A human-readable outcome message
	pub message: String,
	/// The outcome status, used to style the notification
	pub status: String,
}

/// The response body of listing the clients collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClientsResponse {
	/// All client records visible to the current session
	pub clients: Vec<Client>,
}
