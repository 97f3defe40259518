use serde::{Deserialize, Serialize};

/// A user a client can be assigned to. Reference data only: the console
/// reads this list, it never writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	/// The opaque identifier of the user
	#[serde(rename = "_id")]
	pub id: String,
	/// The given name of the user
	pub name: String,
	/// The family name of the user
	pub surname: String,
}

impl User {
	/// The name shown in the assignment dropdown and the client table.
	pub fn full_name(&self) -> String {
		format!("{} {}", self.name, self.surname)
	}
}

/// The response body of listing the users collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersResponse {
	/// All users clients can be assigned to
	pub users: Vec<User>,
}
