use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Whether a session is present. Authorization itself is enforced
/// server-side through the session cookie; this only drives what the shell
/// renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum AuthState {
	/// A session cookie is present for the given user
	#[serde(rename_all = "camelCase")]
	LoggedIn {
		/// The identifier of the signed-in user
		user_id: String,
	},
	/// No session is present
	#[default]
	LoggedOut,
}

impl AuthState {
	/// Returns whether a session is present.
	pub fn is_logged_in(&self) -> bool {
		matches!(self, AuthState::LoggedIn { .. })
	}
}

/// The session holder wired up by the bootstrap, before anything else is
/// rendered.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
	/// The current session state
	pub state: RwSignal<AuthState>,
}

impl Default for AuthContext {
	fn default() -> Self {
		AuthContext {
			state: RwSignal::new(AuthState::default()),
		}
	}
}

/// Provides the [`AuthContext`] if none is present yet.
pub fn provide_auth() {
	if use_context::<AuthContext>().is_none() {
		provide_context(AuthContext::default());
	}
}

/// Returns the [`AuthContext`] provided at the root.
pub fn expect_auth() -> AuthContext {
	use_context::<AuthContext>().expect("no AuthContext found")
}

/// What the client modal is currently doing: whether it is open, which
/// record it edits (create mode when [`None`]) and whether a submission is
/// in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
	/// Whether the modal is shown
	pub visible: bool,
	/// The record being edited, or [`None`] in create mode
	pub client_id: Option<String>,
	/// Whether a submission is currently in flight
	pub is_loading: bool,
}

/// Actions understood by the modal reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
	/// Open the modal, in edit mode when a client id is given
	Show {
		/// The record to edit, or [`None`] to create a new one
		client_id: Option<String>,
	},
	/// Set or clear the in-flight flag
	Loading {
		/// The new value of the flag
		is_loading: bool,
	},
	/// Close the modal and reset it
	Hide,
}

/// The modal state holder. Dispatch-only mutation keeps every transition in
/// one place.
#[derive(Debug, Clone, Copy)]
pub struct ModalContext {
	/// The current modal state
	pub state: RwSignal<ModalState>,
}

impl Default for ModalContext {
	fn default() -> Self {
		ModalContext {
			state: RwSignal::new(ModalState::default()),
		}
	}
}

impl ModalContext {
	/// Applies an action to the current state.
	pub fn dispatch(&self, action: ModalAction) {
		self.state.update(|state| match action {
			ModalAction::Show { client_id } => {
				state.visible = true;
				state.client_id = client_id;
				state.is_loading = false;
			}
			ModalAction::Loading { is_loading } => {
				state.is_loading = is_loading;
			}
			ModalAction::Hide => {
				state.visible = false;
				state.client_id = None;
				state.is_loading = false;
			}
		});
	}
}

/// Provides the [`ModalContext`] if none is present yet.
pub fn provide_modal() {
	if use_context::<ModalContext>().is_none() {
		provide_context(ModalContext::default());
	}
}

/// Returns the [`ModalContext`] provided at the root.
pub fn expect_modal() -> ModalContext {
	use_context::<ModalContext>().expect("no ModalContext found")
}

/// The shared client list. The dashboard seeds it, the form merges saved
/// records back into it.
#[derive(Debug, Clone, Copy)]
pub struct ClientsContext {
	/// The current list of client records
	pub clients: RwSignal<Vec<Client>>,
}

impl Default for ClientsContext {
	fn default() -> Self {
		ClientsContext {
			clients: RwSignal::new(Vec::new()),
		}
	}
}

impl ClientsContext {
	/// Replaces the whole list.
	pub fn set(&self, clients: Vec<Client>) {
		self.clients.set(clients);
	}

	/// Replaces the entry whose id matches the given record, in place. A
	/// record with an unknown id leaves the list untouched.
	pub fn replace(&self, client: Client) {
		self.clients.update(|clients| {
			if let Some(existing) =
				clients.iter_mut().find(|existing| existing.id == client.id)
			{
				*existing = client;
			}
		});
	}

	/// Appends a freshly created record.
	pub fn push(&self, client: Client) {
		self.clients.update(|clients| clients.push(client));
	}
}

/// Provides the [`ClientsContext`] if none is present yet.
pub fn provide_clients() {
	if use_context::<ClientsContext>().is_none() {
		provide_context(ClientsContext::default());
	}
}

/// Returns the [`ClientsContext`] provided at the root.
pub fn expect_clients() -> ClientsContext {
	use_context::<ClientsContext>().expect("no ClientsContext found")
}

/// The assignable-user reference list. Populated by the dashboard load,
/// read-only everywhere else.
#[derive(Debug, Clone, Copy)]
pub struct UsersContext {
	/// The current list of assignable users
	pub users: RwSignal<Vec<User>>,
}

impl Default for UsersContext {
	fn default() -> Self {
		UsersContext {
			users: RwSignal::new(Vec::new()),
		}
	}
}

impl UsersContext {
	/// Replaces the whole list.
	pub fn set(&self, users: Vec<User>) {
		self.users.set(users);
	}
}

/// Provides the [`UsersContext`] if none is present yet.
pub fn provide_users() {
	if use_context::<UsersContext>().is_none() {
		provide_context(UsersContext::default());
	}
}

/// Returns the [`UsersContext`] provided at the root.
pub fn expect_users() -> UsersContext {
	use_context::<UsersContext>().expect("no UsersContext found")
}
