use leptos::{ev::SubmitEvent, html};
use reqwest::StatusCode;

use crate::prelude::*;

/// What the user typed, before validation has looked at it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientDraft {
	/// The display name field
	pub name: String,
	/// The postal address field
	pub address: String,
	/// The assignment dropdown value; empty means unassigned
	pub user_id: String,
}

/// Per-field validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
	/// The message for the name field, if it failed
	pub name: Option<String>,
	/// The message for the address field, if it failed
	pub address: Option<String>,
}

impl ClientDraft {
	/// Checks the draft and converts it into the request body. An empty
	/// assignment collapses to "unassigned". The submit action only accepts
	/// the converted body, so a draft that fails here can never reach the
	/// network.
	pub fn validate(self) -> Result<SaveClientRequest, FieldErrors> {
		let mut errors = FieldErrors::default();
		if self.name.is_empty() {
			errors.name = Some("Client name cannot be empty".to_owned());
		}
		if self.address.is_empty() {
			errors.address = Some("Client address cannot be empty".to_owned());
		}
		if errors != FieldErrors::default() {
			return Err(errors);
		}

		Ok(SaveClientRequest {
			name: self.name,
			address: self.address,
			user_id: self.user_id.some_if_not_empty(),
		})
	}
}

/// Clears the in-flight flag when the submission attempt ends, however it
/// ends.
struct LoadingReset(ModalContext);

impl Drop for LoadingReset {
	fn drop(&mut self) {
		self.0.dispatch(ModalAction::Loading { is_loading: false });
	}
}

/// Submits a validated body for the record the modal is working on. At most
/// one submission per open modal is in flight: a second call while the flag
/// is set returns without touching the network. On HTTP 200 the saved
/// record is merged into the shared list (edits replace, creates append),
/// the modal is hidden and the outcome is shown; a success status other
/// than exactly 200 changes nothing. Structured errors reach the snack
/// channel, everything else is only logged.
pub async fn save_client<A>(
	api: &A,
	modal: ModalContext,
	clients: ClientsContext,
	snack: SnackContext,
	body: SaveClientRequest,
) where
	A: ClientsApi,
{
	let ModalState {
		client_id,
		is_loading,
		..
	} = modal.state.get_untracked();
	if is_loading {
		return;
	}

	modal.dispatch(ModalAction::Loading { is_loading: true });
	let _reset = LoadingReset(modal);

	match api.save(client_id.as_deref(), &body).await {
		Ok(response) => {
			if response.status_code != StatusCode::OK {
				return;
			}

			let SaveClientResponse {
				client,
				message,
				status,
			} = response.body;
			if client_id.is_some() {
				clients.replace(client);
			} else {
				clients.push(client);
			}
			modal.dispatch(ModalAction::Hide);
			snack.show(message, status);
		}
		Err(error) => {
			error!("failed to save client: {error}");
			if let Some(body) = error.response_body() {
				snack.show(body.error.clone(), body.status.clone());
			}
		}
	}
}

/// The create/edit form shown inside the client modal. Field defaults come
/// from the record the modal points at, or are empty in create mode; the
/// modal remounts the form on every open.
#[component]
pub fn ClientForm() -> impl IntoView {
	let modal = expect_modal();
	let clients = expect_clients();
	let users = expect_users();
	let snack = expect_snack();

	let client_id = modal.state.with_untracked(|state| state.client_id.clone());
	let editing = client_id.is_some();
	let current = client_id.as_ref().and_then(|client_id| {
		clients.clients.with_untracked(|clients| {
			clients
				.iter()
				.find(|client| &client.id == client_id)
				.cloned()
		})
	});
	let default_name = current
		.as_ref()
		.map(|client| client.name.clone())
		.unwrap_or_default();
	let default_address = current
		.as_ref()
		.map(|client| client.address.clone())
		.unwrap_or_default();
	let default_user_id = current.as_ref().and_then(|client| client.user_id.clone());

	let name_error = RwSignal::new(String::new());
	let address_error = RwSignal::new(String::new());

	let name_ref = NodeRef::<html::Input>::new();
	let address_ref = NodeRef::<html::Input>::new();
	let user_ref = NodeRef::<html::Select>::new();

	let save_action = Action::new_local(move |body: &SaveClientRequest| {
		let api = RestApi::new();
		let body = body.clone();
		async move { save_client(&api, modal, clients, snack, body).await }
	});

	let handle_submit = move |ev: SubmitEvent| {
		ev.prevent_default();

		let draft = ClientDraft {
			name: name_ref
				.get()
				.map(|input| input.value())
				.unwrap_or_default(),
			address: address_ref
				.get()
				.map(|input| input.value())
				.unwrap_or_default(),
			user_id: user_ref
				.get()
				.map(|select| select.value())
				.unwrap_or_default(),
		};

		match draft.validate() {
			Ok(body) => {
				name_error.set(String::new());
				address_error.set(String::new());
				_ = save_action.dispatch(body);
			}
			Err(errors) => {
				name_error.set(errors.name.unwrap_or_default());
				address_error.set(errors.address.unwrap_or_default());
			}
		}
	};

	view! {
		<form class="fc-fs-fs full-width txt-white" on:submit=handle_submit>
			<label class="txt-grey txt-xs" for="name">"Clients name"</label>
			<input
				id="name"
				type="text"
				class="full-width mt-xxs"
				placeholder="Name"
				value=default_name
				node_ref=name_ref
				on:input=move |_| name_error.update(|error| error.clear())
			/>
			{move || {
				name_error
					.get()
					.some_if_not_empty()
					.map(|message| {
						view! { <p class="txt-error txt-xxs mt-xxs">{message}</p> }
					})
			}}

			<label class="txt-grey txt-xs mt-md" for="address">
				"Clients address"
			</label>
			<input
				id="address"
				type="text"
				class="full-width mt-xxs"
				placeholder="Address"
				value=default_address
				node_ref=address_ref
				on:input=move |_| address_error.update(|error| error.clear())
			/>
			{move || {
				address_error
					.get()
					.some_if_not_empty()
					.map(|message| {
						view! { <p class="txt-error txt-xxs mt-xxs">{message}</p> }
					})
			}}

			<label class="txt-grey txt-xs mt-md" for="user-id">
				"Client assigned to"
			</label>
			<select id="user-id" class="full-width mt-xxs" node_ref=user_ref>
				<option value="" selected=default_user_id.is_none()>"-"</option>
				{
					let default_user_id = default_user_id.clone();
					move || {
						let default_user_id = default_user_id.clone();
						users
							.users
							.get()
							.into_iter()
							.map(|user| {
								let chosen =
									Some(&user.id) == default_user_id.as_ref();
								view! {
									<option value=user.id.clone() selected=chosen>
										{user.full_name()}
									</option>
								}
							})
							.collect_view()
					}
				}
			</select>

			{move || {
				if modal.state.get().is_loading {
					view! { <Spinner class="mt-md ml-auto"/> }.into_any()
				} else {
					view! {
						<button type="submit" class="btn btn-primary mt-md ml-auto">
							{if editing { "Edit" } else { "Create" }}
						</button>
					}
					.into_any()
				}
			}}
		</form>
	}
}

#[cfg(test)]
mod tests {
	use std::{collections::VecDeque, sync::Mutex};

	use super::*;

	/// A canned implementation of the REST surface that records every call.
	#[derive(Default)]
	struct MockApi {
		calls: Mutex<Vec<(Option<String>, SaveClientRequest)>>,
		responses:
			Mutex<VecDeque<Result<ApiResponse<SaveClientResponse>, ApiError>>>,
	}

	impl MockApi {
		fn respond_with(
			self,
			response: Result<ApiResponse<SaveClientResponse>, ApiError>,
		) -> Self {
			self.responses.lock().unwrap().push_back(response);
			self
		}

		fn calls(&self) -> Vec<(Option<String>, SaveClientRequest)> {
			self.calls.lock().unwrap().clone()
		}
	}

	impl ClientsApi for MockApi {
		async fn save(
			&self,
			client_id: Option<&str>,
			body: &SaveClientRequest,
		) -> Result<ApiResponse<SaveClientResponse>, ApiError> {
			self.calls
				.lock()
				.unwrap()
				.push((client_id.map(str::to_owned), body.clone()));
			self.responses
				.lock()
				.unwrap()
				.pop_front()
				.expect("no canned response left")
		}
	}

	fn contexts() -> (ModalContext, ClientsContext, SnackContext) {
		(
			ModalContext::default(),
			ClientsContext::default(),
			SnackContext::default(),
		)
	}

	fn stored(id: &str, name: &str, address: &str) -> Client {
		Client {
			id: id.to_owned(),
			name: name.to_owned(),
			address: address.to_owned(),
			user_id: None,
		}
	}

	fn acme_body() -> SaveClientRequest {
		SaveClientRequest {
			name: "Acme".to_owned(),
			address: "1 Main St".to_owned(),
			user_id: None,
		}
	}

	fn ok_response(
		client: Client,
		message: &str,
	) -> Result<ApiResponse<SaveClientResponse>, ApiError> {
		Ok(ApiResponse {
			status_code: StatusCode::OK,
			body: SaveClientResponse {
				client,
				message: message.to_owned(),
				status: "success".to_owned(),
			},
		})
	}

	#[test]
	fn empty_name_fails_validation() {
		let errors = ClientDraft {
			name: String::new(),
			address: "1 Main St".to_owned(),
			user_id: String::new(),
		}
		.validate()
		.unwrap_err();

		assert!(errors.name.is_some());
		assert!(errors.address.is_none());
	}

	#[test]
	fn empty_address_fails_validation() {
		let errors = ClientDraft {
			name: "Acme".to_owned(),
			address: String::new(),
			user_id: String::new(),
		}
		.validate()
		.unwrap_err();

		assert!(errors.name.is_none());
		assert!(errors.address.is_some());
	}

	#[test]
	fn empty_assignment_collapses_to_unassigned() {
		let body = ClientDraft {
			name: "Acme".to_owned(),
			address: "1 Main St".to_owned(),
			user_id: String::new(),
		}
		.validate()
		.unwrap();
		assert_eq!(body.user_id, None);

		let body = ClientDraft {
			name: "Acme".to_owned(),
			address: "1 Main St".to_owned(),
			user_id: "u1".to_owned(),
		}
		.validate()
		.unwrap();
		assert_eq!(body.user_id.as_deref(), Some("u1"));
	}

	#[tokio::test]
	async fn create_posts_to_the_collection_and_appends() {
		let (modal, clients, snack) = contexts();
		modal.dispatch(ModalAction::Show { client_id: None });
		clients.set(vec![stored("c0", "Globex", "2 Oak Ave")]);
		let api = MockApi::default()
			.respond_with(ok_response(stored("c1", "Acme", "1 Main St"), "Created"));

		save_client(&api, modal, clients, snack, acme_body()).await;

		assert_eq!(api.calls(), vec![(None, acme_body())]);
		let list = clients.clients.get_untracked();
		assert_eq!(list.len(), 2);
		assert_eq!(list[1].id, "c1");
		let state = modal.state.get_untracked();
		assert!(!state.visible);
		assert!(!state.is_loading);
		assert_eq!(
			snack.current.get_untracked(),
			Some(Snack {
				message: "Created".to_owned(),
				status: "success".to_owned(),
			})
		);
	}

	#[tokio::test]
	async fn edit_patches_the_item_and_replaces_in_place() {
		let (modal, clients, snack) = contexts();
		modal.dispatch(ModalAction::Show {
			client_id: Some("c1".to_owned()),
		});
		clients.set(vec![
			stored("c0", "Globex", "2 Oak Ave"),
			stored("c1", "Acme", "1 Main St"),
			stored("c2", "Initech", "3 Elm Rd"),
		]);
		let api = MockApi::default()
			.respond_with(ok_response(stored("c1", "Acme", "2 Oak Ave"), "Updated"));

		save_client(
			&api,
			modal,
			clients,
			snack,
			SaveClientRequest {
				name: "Acme".to_owned(),
				address: "2 Oak Ave".to_owned(),
				user_id: None,
			},
		)
		.await;

		let calls = api.calls();
		assert_eq!(calls.len(), 1);
		assert_eq!(calls[0].0.as_deref(), Some("c1"));
		let list = clients.clients.get_untracked();
		assert_eq!(list.len(), 3);
		assert_eq!(list[1].id, "c1");
		assert_eq!(list[1].address, "2 Oak Ave");
		assert!(!modal.state.get_untracked().visible);
		assert_eq!(
			snack.current.get_untracked().map(|snack| snack.message),
			Some("Updated".to_owned())
		);
	}

	#[tokio::test]
	async fn second_submit_while_loading_is_ignored() {
		let (modal, clients, snack) = contexts();
		modal.dispatch(ModalAction::Show { client_id: None });
		modal.dispatch(ModalAction::Loading { is_loading: true });
		let api = MockApi::default();

		save_client(&api, modal, clients, snack, acme_body()).await;

		assert!(api.calls().is_empty());
		// The guarded attempt does not touch the flag of the one in flight.
		assert!(modal.state.get_untracked().is_loading);
		assert_eq!(snack.current.get_untracked(), None);
	}

	#[tokio::test]
	async fn structured_error_reaches_the_snack_channel() {
		let (modal, clients, snack) = contexts();
		modal.dispatch(ModalAction::Show { client_id: None });
		let api = MockApi::default().respond_with(Err(ApiError::Response {
			status_code: StatusCode::UNPROCESSABLE_ENTITY,
			body: ApiErrorBody {
				error: "name already taken".to_owned(),
				status: "error".to_owned(),
			},
		}));

		save_client(&api, modal, clients, snack, acme_body()).await;

		assert!(clients.clients.get_untracked().is_empty());
		let state = modal.state.get_untracked();
		assert!(state.visible);
		assert!(!state.is_loading);
		assert_eq!(
			snack.current.get_untracked(),
			Some(Snack {
				message: "name already taken".to_owned(),
				status: "error".to_owned(),
			})
		);
	}

	#[tokio::test]
	async fn unstructured_error_only_clears_the_loading_flag() {
		let (modal, clients, snack) = contexts();
		modal.dispatch(ModalAction::Show { client_id: None });
		let api = MockApi::default().respond_with(Err(
			ApiError::UnexpectedResponse("connection reset".to_owned()),
		));

		save_client(&api, modal, clients, snack, acme_body()).await;

		let state = modal.state.get_untracked();
		assert!(state.visible);
		assert!(!state.is_loading);
		assert_eq!(snack.current.get_untracked(), None);
	}

	#[tokio::test]
	async fn success_status_other_than_200_is_a_no_op() {
		let (modal, clients, snack) = contexts();
		modal.dispatch(ModalAction::Show { client_id: None });
		let api = MockApi::default().respond_with(Ok(ApiResponse {
			status_code: StatusCode::NO_CONTENT,
			body: SaveClientResponse {
				client: stored("c1", "Acme", "1 Main St"),
				message: "Created".to_owned(),
				status: "success".to_owned(),
			},
		}));

		save_client(&api, modal, clients, snack, acme_body()).await;

		assert!(clients.clients.get_untracked().is_empty());
		let state = modal.state.get_untracked();
		assert!(state.visible);
		assert!(!state.is_loading);
		assert_eq!(snack.current.get_untracked(), None);
	}
}
