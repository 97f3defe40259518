/// The create/edit form and its submit workflow.
mod form;

pub use self::form::*;

use crate::prelude::*;

/// The clients dashboard: lists the records and hosts the create/edit
/// modal. Seeds the shared client and user lists from the backend when it
/// mounts.
#[component]
pub fn ClientsDashboard() -> impl IntoView {
	let auth = expect_auth();
	let modal = expect_modal();
	let clients = expect_clients();
	let users = expect_users();

	leptos::task::spawn_local(async move {
		let api = RestApi::new();
		match api.list_clients().await {
			Ok(response) => clients.set(response.body.clients),
			Err(error) => error!("failed to load clients: {error}"),
		}
		match api.list_users().await {
			Ok(response) => users.set(response.body.users),
			Err(error) => error!("failed to load users: {error}"),
		}
	});

	view! {
		<div class="fc-fs-fs full-width px-lg">
			<header class="fr-sb-ct full-width my-md">
				<h1 class="txt-primary txt-xl txt-medium">"Clients"</h1>
				<div class="fr-fs-ct">
					<span class="txt-grey mr-md">
						{move || {
							if auth.state.get().is_logged_in() {
								"Signed in"
							} else {
								"Guest session"
							}
						}}
					</span>
					<button
						class="btn btn-primary"
						on:click=move |_| {
							modal.dispatch(ModalAction::Show { client_id: None })
						}
					>
						"Add Client"
					</button>
				</div>
			</header>

			<table class="full-width txt-white">
				<thead>
					<tr>
						<th class="txt-left">"Name"</th>
						<th class="txt-left">"Address"</th>
						<th class="txt-left">"Assigned to"</th>
						<th></th>
					</tr>
				</thead>
				<tbody>
					<For
						each=move || clients.clients.get()
						key=|client| client.id.clone()
						let:client
					>
						{
							let client_id = client.id.clone();
							let user_id = client.user_id.clone();
							view! {
								<tr>
									<td>{client.name.clone()}</td>
									<td>{client.address.clone()}</td>
									<td>
										{move || {
											user_id
												.as_ref()
												.and_then(|user_id| {
													users.users.with(|users| {
														users
															.iter()
															.find(|user| &user.id == user_id)
															.map(User::full_name)
													})
												})
												.unwrap_or_else(|| "-".to_owned())
										}}
									</td>
									<td class="txt-right">
										<button
											class="btn btn-plain"
											on:click=move |_| {
												modal.dispatch(ModalAction::Show {
													client_id: Some(client_id.clone()),
												})
											}
										>
											"Edit"
										</button>
									</td>
								</tr>
							}
						}
					</For>
				</tbody>
			</table>

			<Show when=move || modal.state.get().visible>
				<section class="modal-backdrop fc-ct-ct">
					<div class="modal bg-secondary br-sm p-lg">
						<div class="fr-sb-ct mb-md">
							<h2 class="txt-white txt-lg">
								{move || {
									if modal.state.get().client_id.is_some() {
										"Edit client"
									} else {
										"Add client"
									}
								}}
							</h2>
							<button
								class="btn btn-plain"
								on:click=move |_| modal.dispatch(ModalAction::Hide)
							>
								"x"
							</button>
						</div>
						<ClientForm/>
					</div>
				</section>
			</Show>
		</div>
	}
}
