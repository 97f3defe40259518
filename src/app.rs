use leptos_router::{
	components::{Route, Routes},
	path,
};

use crate::prelude::*;

/// Wires the session holder around everything else. The bootstrap mounts
/// this outermost.
#[component]
pub fn AuthProvider(
	/// The subtree the session holder is provided to.
	children: Children,
) -> impl IntoView {
	provide_auth();
	children()
}

/// Provides the notification channel and renders the snackbar on top of
/// whatever it wraps.
#[component]
pub fn SnackProvider(
	/// The subtree the notification channel is provided to.
	children: Children,
) -> impl IntoView {
	provide_snack();
	view! {
		{children()}
		<Snackbar/>
	}
}

/// The root application view. Provides the shared lists and the modal
/// state, and routes to the pages.
#[component]
pub fn App() -> impl IntoView {
	provide_modal();
	provide_clients();
	provide_users();

	view! {
		<main class="fc-fs-ct full-width full-height bg-secondary">
			<Routes fallback=|| view! { <p class="txt-white p-lg">"Not found"</p> }>
				<Route path=path!("/") view=ClientsDashboard/>
			</Routes>
		</main>
	}
}
