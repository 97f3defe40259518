#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Browser console for managing CRM clients. Renders entirely on the client
//! and talks to the backend over its REST API.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use leptos::prelude::*;
	pub use log::{debug, error, info, warn};

	pub use crate::{api::*, components::*, models::*, pages::*, utils::*};
}

/// The API module. Everything that talks to the backend over HTTP lives
/// here: the request types, the error taxonomy and the REST client.
pub mod api;
/// The application logic code. This contains the root component, the
/// context providers and the routes.
pub mod app;
/// The components module. Reusable components like the snackbar and the
/// spinner are defined here.
pub mod components;
/// The models module. The wire-level records exchanged with the backend.
pub mod models;
/// The pages module. Pages are the main views that are rendered when a
/// route is matched.
pub mod pages;
/// The utils module. Shared state holders, constants and small extension
/// traits needed to make the application work.
pub mod utils;
