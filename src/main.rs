#![forbid(unsafe_code)]

//! Bootstrap entrypoint for the browser console. Wires the session holder,
//! the notification channel and the router around the application root and
//! mounts the tree exactly once.

#[cfg(target_arch = "wasm32")]
fn main() {
	use crm_console::{
		app::{App, AuthProvider, SnackProvider},
		prelude::*,
	};
	use leptos_router::components::Router;
	use wasm_bindgen::JsCast;

	wasm_logger::init(wasm_logger::Config::default());
	if cfg!(debug_assertions) {
		console_error_panic_hook::set_once();
	}

	// A missing mount point is a packaging error, not a runtime condition.
	let root_element = web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.get_element_by_id("root"))
		.expect("unable to find root element");

	info!("mounting console");
	leptos::mount::mount_to(root_element.unchecked_into(), || {
		view! {
			<AuthProvider>
				<SnackProvider>
					<Router>
						<App/>
					</Router>
				</SnackProvider>
			</AuthProvider>
		}
	})
	.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
	// The console only renders in a browser; the native build exists so the
	// crate can be checked and tested off-target.
}
