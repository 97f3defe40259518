/// A module containing the shared state holders provided at the
/// application root.
mod state;

pub use self::state::*;

/// A module containing constants that are used throughout the application.
pub mod constants {
	/// The base URL of the backend API. Overridable at build time so that
	/// staging builds can point elsewhere.
	pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
		Some(url) => url,
		None => "http://localhost:5000/api",
	};
}

/// A trait to extend the [`String`] type with some useful methods that are
/// not available in the standard library.
pub trait StringExt {
	/// Wraps the [`String`] into an option depending on whether it's empty.
	/// Returns [`None`] if the string is empty, otherwise returns the string
	/// wrapped in a [`Some()`]
	fn some_if_not_empty(self) -> Option<String>;
}

impl StringExt for String {
	fn some_if_not_empty(self) -> Option<String> {
		if self.is_empty() {
			None
		} else {
			Some(self)
		}
	}
}
