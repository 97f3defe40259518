use crate::prelude::*;

/// A transient message reporting the outcome of an action. The status is
/// whatever the backend reported ("success", "error", ...) and picks the
/// styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snack {
	/// The message to show
	pub message: String,
	/// The outcome status, used to style the snackbar
	pub status: String,
}

/// The shared notification channel. Showing a new snack replaces the
/// current one.
#[derive(Debug, Clone, Copy)]
pub struct SnackContext {
	/// The snack currently on screen, if any
	pub current: RwSignal<Option<Snack>>,
}

impl Default for SnackContext {
	fn default() -> Self {
		SnackContext {
			current: RwSignal::new(None),
		}
	}
}

impl SnackContext {
	/// Shows a snack with the given message and status.
	pub fn show(&self, message: impl Into<String>, status: impl Into<String>) {
		self.current.set(Some(Snack {
			message: message.into(),
			status: status.into(),
		}));
	}

	/// Takes the current snack off screen.
	pub fn dismiss(&self) {
		self.current.set(None);
	}
}

/// Provides the [`SnackContext`] if none is present yet.
pub fn provide_snack() {
	if use_context::<SnackContext>().is_none() {
		provide_context(SnackContext::default());
	}
}

/// Returns the [`SnackContext`] provided at the root.
pub fn expect_snack() -> SnackContext {
	use_context::<SnackContext>().expect("no SnackContext found")
}

/// Renders the current snack, if any. Clicking the snack dismisses it.
#[component]
pub fn Snackbar() -> impl IntoView {
	let snack = expect_snack();

	view! {
		<Show when=move || snack.current.get().is_some()>
			<div
				class=move || {
					format!(
						"snackbar br-sm p-md txt-white snackbar-{}",
						snack
							.current
							.get()
							.map(|snack| snack.status)
							.unwrap_or_default(),
					)
				}
				on:click=move |_| snack.dismiss()
			>
				{move || {
					snack
						.current
						.get()
						.map(|snack| snack.message)
						.unwrap_or_default()
				}}
			</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn show_replaces_the_current_snack() {
		let snack = SnackContext::default();
		snack.show("Created", "success");
		snack.show("Updated", "success");

		assert_eq!(
			snack.current.get_untracked(),
			Some(Snack {
				message: "Updated".to_owned(),
				status: "success".to_owned(),
			})
		);

		snack.dismiss();
		assert_eq!(snack.current.get_untracked(), None);
	}
}
