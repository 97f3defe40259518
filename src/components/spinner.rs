use crate::prelude::*;

/// A spinning loading indicator.
#[component]
pub fn Spinner(
	/// Additional class names to apply to the spinner, if any.
	#[prop(into, optional)]
	class: String,
) -> impl IntoView {
	view! { <span class=format!("spinner {class}")></span> }
}
