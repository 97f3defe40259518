/// The snackbar and its shared notification channel.
mod snack;
/// A loading indicator.
mod spinner;

pub use self::{snack::*, spinner::*};
