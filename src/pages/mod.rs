/// The clients page: the table, the modal and the create/edit form.
pub mod clients;

pub use self::clients::*;
