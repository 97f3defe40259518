/// The client record and the request/response bodies of the clients
/// endpoints.
mod client;
/// The assignable-user reference record.
mod user;

pub use self::{client::*, user::*};
