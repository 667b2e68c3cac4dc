//! Add and edit forms for dashboard users.
//!
//! - view_model.rs: form state, validation and save command
//! - view.rs: the two pages sharing one form

mod view;
mod view_model;

pub use view::{UserAddPage, UserEditPage};
pub use view_model::UserDetailsViewModel;
