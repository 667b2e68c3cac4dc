mod view;
mod view_model;

pub use view::{CategoryAddPage, CategoryEditPage};
pub use view_model::CategoryDetailsViewModel;
