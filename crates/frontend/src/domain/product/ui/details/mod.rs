mod view;
mod view_model;

pub use view::{ProductAddPage, ProductEditPage};
pub use view_model::{subcategory_options, ProductDetailsViewModel};
