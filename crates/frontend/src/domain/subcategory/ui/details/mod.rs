mod view;
mod view_model;

pub use view::{SubCategoryAddPage, SubCategoryEditPage};
pub use view_model::SubCategoryDetailsViewModel;
