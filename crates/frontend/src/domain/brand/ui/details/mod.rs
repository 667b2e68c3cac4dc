mod view;
mod view_model;

pub use view::{BrandAddPage, BrandEditPage};
pub use view_model::BrandDetailsViewModel;
