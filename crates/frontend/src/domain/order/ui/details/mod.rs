mod status_card;
mod view;
mod view_model;

pub use view::OrderDetailsPage;
pub use view_model::OrderDetailsViewModel;
