pub mod api_error;
pub mod config;
pub mod endpoints;
pub mod list_view;
pub mod validation;
