pub mod confirm_dialog;
pub mod file_input;
pub mod form_field;
pub mod pagination_controls;
pub mod password_strength;
