pub mod home;

pub use home::ui::DashboardHome;
