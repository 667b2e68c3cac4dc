mod dashboard;

pub use dashboard::DashboardHome;
