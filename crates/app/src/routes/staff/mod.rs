mod analytics;
mod dashboard;
mod rides;
mod users;

pub use analytics::Analytics;
pub use dashboard::StaffDashboard;
pub use rides::RideManagement;
pub use users::UserManagement;
