mod book;
mod dashboard;
mod history;
mod payment;

pub use book::BookRide;
pub use dashboard::RiderDashboard;
pub use history::RideHistory;
pub use payment::Payment;
