mod dashboard;
mod earnings;
mod rides;

pub use dashboard::DriverDashboard;
pub use earnings::Earnings;
pub use rides::ManageRides;

use crate::components::notify;
use shared_types::fixtures::DriverAction;
use shared_ui::Toasts;

fn announce(toast: Toasts, action: DriverAction) {
    notify(toast, action.tone(), action.message().to_string());
}
