use shared_types::fixtures::ActionTone;
use shared_ui::{ToastOptions, Toasts};

/// Raise a toast styled by the action's tone.
pub fn notify(toast: Toasts, tone: ActionTone, message: String) {
    match tone {
        ActionTone::Success => toast.success(message, ToastOptions::new()),
        ActionTone::Info => toast.info(message, ToastOptions::new()),
        ActionTone::Warning => toast.warning(message, ToastOptions::new()),
        ActionTone::Error => toast.error(message, ToastOptions::new()),
    }
}
