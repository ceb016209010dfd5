use gloo::console;

/// Console logger with a component tag, so messages from different views
/// stay distinguishable in the browser log.
pub struct Logger;

impl Logger {
    pub fn warn(component: &str, message: &str) {
        console::warn!(format!("[{}] {}", component, message));
    }

    pub fn error(component: &str, message: &str) {
        console::error!(format!("[{}] {}", component, message));
    }
}
