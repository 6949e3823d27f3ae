#[cfg(test)]
use mockall::automock;

pub const SAVE_PRECONDITION_FAILED: &str = "Please provide a valid address and select a category.";
pub const ADDRESS_SAVED: &str = "Address saved successfully!";
pub const SAVE_FAILED: &str = "Failed to save address.";
pub const LOCATION_DENIED: &str = "Location permission denied or unavailable.";
pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported on this device.";
pub const ADDRESS_RESOLUTION_FAILED: &str = "Failed to resolve address.";

/// Blocking, user-facing messages.
#[cfg_attr(test, automock)]
pub trait Notices: Send + Sync {
    fn alert(&self, message: &str);
}

pub struct TerminalNotices;

impl Notices for TerminalNotices {
    fn alert(&self, message: &str) {
        println!("[notice] {message}");
    }
}
