pub mod errors;

use std::io::Write;
use log::warn;
use notify_rust::{Notification, Timeout};
use crate::manager_notify::errors::NotifyError;
use crate::snowfall::WINDOW_HOURS;

pub const ALERT_TITLE: &str = "Snowfall Alert";

/// A way of presenting a snowfall alert to the user.
///
/// Implementations may block until the user has seen or dismissed the alert.
pub trait Notifier {
    fn present(&self, amount_cm: f64) -> Result<(), NotifyError>;
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn present(&self, amount_cm: f64) -> Result<(), NotifyError> {
        (**self).present(amount_cm)
    }
}

/// Returns the alert text for the given amount of snow
///
/// # Arguments
///
/// * 'amount_cm' - accumulated snowfall in centimeters
pub fn alert_message(amount_cm: f64) -> String {
    format!("Heavy snowfall forecast: {:.2} cm ({:.0} mm) expected in the next {} hours.",
            amount_cm, amount_cm * 10.0, WINDOW_HOURS)
}

/// Presents alerts as system notifications
pub struct Desktop {
    app_name: String,
}

impl Desktop {
    pub fn new(app_name: &str) -> Desktop {
        Desktop { app_name: app_name.to_string() }
    }
}

impl Notifier for Desktop {
    /// Shows a notification that stays until dismissed. On freedesktop systems the call
    /// returns only once the notification has been closed or acted upon.
    fn present(&self, amount_cm: f64) -> Result<(), NotifyError> {
        let mut notification = Notification::new();
        notification
            .appname(&self.app_name)
            .summary(ALERT_TITLE)
            .body(&alert_message(amount_cm))
            .timeout(Timeout::Never);

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            let handle = notification.show().map_err(|e| NotifyError::Desktop(e.to_string()))?;
            handle.wait_for_action(|_| {});
        }
        #[cfg(not(all(unix, not(target_os = "macos"))))]
        {
            notification.show().map_err(|e| NotifyError::Desktop(e.to_string()))?;
        }

        Ok(())
    }
}

/// Presents alerts in the log and rings the terminal bell
pub struct LogLine;

impl Notifier for LogLine {
    fn present(&self, amount_cm: f64) -> Result<(), NotifyError> {
        warn!("{}: {}", ALERT_TITLE, alert_message(amount_cm));

        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();

        Ok(())
    }
}
