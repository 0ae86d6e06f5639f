//! User-facing notifications.
//!
//! The portal surfaces every outcome the same way: a transient alert with a
//! severity level and a one-line message. [`AlertSink`] is the seam between
//! this crate and whatever actually renders the alert; the library never
//! prints, it only calls the sink.

use std::fmt;

/// Visual weight of an alert. Mirrors the portal's four banner styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Warning,
    Success,
    Info,
}

impl Severity {
    /// The portal's style name for this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }

    /// Stock heading shown above the message when the caller supplies no
    /// title of its own.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Self::Danger => Some("An error has occurred!"),
            Self::Warning => Some("Warning!"),
            Self::Success | Self::Info => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver for user-facing alerts.
///
/// Callers must supply a non-empty `message`; `title` overrides the stock
/// [`Severity::heading`] when present. Implementations decide how (and
/// whether) to render.
pub trait AlertSink: Send + Sync {
    fn show(&self, severity: Severity, message: &str, title: Option<&str>);

    fn danger(&self, message: &str) {
        self.show(Severity::Danger, message, None);
    }

    fn success(&self, message: &str) {
        self.show(Severity::Success, message, None);
    }
}

/// Sink that drops every alert. For headless use and tests that do not
/// care about notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlerts;

impl AlertSink for SilentAlerts {
    fn show(&self, _severity: Severity, _message: &str, _title: Option<&str>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_exist_only_for_danger_and_warning() {
        assert_eq!(Severity::Danger.heading(), Some("An error has occurred!"));
        assert_eq!(Severity::Warning.heading(), Some("Warning!"));
        assert_eq!(Severity::Success.heading(), None);
        assert_eq!(Severity::Info.heading(), None);
    }

    #[test]
    fn style_names_match_the_portal() {
        assert_eq!(Severity::Danger.as_str(), "danger");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
