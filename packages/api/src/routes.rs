//! Endpoint addressing.
//!
//! All portal URLs are derived from a single base. Account-scoped routes
//! embed the username as a path segment, so it is percent-encoded here —
//! usernames are user-supplied and may contain anything.
//!
//! | Route                                   | Method | Session |
//! |-----------------------------------------|--------|---------|
//! | `/api/login`                            | POST   | issued  |
//! | `/api/user/{user}/add-address`          | POST   | required|
//! | `/api/user/{user}/get-addresses`        | GET    | required|
//! | `/api/user/{user}/add-credit-card`      | POST   | required|
//! | `/api/user/{user}/get-credit-cards`     | GET    | required|
//! | `/api/recent-feedback[?offset=N]`       | GET    | none    |

/// URL builder for one portal deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalRoutes {
    base: String,
}

impl PortalRoutes {
    /// Create a route set rooted at `base`, e.g. `https://portal.example`.
    ///
    /// A trailing slash on the base is tolerated and stripped.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// The base URL this route set was built from, without trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn login_url(&self) -> String {
        format!("{}/api/login", self.base)
    }

    pub fn add_address_url(&self, username: &str) -> String {
        format!(
            "{}/api/user/{}/add-address",
            self.base,
            urlencoding::encode(username)
        )
    }

    pub fn addresses_url(&self, username: &str) -> String {
        format!(
            "{}/api/user/{}/get-addresses",
            self.base,
            urlencoding::encode(username)
        )
    }

    pub fn add_credit_card_url(&self, username: &str) -> String {
        format!(
            "{}/api/user/{}/add-credit-card",
            self.base,
            urlencoding::encode(username)
        )
    }

    pub fn credit_cards_url(&self, username: &str) -> String {
        format!(
            "{}/api/user/{}/get-credit-cards",
            self.base,
            urlencoding::encode(username)
        )
    }

    /// Feedback listing, optionally skipping the `offset` newest entries.
    pub fn recent_feedback_url(&self, offset: Option<u32>) -> String {
        match offset {
            Some(offset) => format!("{}/api/recent-feedback?offset={offset}", self.base),
            None => format!("{}/api/recent-feedback", self.base),
        }
    }
}
