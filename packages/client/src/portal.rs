//! Session-bound request orchestration.
//!
//! [`Portal`] is the one object a host drives. Each public method is a
//! complete user-visible operation with the same shape:
//!
//! ```text
//! control event ─ gate ─ session resolve ─ HTTP call ─ envelope check
//!                                                        │
//!                                     success effect ◄───┴───► danger alert
//! ```
//!
//! Operations never return errors; every failure, business or transport, is
//! recovered at the operation boundary and surfaced through the page's
//! [`AlertSink`](crate::alert::AlertSink) as a danger alert carrying the
//! error's display text. Nothing retries, nothing is cancelled, and the
//! HTTP status code is never consulted: the portal serves its `{error,
//! result}` envelope on error statuses too, and the envelope alone decides
//! the outcome.
//!
//! Gated operations (`login`, `add_address`, `add_credit_card`) hold their
//! originating [`Trigger`] pending for the whole flow, session probe
//! included. The list operations have no originating control; they are the
//! refresh half of the adds and run ungated.

use std::sync::Arc;

use reqwest::multipart;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use astropost_api::{
    Address, CreditCard, Credentials, Envelope, Feedback, FormFields, PortalRoutes,
};

use crate::error::ClientError;
use crate::gate::{self, Trigger};
use crate::page::Page;
use crate::session::SessionCache;

/// Location the navigator receives after a successful login.
pub const APP_ROOT: &str = "/";

/// Confirmation copy for a stored address.
pub const ADDRESS_ADDED: &str = "Your address has been added successfully!";

/// Confirmation copy for a stored credit card.
pub const CARD_ADDED: &str = "Your credit card has been added successfully!";

/// Client for one portal deployment, bound to one host [`Page`].
pub struct Portal {
    http: reqwest::Client,
    routes: PortalRoutes,
    session: SessionCache,
    page: Page,
}

impl Portal {
    /// Build a client for the portal at `base_url`.
    ///
    /// The underlying HTTP client keeps a cookie jar (the portal session
    /// rides on a cookie) and sets no timeout: a hung request keeps its
    /// control disabled rather than failing behind the user's back.
    pub fn new(base_url: impl Into<String>, page: Page) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        let routes = PortalRoutes::new(base_url);
        let session = SessionCache::new(Arc::clone(&page.store), http.clone(), routes.clone());
        Ok(Self {
            http,
            routes,
            session,
            page,
        })
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Authenticate with `credentials` and enter the application.
    ///
    /// On success the returned identity is recorded as the session's user
    /// and the page navigates to [`APP_ROOT`]; no alert is shown, the
    /// navigation is the feedback.
    pub async fn login(&self, trigger: &dyn Trigger, credentials: &Credentials) {
        gate::run(trigger, async {
            if let Err(error) = self.submit_login(credentials).await {
                self.fail("login", error);
            }
        })
        .await;
    }

    /// Store a delivery address, then refresh the address view.
    ///
    /// The refresh runs after the trigger is released; the control is held
    /// pending for the add itself, not for the reload.
    pub async fn add_address(&self, trigger: &dyn Trigger, address: &Address) {
        let added = gate::run(trigger, async {
            match self.submit_address(address).await {
                Ok(()) => {
                    self.page.alerts.success(ADDRESS_ADDED);
                    true
                }
                Err(error) => {
                    self.fail("add-address", error);
                    false
                }
            }
        })
        .await;

        if added {
            self.list_addresses().await;
        }
    }

    /// Replace the address view with the account's addresses, in server
    /// order.
    pub async fn list_addresses(&self) {
        if let Err(error) = self.refresh_addresses().await {
            self.fail("list-addresses", error);
        }
    }

    /// Store a credit card, then refresh the card view.
    pub async fn add_credit_card(&self, trigger: &dyn Trigger, card: &CreditCard) {
        let added = gate::run(trigger, async {
            match self.submit_credit_card(card).await {
                Ok(()) => {
                    self.page.alerts.success(CARD_ADDED);
                    true
                }
                Err(error) => {
                    self.fail("add-credit-card", error);
                    false
                }
            }
        })
        .await;

        if added {
            self.list_credit_cards().await;
        }
    }

    /// Replace the card view with the account's cards, in server order.
    pub async fn list_credit_cards(&self) {
        if let Err(error) = self.refresh_credit_cards().await {
            self.fail("list-credit-cards", error);
        }
    }

    /// Replace the feedback view with the portal's public feedback feed.
    ///
    /// Needs no session; the feed is anonymous. `offset` skips the given
    /// number of newest entries.
    pub async fn recent_feedback(&self, offset: Option<u32>) {
        if let Err(error) = self.refresh_feedback(offset).await {
            self.fail("recent-feedback", error);
        }
    }

    // -----------------------------------------------------------------------
    // Flows
    // -----------------------------------------------------------------------

    async fn submit_login(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let identity: String = self
            .post_form(&self.routes.login_url(), credentials)
            .await?
            .into_result()?;
        self.session.remember(&identity);
        self.page.navigator.replace(APP_ROOT);
        Ok(())
    }

    async fn submit_address(&self, address: &Address) -> Result<(), ClientError> {
        let user = self.session.resolve().await?;
        self.post_form::<serde_json::Value, _>(&self.routes.add_address_url(&user), address)
            .await?
            .acknowledge()?;
        Ok(())
    }

    async fn refresh_addresses(&self) -> Result<(), ClientError> {
        let user = self.session.resolve().await?;
        let addresses: Vec<Address> = self
            .fetch(&self.routes.addresses_url(&user))
            .await?
            .into_result()?;
        self.page.addresses.replace_all(&addresses);
        Ok(())
    }

    async fn submit_credit_card(&self, card: &CreditCard) -> Result<(), ClientError> {
        let user = self.session.resolve().await?;
        self.post_form::<serde_json::Value, _>(&self.routes.add_credit_card_url(&user), card)
            .await?
            .acknowledge()?;
        Ok(())
    }

    async fn refresh_credit_cards(&self) -> Result<(), ClientError> {
        let user = self.session.resolve().await?;
        let cards: Vec<CreditCard> = self
            .fetch(&self.routes.credit_cards_url(&user))
            .await?
            .into_result()?;
        self.page.credit_cards.replace_all(&cards);
        Ok(())
    }

    async fn refresh_feedback(&self, offset: Option<u32>) -> Result<(), ClientError> {
        let feedback: Vec<Feedback> = self
            .fetch(&self.routes.recent_feedback_url(offset))
            .await?
            .into_result()?;
        self.page.feedback.replace_all(&feedback);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Transport
    // -----------------------------------------------------------------------

    /// POST `payload` as multipart form data and decode the envelope.
    async fn post_form<T, P>(&self, url: &str, payload: &P) -> Result<Envelope<T>, ClientError>
    where
        T: DeserializeOwned + Default,
        P: FormFields,
    {
        let mut form = multipart::Form::new();
        for (name, value) in payload.fields() {
            form = form.text(name, value);
        }
        debug!("portal: POST {url}");
        let response = self.http.post(url).multipart(form).send().await?;
        Ok(response.json().await?)
    }

    /// GET `url` and decode the envelope.
    async fn fetch<T>(&self, url: &str) -> Result<Envelope<T>, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        debug!("portal: GET {url}");
        let response = self.http.get(url).send().await?;
        Ok(response.json().await?)
    }

    /// The single recovery boundary. Failures do not escape an operation;
    /// they are logged and shown to the user, nothing more.
    fn fail(&self, operation: &str, error: ClientError) {
        warn!("portal: {operation} failed: {error}");
        self.page.alerts.danger(&error.to_string());
    }
}
