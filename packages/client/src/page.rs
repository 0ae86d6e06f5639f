//! The host-page seam.
//!
//! The portal client renders nothing itself. Whatever hosts it (a browser
//! page, a terminal, a test harness) hands over a [`Page`]: the minimal set
//! of capabilities the orchestration needs — somewhere to raise alerts, the
//! page-scoped store, navigation, and one view per collection. Everything
//! behind these traits is out of the client's hands; it only calls in.

use std::sync::Arc;

use astropost_api::{Address, CreditCard, Feedback};

use crate::alert::AlertSink;
use crate::session::SessionStore;

/// Page navigation.
pub trait Navigator: Send + Sync {
    /// Replace the current location with `location`.
    fn replace(&self, location: &str);
}

/// A rendered collection that is always replaced wholesale.
///
/// `replace_all` discards whatever the view showed before; rows arrive in
/// server order and the view must preserve it.
pub trait CollectionView<T>: Send + Sync {
    fn replace_all(&self, items: &[T]);
}

/// View that renders nothing. For hosts that do not display a given
/// collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardView;

impl<T> CollectionView<T> for DiscardView {
    fn replace_all(&self, _items: &[T]) {}
}

/// Handles to everything the host exposes to the client.
#[derive(Clone)]
pub struct Page {
    pub alerts: Arc<dyn AlertSink>,
    pub store: Arc<dyn SessionStore>,
    pub navigator: Arc<dyn Navigator>,
    pub addresses: Arc<dyn CollectionView<Address>>,
    pub credit_cards: Arc<dyn CollectionView<CreditCard>>,
    pub feedback: Arc<dyn CollectionView<Feedback>>,
}
