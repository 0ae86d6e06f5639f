//! Session-aware client for the AstroPost customer portal.
//!
//! The portal's pages are thin: every button press turns into a JSON API
//! call, and this crate is the machinery behind those presses. It owns the
//! three contracts that make the portal feel coherent:
//!
//! - **lazy identity resolution** ([`SessionCache`]): account-bound calls
//!   learn the username from page storage, or from one credential-less
//!   probe, never more;
//! - **per-action gating** ([`gate`]): the originating control is disabled
//!   and busy from invocation to settlement, no matter how the action ends;
//! - **uniform failure surfacing** ([`Portal`]): business rejections and
//!   transport failures alike end as one danger alert, never a crash.
//!
//! Rendering, storage, and navigation stay on the host's side of the
//! [`Page`] seam; this crate only calls through it. The wire types live in
//! [`astropost_api`].

pub mod alert;
pub mod error;
pub mod gate;
pub mod page;
pub mod portal;
pub mod session;

pub use alert::{AlertSink, Severity, SilentAlerts};
pub use error::{ClientError, SESSION_EXPIRED_MESSAGE};
pub use gate::{InertTrigger, Trigger};
pub use page::{CollectionView, DiscardView, Navigator, Page};
pub use portal::{Portal, ADDRESS_ADDED, APP_ROOT, CARD_ADDED};
pub use session::{MemoryStore, SessionCache, SessionStore, IDENTITY_KEY};
