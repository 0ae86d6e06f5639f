//! Wire contract for the AstroPost customer portal.
//!
//! This crate encodes the portal's JSON-over-HTTP API as Rust types: the
//! `{error, result}` response envelope, the account records it carries, the
//! multipart form payloads the portal accepts, and the route layout. It
//! holds no HTTP machinery of its own; the `astropost` client crate (and
//! any test double standing in for the portal) builds on it.
//!
//! # Endpoints covered
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | POST | `/api/login` | [`Credentials`] → [`Envelope`]`<String>` (username) |
//! | POST | `/api/user/{user}/add-address` | [`Address`] → [`Envelope`]`<String>` |
//! | GET | `/api/user/{user}/get-addresses` | → [`Envelope`]`<Vec<Address>>` |
//! | POST | `/api/user/{user}/add-credit-card` | [`CreditCard`] → [`Envelope`]`<String>` |
//! | GET | `/api/user/{user}/get-credit-cards` | → [`Envelope`]`<Vec<CreditCard>>` |
//! | GET | `/api/recent-feedback` | → [`Envelope`]`<Vec<Feedback>>` |
//!
//! Two wire quirks matter to every consumer. The envelope's `error` field
//! outranks `result` whenever it is a non-empty string, and the portal
//! serves that same envelope shape on HTTP error statuses too, so decoding
//! must not short-circuit on the status code.

pub mod address;
pub mod credit;
pub mod envelope;
pub mod feedback;
pub mod form;
pub mod routes;

pub use address::Address;
pub use credit::CreditCard;
pub use envelope::{Envelope, EnvelopeError};
pub use feedback::Feedback;
pub use form::{Credentials, FormFields};
pub use routes::PortalRoutes;
