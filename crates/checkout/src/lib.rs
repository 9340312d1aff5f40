//! Checkout serialization module.
//!
//! Turns the cart's entries into structured order lines, renders them as a
//! deterministic plain-text order message, and wraps the result in a
//! percent-encoded messaging deep link. Aggregation stays in the cart crate;
//! this crate only serializes what the cart already computed.

pub mod deeplink;
pub mod message;

pub use deeplink::DeepLinkConfig;
pub use message::{OrderLine, OrderMessage};
