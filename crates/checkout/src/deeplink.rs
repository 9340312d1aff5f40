//! Messaging deep-link construction.

use serde::{Deserialize, Serialize};

use crate::message::CONTACT_INQUIRY;

/// Where order messages get handed off.
///
/// The recipient is a fixed configuration value (a phone-number-like token),
/// never derived from cart state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkConfig {
    /// Messaging service base, without trailing slash.
    pub base_url: String,
    /// Recipient token appended as a path segment.
    pub recipient: String,
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wa.me".to_owned(),
            recipient: "525630902942".to_owned(),
        }
    }
}

impl DeepLinkConfig {
    /// Build `<base>/<recipient>?text=<encoded>` for a rendered message.
    ///
    /// The whole message is percent-encoded as one query value, so newlines
    /// become `%0A` and reserved characters can never break the link.
    pub fn order_url(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url,
            self.recipient,
            urlencoding::encode(message)
        )
    }

    /// Deep link for the fixed catalog inquiry (header contact button).
    pub fn contact_url(&self) -> String {
        self.order_url(CONTACT_INQUIRY)
    }
}
