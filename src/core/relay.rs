use super::constants::{RELAY_PUBLIC_KEY, RELAY_SERVICE_ID, RELAY_TEMPLATE_ID};

/// Identifiers for the email-relay account the contact form posts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub public_key: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            public_key: RELAY_PUBLIC_KEY,
            service_id: RELAY_SERVICE_ID,
            template_id: RELAY_TEMPLATE_ID,
        }
    }
}

/// Alert text for a finished submission; `Err` carries the relay's detail.
pub fn outcome_message(result: Result<(), &str>) -> String {
    match result {
        Ok(()) => "✅ Message sent successfully!".to_string(),
        Err(detail) => format!("❌ Failed to send message: {}", detail),
    }
}
