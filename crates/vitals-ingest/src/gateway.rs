//! Classification of AI gateway error statuses.

use std::fmt;

/// Non-success answer from the AI completion gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayFailure {
    /// HTTP 429.
    RateLimited,
    /// HTTP 402.
    CreditsDepleted,
    /// Any other non-2xx status.
    Status(u16),
}

impl GatewayFailure {
    /// Classify an HTTP status; `None` for success statuses.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            429 => Some(Self::RateLimited),
            402 => Some(Self::CreditsDepleted),
            other => Some(Self::Status(other)),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RateLimited => "Rate limit exceeded. Please try again in a moment.",
            Self::CreditsDepleted => "AI credits depleted. Please add credits to continue.",
            Self::Status(_) => "AI processing failed",
        }
    }

    /// Whether retrying later can succeed without user action.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited => true,
            Self::CreditsDepleted => false,
            Self::Status(status) => *status >= 500,
        }
    }
}

impl fmt::Display for GatewayFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => f.write_str("rate limited (429)"),
            Self::CreditsDepleted => f.write_str("payment required (402)"),
            Self::Status(status) => write!(f, "status {status}"),
        }
    }
}
