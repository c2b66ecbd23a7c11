//! Centralized constants for the default endpoint and UA.

/// EDGAR asks automated clients to identify themselves with a descriptive agent.
pub(crate) const USER_AGENT: &str = concat!(
    "edgar-insiders/",
    env!("CARGO_PKG_VERSION"),
    " (insider summary tool; admin@example.com)"
);

/// EDGAR "ownership by issuer" page; `CIK` and `start` are added per request.
pub(crate) const DEFAULT_BASE_OWNERSHIP: &str = "https://www.sec.gov/cgi-bin/own-disp";

/// Number of rows EDGAR returns per ownership page.
pub const PAGE_SIZE: usize = 80;
