pub mod http_api;
pub mod portfolio_api;
pub mod preferences;
