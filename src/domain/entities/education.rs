use serde::Deserialize;
use serde_json::Value;

/// `/educations` and `/settings` return loosely shaped records that the site
/// fetches without rendering; they are kept as raw JSON.
pub type Education = Value;
pub type SiteSetting = Value;

/// The `{ "data": ... }` wrapper used by the project and skill endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}
