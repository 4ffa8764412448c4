use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod location;
pub mod route;

pub trait ExampleData {
    fn example_data() -> Self;
}

/// Attaches the nurse identifier to a record whose storage key it is.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithNurseId<T> {
    pub nurse_id: String,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithNurseId<T> {
    pub fn new(nurse_id: impl Into<String>, content: T) -> Self {
        Self {
            nurse_id: nurse_id.into(),
            content,
        }
    }
}
