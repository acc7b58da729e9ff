use serde::{Deserialize, Serialize};

pub const DEFAULT_DISPLAY_NAME: &str = "Trader";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_NAME)
    }
}
