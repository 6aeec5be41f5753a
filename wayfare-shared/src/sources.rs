use serde::{Deserialize, Serialize};

/// A citation attached to generated guide text (title + URL), passed
/// through the pipeline unmodified and order-preserving.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroundingSource {
    pub title: Option<String>,
    pub uri: Option<String>,
}
