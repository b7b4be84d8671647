use crate::domain::values::source_result::HasRecords;
use serde::{Deserialize, Serialize};

/// Narrative competitive analysis produced by the remote language model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveInsight {
    pub analysis: String,
    pub metadata: Option<InsightMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightMetadata {
    pub model: Option<String>,
    pub total_tokens: Option<u64>,
    pub query_number: Option<u64>,
}

impl HasRecords for CompetitiveInsight {
    fn has_records(&self) -> bool {
        !self.analysis.trim().is_empty()
    }
}
