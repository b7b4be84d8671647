use serde::Serialize;
use std::fmt;

/// The five independent datasets that make up a dashboard refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    CostAnalysis,
    Insight,
    P2p,
    Stablecoin,
    CardPremiums,
}

impl SourceKind {
    pub const ALL: [SourceKind; 5] = [
        SourceKind::CostAnalysis,
        SourceKind::Insight,
        SourceKind::P2p,
        SourceKind::Stablecoin,
        SourceKind::CardPremiums,
    ];
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::CostAnalysis => write!(f, "cost-analysis"),
            SourceKind::Insight => write!(f, "insight"),
            SourceKind::P2p => write!(f, "p2p"),
            SourceKind::Stablecoin => write!(f, "stablecoin"),
            SourceKind::CardPremiums => write!(f, "card-premiums"),
        }
    }
}

/// Outcome of one source for one run. `Absent` covers both transport
/// failure and an empty payload; callers cannot tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum SourceResult<T> {
    Ok(T),
    Absent,
}

impl<T> SourceResult<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, SourceResult::Ok(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SourceResult::Absent)
    }

    pub fn as_ref(&self) -> SourceResult<&T> {
        match self {
            SourceResult::Ok(v) => SourceResult::Ok(v),
            SourceResult::Absent => SourceResult::Absent,
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            SourceResult::Ok(v) => Some(v),
            SourceResult::Absent => None,
        }
    }
}

/// Normalized payloads say whether they carry anything worth showing.
/// A payload without records is reported as `NoData`.
pub trait HasRecords {
    fn has_records(&self) -> bool;
}
