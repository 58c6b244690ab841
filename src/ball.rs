use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Coverstock category, classified once from free text at ingestion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Coverstock {
    Solid,
    Hybrid,
    Pearl,
    Urethane,
    #[default]
    Unknown,
}

impl Coverstock {
    /// Case-insensitive keyword match. A hybrid description often also
    /// names its solid/pearl parents, so "hybrid" is checked first. A hybrid
    /// that only names its pearl parent ("Pearl Hybrid") reads as Pearl, so it
    /// keeps the shiny-cover bonuses on light oil and slow speed; Pearl
    /// earns the transition bonus a Hybrid would.
    pub fn classify(text: &str) -> Self {
        let t = text.to_ascii_lowercase();
        if t.contains("hybrid") {
            if t.contains("pearl") && !t.contains("solid") {
                Self::Pearl
            } else {
                Self::Hybrid
            }
        } else if t.contains("urethane") {
            Self::Urethane
        } else if t.contains("pearl") {
            Self::Pearl
        } else if t.contains("solid") {
            Self::Solid
        } else {
            Self::Unknown
        }
    }

    pub fn from_optional(text: Option<&str>) -> Self {
        text.map(Self::classify).unwrap_or_default()
    }

    /// Pearl or urethane: the covers that read the lane late and clean.
    #[inline]
    pub fn is_shiny(&self) -> bool {
        matches!(self, Self::Pearl | Self::Urethane)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Core {
    #[default]
    Symmetric,
    Asymmetric { int_diff: f64 },
}

impl Core {
    /// NaN means no measurement, i.e. symmetric.
    pub fn from_int_diff(int_diff: Option<f64>) -> Self {
        match int_diff {
            Some(v) if v.is_finite() => Self::Asymmetric { int_diff: v },
            _ => Self::Symmetric,
        }
    }

    #[inline]
    pub fn is_asymmetric(&self) -> bool {
        matches!(self, Self::Asymmetric { .. })
    }

    pub fn int_diff(&self) -> Option<f64> {
        match self {
            Self::Symmetric => None,
            Self::Asymmetric { int_diff } => Some(*int_diff),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub name: String,
    pub rg: f64,
    pub diff: f64,
    pub core: Core,
    pub coverstock: Coverstock,
    pub coverstock_name: Option<String>,
    pub image: Option<String>,
}

impl Ball {
    pub fn new(name: impl Into<String>, rg: f64, diff: f64) -> Self {
        Self {
            name: name.into(),
            rg,
            diff,
            core: Core::Symmetric,
            coverstock: Coverstock::Unknown,
            coverstock_name: None,
            image: None,
        }
    }

    pub fn with_core(mut self, core: Core) -> Self {
        self.core = core;
        self
    }

    pub fn with_coverstock(mut self, coverstock: Coverstock) -> Self {
        self.coverstock = coverstock;
        self
    }

    pub fn is_scorable(&self) -> bool {
        self.rg.is_finite() && self.diff.is_finite()
    }
}
