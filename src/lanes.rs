use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::Thresholds;

/// Lane surfaces with their USBC roughness measurements.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum LaneSurface {
    #[default]
    #[strum(to_string = "Wood (New)", serialize = "wood_new")]
    WoodNew,
    #[strum(to_string = "Wood (Old)", serialize = "wood_old")]
    WoodOld,
    #[strum(to_string = "Guardian Overlay", serialize = "guardian_overlay")]
    GuardianOverlay,
    #[strum(to_string = "Murray", serialize = "murray")]
    Murray,
    #[strum(to_string = "AMF SPL", serialize = "amf_spl")]
    AmfSpl,
    #[strum(to_string = "AMF HPL", serialize = "amf_hpl")]
    AmfHpl,
    #[strum(to_string = "Anvilane 1", serialize = "anvilane_1")]
    #[serde(rename = "anvilane_1")]
    Anvilane1,
    #[strum(to_string = "Anvilane 2", serialize = "anvilane_2")]
    #[serde(rename = "anvilane_2")]
    Anvilane2,
    #[strum(to_string = "Pro Anvilane", serialize = "pro_anvilane")]
    ProAnvilane,
}

impl LaneSurface {
    /// Surface roughness (SR).
    pub fn sr(&self) -> f64 {
        match self {
            Self::WoodNew => 1.9,
            Self::WoodOld => 1.8,
            Self::GuardianOverlay => 1.7,
            Self::Murray => 1.55,
            Self::AmfSpl => 1.35,
            Self::AmfHpl => 1.5,
            Self::Anvilane1 => 1.4,
            Self::Anvilane2 => 1.35,
            Self::ProAnvilane => 1.3,
        }
    }

    /// Average roughness (Ra).
    pub fn ra(&self) -> f64 {
        match self {
            Self::WoodNew => 0.8,
            Self::WoodOld => 0.7,
            Self::GuardianOverlay => 0.65,
            Self::Murray => 0.5,
            Self::AmfSpl => 0.3,
            Self::AmfHpl => 0.45,
            Self::Anvilane1 => 0.35,
            Self::Anvilane2 => 0.3,
            Self::ProAnvilane => 0.25,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::WoodNew => "High friction, softer surface, hooks early",
            Self::WoodOld => "Worn wood, more track wear, slightly smoother",
            Self::GuardianOverlay => "Thin plastic overlay on wood, reduces wear",
            Self::Murray => "Medium-friction synthetic lane",
            Self::AmfSpl => "Medium-low friction synthetic",
            Self::AmfHpl => "Lower friction synthetic, smooth surface",
            Self::Anvilane1 => "Early generation Brunswick synthetic",
            Self::Anvilane2 => "Improved synthetic with smoother front",
            Self::ProAnvilane => "Modern low-friction synthetic",
        }
    }

    pub fn effect(&self) -> &'static str {
        match self {
            Self::WoodNew => "Strong early hook and less backend",
            Self::WoodOld => "Earlier hook, less consistent backend",
            Self::GuardianOverlay => "Smoother front part, moderate backend",
            Self::Murray => "Predictable motion, moderate backend",
            Self::AmfSpl => "Longer skid, later hook",
            Self::AmfHpl => "Skid through fronts, sharper backend",
            Self::Anvilane1 => "Long skid, sharp backend",
            Self::Anvilane2 => "Very long skid, clean backend reaction",
            Self::ProAnvilane => "Maximum skid, strongest backend",
        }
    }

    /// Manufacturer-rated friction, independent of the computed index.
    pub fn rated_friction(&self) -> &'static str {
        match self {
            Self::WoodNew => "High",
            Self::WoodOld => "Medium-High",
            Self::GuardianOverlay | Self::Murray => "Medium",
            Self::AmfSpl | Self::AmfHpl => "Medium-Low",
            Self::Anvilane1 | Self::Anvilane2 | Self::ProAnvilane => "Low",
        }
    }

    /// `(SR - Ra) * 1.5`. Higher means more traction.
    pub fn friction_index(&self) -> f64 {
        (self.sr() - self.ra()) * 1.5
    }
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrictionBand {
    #[strum(to_string = "High Friction")]
    High,
    #[strum(to_string = "Medium-High Friction")]
    MediumHigh,
    #[strum(to_string = "Medium Friction")]
    Medium,
    #[strum(to_string = "Low Friction")]
    Low,
}

impl FrictionBand {
    pub fn from_index(index: f64, t: &Thresholds) -> Self {
        if index >= t.friction_high {
            Self::High
        } else if index >= t.friction_medium_high {
            Self::MediumHigh
        } else if index >= t.friction_medium {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

pub fn get_all_surfaces() -> Vec<LaneSurface> {
    LaneSurface::iter().collect()
}
