//! Trait targets and per-class target bundles.
//!
//! A trait target is one sample point the optimizer fits against: "at
//! trait level N this class currently rolls K dice worth an expected M
//! damage". Target extraction from raw breakpoint records happens
//! upstream; the planner consumes these as already-validated data.

use serde::{Deserialize, Serialize};

/// Rarity tier of a trait breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitColor {
    /// Early breakpoints.
    Bronze,
    /// Mid-tier breakpoints.
    Silver,
    /// Late breakpoints.
    Gold,
    /// Capstone breakpoints.
    Prismatic,
}

impl std::fmt::Display for TraitColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bronze => write!(f, "bronze"),
            Self::Silver => write!(f, "silver"),
            Self::Gold => write!(f, "gold"),
            Self::Prismatic => write!(f, "prismatic"),
        }
    }
}

/// A single expected-value sample to fit against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitTarget {
    /// Trait level (rune count) of this breakpoint.
    pub trait_level: u32,
    /// Expected value the existing multi-dice system produces here.
    pub target_ev: f64,
    /// Number of dice the existing system rolls at this breakpoint.
    pub dice_count: u32,
    /// Rarity tier of the breakpoint.
    pub color: TraitColor,
}

/// Every target for one character class, plus its trait range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTargets {
    /// Stable identifier, e.g. `"ember-warden"`.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Tier used when presenting this class's rows.
    pub color: TraitColor,
    /// Inclusive `[min, max]` trait range the class can reach.
    pub trait_range: (u32, u32),
    /// Breakpoint samples in ascending trait order.
    pub targets: Vec<TraitTarget>,
}

impl ClassTargets {
    /// Returns true if this class contributes no samples.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
