//! Chart configuration.
//!
//! A `ChartConfig` is an immutable value object passed explicitly into
//! every computation. There is no process-wide mode: two charts with
//! different ayanamsas can be computed concurrently without touching
//! each other. All names parse fail-closed; an unrecognized name is an
//! `UnknownConfig` error, never a silent default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use nadi_base::NadiError;

/// Sidereal zero-point convention.
///
/// The ephemeris collaborator applies this offset before longitudes
/// reach the engine; the engine carries it only to echo the convention
/// in output and to keep request configuration explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ayanamsa {
    #[default]
    Krishnamurti,
    KrishnamurtiOld,
    Lahiri,
}

impl Ayanamsa {
    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Krishnamurti => "Krishnamurti",
            Self::KrishnamurtiOld => "KrishnamurtiOld",
            Self::Lahiri => "Lahiri",
        }
    }
}

impl FromStr for Ayanamsa {
    type Err = NadiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Krishnamurti" | "KP" => Ok(Self::Krishnamurti),
            "KrishnamurtiOld" | "KP_OLD" => Ok(Self::KrishnamurtiOld),
            "Lahiri" => Ok(Self::Lahiri),
            other => Err(NadiError::UnknownConfig(format!("ayanamsa: {other}"))),
        }
    }
}

/// House system used by the ephemeris collaborator to compute cusps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HouseSystem {
    #[default]
    Placidus,
    Equal,
}

impl HouseSystem {
    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Equal => "Equal",
        }
    }
}

impl FromStr for HouseSystem {
    type Err = NadiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Placidus" => Ok(Self::Placidus),
            "Equal" => Ok(Self::Equal),
            other => Err(NadiError::UnknownConfig(format!("house system: {other}"))),
        }
    }
}

/// Lunar node model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeMode {
    #[default]
    Mean,
    True,
}

impl NodeMode {
    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "Mean",
            Self::True => "True",
        }
    }
}

impl FromStr for NodeMode {
    type Err = NadiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mean" => Ok(Self::Mean),
            "True" => Ok(Self::True),
            other => Err(NadiError::UnknownConfig(format!("node mode: {other}"))),
        }
    }
}

/// House ownership convention.
///
/// `CuspSign` reads each house's owner off the sign its own cusp falls
/// in; `WholeSign` counts signs forward from the ascendant sign and
/// ignores the cusp's sign. Both are legitimate KP conventions and
/// give different owners for latitudes where cusps skip or repeat
/// signs, so the choice is per-computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OwnershipMode {
    #[default]
    CuspSign,
    WholeSign,
}

impl OwnershipMode {
    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CuspSign => "CuspSign",
            Self::WholeSign => "WholeSign",
        }
    }
}

impl FromStr for OwnershipMode {
    type Err = NadiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CuspSign" => Ok(Self::CuspSign),
            "WholeSign" => Ok(Self::WholeSign),
            other => Err(NadiError::UnknownConfig(format!("ownership mode: {other}"))),
        }
    }
}

/// Complete per-computation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    pub ayanamsa: Ayanamsa,
    pub house_system: HouseSystem,
    pub node_mode: NodeMode,
    pub ownership: OwnershipMode,
}
