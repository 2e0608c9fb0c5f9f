//! KP chart assembly on top of `nadi_base`.
//!
//! Takes one ephemeris snapshot (sidereal longitudes, speeds, cusps,
//! ascendant) plus an explicit configuration, and produces the full
//! chart: house placement and ownership, per-planet lordship chains
//! and flags, signification sets, the career profile from the 6th and
//! 10th cuspal sub-lords, and the Vimshottari dasha report.

pub mod bhava;
pub mod career;
pub mod chart;
pub mod config;
pub mod flags;
pub mod significator;

pub use bhava::{house_of_longitude, house_owners, houses_owned_by, validate_cusps};
pub use career::{
    CareerProfile, CuspalSubLord, HitGrade, OBSTACLE_HOUSES, SUPPORT_HOUSES, career_profile,
    hit_grade, job_areas,
};
pub use chart::{
    AscendantInfo, ChartInput, ChartMeta, ChartResult, DashaReport, HouseInfo, PlanetInfo,
    compute_chart,
};
pub use config::{Ayanamsa, ChartConfig, HouseSystem, NodeMode, OwnershipMode};
pub use flags::{combustion_threshold, is_combust, is_retrograde};
pub use significator::{
    AgentRelation, HouseLink, NodeAgent, PlanetPosition, Provenance, SignificationSet,
    node_agents, planet_links, signification_set,
};
