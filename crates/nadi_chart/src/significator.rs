//! Signification sets: the houses a graha stands for.
//!
//! A classical graha signifies the house it occupies plus every house
//! it owns. A lunar node additionally borrows from its agents: every
//! non-node graha conjunct with the node in one sign, or aspecting the
//! node by the fixed sign-count rules. Each contributed house carries
//! its provenance so downstream rule evaluation can weigh occupation
//! against ownership and own against borrowed.
//!
//! All output is sorted by house number; identical inputs always give
//! byte-identical sets.

use serde::Serialize;

use nadi_base::{Graha, angular_distance, rashi_from_longitude};

use crate::bhava::houses_owned_by;

/// How a house entered a signification set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Provenance {
    /// The graha itself occupies the house.
    Occupation,
    /// The graha owns the house's sign.
    Ownership,
    /// An agent of the node occupies the house.
    AgentOccupation,
    /// An agent of the node owns the house's sign.
    AgentOwnership,
}

/// One house in a signification set, tagged with how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HouseLink {
    pub house: u8,
    pub provenance: Provenance,
}

/// How an agent relates to its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgentRelation {
    /// Same sign as the node.
    Conjunction,
    /// Aspects the node; the value is the inclusive sign count from
    /// the aspecting graha to the node (7 = opposition).
    Aspect(u8),
}

/// A non-node graha extending a node's significations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeAgent {
    pub graha: Graha,
    pub relation: AgentRelation,
}

/// A graha's position as the signification engine needs it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude in [0, 360).
    pub longitude: f64,
    /// House placement, 1-based.
    pub house: u8,
}

/// Signification sets for one graha at the three KP levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignificationSet {
    pub graha: Graha,
    /// Star lord's houses (strongest level).
    pub level1: Vec<HouseLink>,
    /// The graha's own houses.
    pub level2: Vec<HouseLink>,
    /// Sub-lord's houses (deciding level).
    pub level3: Vec<HouseLink>,
    /// Deduplicated union of levels 1 and 2, sorted ascending.
    pub total: Vec<u8>,
}

fn position_of(positions: &[PlanetPosition], graha: Graha) -> Option<PlanetPosition> {
    positions.iter().copied().find(|p| p.graha == graha)
}

/// Resolve the agents of a lunar node.
///
/// Agents are non-node grahas that either share the node's sign, or
/// aspect it: opposition (sign count 7) for any graha, gated by a
/// shortest-arc distance of at least 168 degrees; Mangal at sign
/// counts 4 and 8; Guru at 5 and 9; Shani at 3 and 10. The direction
/// is always graha-aspects-node, and the other node is never an
/// agent. Sign counts are inclusive: 1 means the same sign.
pub fn node_agents(node: Graha, positions: &[PlanetPosition]) -> Vec<NodeAgent> {
    let node_pos = match position_of(positions, node) {
        Some(p) if p.graha.is_node() => p,
        _ => return Vec::new(),
    };
    let node_sign = rashi_from_longitude(node_pos.longitude).rashi_index;

    let mut agents = Vec::new();
    for p in positions {
        if p.graha.is_node() {
            continue;
        }
        let p_sign = rashi_from_longitude(p.longitude).rashi_index;
        let count = ((node_sign as u16 + 12 - p_sign as u16) % 12) as u8 + 1;
        if count == 1 {
            agents.push(NodeAgent {
                graha: p.graha,
                relation: AgentRelation::Conjunction,
            });
            continue;
        }
        let dist = angular_distance(p.longitude, node_pos.longitude);
        let aspects = match p.graha {
            Graha::Mangal => count == 4 || count == 8,
            Graha::Guru => count == 5 || count == 9,
            Graha::Shani => count == 3 || count == 10,
            _ => false,
        };
        if aspects || (count == 7 && dist >= 168.0) {
            agents.push(NodeAgent {
                graha: p.graha,
                relation: AgentRelation::Aspect(count),
            });
        }
    }
    agents
}

/// The houses one graha signifies on its own behalf.
///
/// Occupation first, then owned houses; for a node the agents'
/// occupied and owned houses follow. A house already present is never
/// re-added, so the first provenance wins. The result is sorted by
/// house number.
pub fn planet_links(
    graha: Graha,
    positions: &[PlanetPosition],
    owners: &[Graha; 12],
) -> Vec<HouseLink> {
    let pos = match position_of(positions, graha) {
        Some(p) => p,
        None => return Vec::new(),
    };

    let mut links: Vec<HouseLink> = Vec::new();
    let push = |links: &mut Vec<HouseLink>, house: u8, provenance: Provenance| {
        if !links.iter().any(|l| l.house == house) {
            links.push(HouseLink { house, provenance });
        }
    };

    push(&mut links, pos.house, Provenance::Occupation);
    for house in houses_owned_by(owners, graha) {
        push(&mut links, house, Provenance::Ownership);
    }

    if graha.is_node() {
        for agent in node_agents(graha, positions) {
            if let Some(agent_pos) = position_of(positions, agent.graha) {
                push(&mut links, agent_pos.house, Provenance::AgentOccupation);
                for house in houses_owned_by(owners, agent.graha) {
                    push(&mut links, house, Provenance::AgentOwnership);
                }
            }
        }
    }

    links.sort_by_key(|l| l.house);
    links
}

/// Build the 3-level signification set for one graha.
///
/// Level 1 is the star lord's own set, level 2 the graha's, level 3
/// the sub-lord's. The total is the classic KP union of levels 1 and
/// 2, houses only, sorted and deduplicated.
pub fn signification_set(
    graha: Graha,
    star_lord: Graha,
    sub_lord: Graha,
    positions: &[PlanetPosition],
    owners: &[Graha; 12],
) -> SignificationSet {
    let level1 = planet_links(star_lord, positions, owners);
    let level2 = planet_links(graha, positions, owners);
    let level3 = planet_links(sub_lord, positions, owners);

    let mut total: Vec<u8> = level1.iter().chain(level2.iter()).map(|l| l.house).collect();
    total.sort_unstable();
    total.dedup();

    SignificationSet {
        graha,
        level1,
        level2,
        level3,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bhava::house_owners;
    use crate::config::OwnershipMode;

    const CUSPS: [f64; 12] = [
        10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0, 250.0, 280.0, 310.0, 340.0,
    ];

    fn owners() -> [Graha; 12] {
        house_owners(&CUSPS, 15.0, OwnershipMode::CuspSign).unwrap()
    }

    fn pos(graha: Graha, longitude: f64, house: u8) -> PlanetPosition {
        PlanetPosition {
            graha,
            longitude,
            house,
        }
    }

    #[test]
    fn classical_planet_occupation_and_ownership() {
        // Surya in house 3; it owns Simha, the sign of cusp 5 (130 deg).
        let positions = [pos(Graha::Surya, 75.0, 3)];
        let links = planet_links(Graha::Surya, &positions, &owners());
        assert_eq!(
            links,
            vec![
                HouseLink {
                    house: 3,
                    provenance: Provenance::Occupation
                },
                HouseLink {
                    house: 5,
                    provenance: Provenance::Ownership
                },
            ]
        );
    }

    #[test]
    fn occupied_and_owned_same_house_kept_once() {
        // Surya occupying house 5, which it also owns: one entry, the
        // occupation provenance wins.
        let positions = [pos(Graha::Surya, 135.0, 5)];
        let links = planet_links(Graha::Surya, &positions, &owners());
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].provenance, Provenance::Occupation);
    }

    #[test]
    fn conjunct_agent_detected() {
        // Rahu and Guru both in Simha (120-150).
        let positions = [pos(Graha::Rahu, 125.0, 5), pos(Graha::Guru, 140.0, 5)];
        let agents = node_agents(Graha::Rahu, &positions);
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].graha, Graha::Guru);
        assert_eq!(agents[0].relation, AgentRelation::Conjunction);
    }

    #[test]
    fn opposition_agent_needs_168_degrees() {
        // Surya 7 signs from Rahu but only 166 deg away: no aspect.
        let near = [pos(Graha::Rahu, 15.0, 1), pos(Graha::Surya, 181.0, 7)];
        assert!(node_agents(Graha::Rahu, &near).is_empty());

        // At 170 deg the opposition holds.
        let far = [pos(Graha::Rahu, 15.0, 1), pos(Graha::Surya, 185.0, 7)];
        let agents = node_agents(Graha::Rahu, &far);
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].relation, AgentRelation::Aspect(7));
    }

    #[test]
    fn mars_special_aspects() {
        // Mangal 4 signs behind Rahu (counting inclusively).
        let positions = [pos(Graha::Rahu, 100.0, 4), pos(Graha::Mangal, 10.0, 1)];
        let agents = node_agents(Graha::Rahu, &positions);
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].relation, AgentRelation::Aspect(4));

        // Guru at the same sign count does not aspect.
        let positions = [pos(Graha::Rahu, 100.0, 4), pos(Graha::Guru, 10.0, 1)];
        assert!(node_agents(Graha::Rahu, &positions).is_empty());
    }

    #[test]
    fn jupiter_and_saturn_special_aspects() {
        // Guru 5 signs behind Ketu.
        let positions = [pos(Graha::Ketu, 130.0, 5), pos(Graha::Guru, 10.0, 1)];
        let agents = node_agents(Graha::Ketu, &positions);
        assert_eq!(agents, vec![NodeAgent {
            graha: Graha::Guru,
            relation: AgentRelation::Aspect(5)
        }]);

        // Shani 3 signs behind Rahu.
        let positions = [pos(Graha::Rahu, 70.0, 3), pos(Graha::Shani, 10.0, 1)];
        let agents = node_agents(Graha::Rahu, &positions);
        assert_eq!(agents[0].relation, AgentRelation::Aspect(3));
    }

    #[test]
    fn aspect_direction_is_planet_to_node() {
        // Mangal 4 signs ahead of Rahu: the node would be "aspecting"
        // the planet, which does not count. Inclusive count from
        // Mangal to Rahu is 10 here, not 4.
        let positions = [pos(Graha::Rahu, 10.0, 1), pos(Graha::Mangal, 100.0, 4)];
        assert!(node_agents(Graha::Rahu, &positions).is_empty());
    }

    #[test]
    fn nodes_never_each_others_agents() {
        // Ketu is always 7 signs and 180 deg from Rahu, yet never an agent.
        let positions = [pos(Graha::Rahu, 15.0, 1), pos(Graha::Ketu, 195.0, 7)];
        assert!(node_agents(Graha::Rahu, &positions).is_empty());
        assert!(node_agents(Graha::Ketu, &positions).is_empty());
    }

    #[test]
    fn node_set_borrows_agent_houses() {
        // Rahu in house 5 with Guru conjunct; Guru occupies house 5
        // and owns houses 9 and 12 (Dhanu at cusp 250, Meena at 340).
        let positions = [pos(Graha::Rahu, 125.0, 5), pos(Graha::Guru, 140.0, 5)];
        let links = planet_links(Graha::Rahu, &positions, &owners());
        let houses: Vec<u8> = links.iter().map(|l| l.house).collect();
        assert_eq!(houses, vec![5, 9, 12]);
        assert_eq!(links[0].provenance, Provenance::Occupation);
        assert_eq!(links[1].provenance, Provenance::AgentOwnership);
    }

    #[test]
    fn total_is_union_of_levels_1_and_2() {
        let positions = [
            pos(Graha::Surya, 75.0, 3),
            pos(Graha::Chandra, 135.0, 5),
            pos(Graha::Shukra, 45.0, 2),
        ];
        let set = signification_set(
            Graha::Chandra,
            Graha::Surya,
            Graha::Shukra,
            &positions,
            &owners(),
        );
        let mut expected: Vec<u8> = set
            .level1
            .iter()
            .chain(set.level2.iter())
            .map(|l| l.house)
            .collect();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(set.total, expected);
        // Level 3 exists but stays out of the total.
        assert!(!set.level3.is_empty());
    }

    #[test]
    fn sets_sorted_and_deterministic() {
        let positions = [
            pos(Graha::Rahu, 125.0, 5),
            pos(Graha::Guru, 140.0, 5),
            pos(Graha::Shani, 15.0, 1),
        ];
        let a = planet_links(Graha::Rahu, &positions, &owners());
        let b = planet_links(Graha::Rahu, &positions, &owners());
        assert_eq!(a, b);
        assert!(a.windows(2).all(|w| w[0].house < w[1].house));
    }
}
