//! Faction radar chart - fixed six-axis score vector
//!
//! Presentation enrichment only. Every axis is a deterministic heuristic over
//! a small set of faction fields, clamped to [0, 10]. The mapping table is
//! load-bearing for rendered charts; change it and every chart changes.

use crate::application::dto::ChartData;
use crate::domain::entities::{Faction, Hostility, TechLevel};

const AXIS_LABELS: [&str; 6] = [
    "科技水平",
    "武力规模",
    "侵略性",
    "资源",
    "意识形态",
    "影响力",
];

/// Compute the six-axis chart for one faction
pub fn faction_chart(faction: &Faction) -> ChartData {
    let tech = match faction.tech_level {
        TechLevel::Scavenged => 3,
        TechLevel::PreWar => 5,
        TechLevel::Advanced => 8,
        TechLevel::CuttingEdge => 10,
    };

    let mut force: u8 = 5;
    force += bonus(&faction.faction_size, 2);
    force += bonus(&faction.notable_members, 2);
    force += bonus(&faction.leader, 1);

    let mut aggression: u8 = match faction.hostility_status {
        Hostility::Friendly => 2,
        Hostility::Neutral => 5,
        Hostility::Hostile => 9,
    };
    aggression += bonus(&faction.enemies, 1);

    let mut resources: u8 = 3;
    resources += bonus(&faction.equipment_standard, 2);
    resources += bonus(&faction.base_of_operations, 2);
    resources += bonus(&faction.recruitment_policy, 1);
    if faction.founding_year.is_some() {
        resources += 1;
    }

    let mut ideology: u8 = 2;
    ideology += bonus(&faction.ideology, 3);
    ideology += bonus(&faction.quote, 2);
    ideology += bonus(&faction.explanation, 3);

    let mut influence: u8 = 3;
    influence += bonus(&faction.leader, 2);
    influence += bonus(&faction.allies, 2);
    influence += bonus(&faction.player_rep_impact, 2);
    influence += bonus(&faction.wiki_url, 1);

    ChartData {
        labels: AXIS_LABELS,
        values: [
            tech.min(10),
            force.min(10),
            aggression.min(10),
            resources.min(10),
            ideology.min(10),
            influence.min(10),
        ],
    }
}

fn bonus(field: &str, points: u8) -> u8 {
    if field.is_empty() {
        0
    } else {
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_faction() -> Faction {
        Faction {
            id: 1,
            name: "学院".to_string(),
            ideology: String::new(),
            leader: String::new(),
            logo_url: String::new(),
            is_joinable: false,
            tech_level: TechLevel::Scavenged,
            hostility_status: Hostility::Neutral,
            wiki_url: String::new(),
            founding_year: None,
            recruitment_policy: String::new(),
            base_of_operations: String::new(),
            allies: String::new(),
            enemies: String::new(),
            equipment_standard: String::new(),
            faction_size: String::new(),
            notable_members: String::new(),
            player_rep_impact: String::new(),
            quote: String::new(),
            explanation: String::new(),
            image_url_2: String::new(),
            image_url_3: String::new(),
            image_url_4: String::new(),
        }
    }

    #[test]
    fn test_cutting_edge_hostile_baseline() {
        let mut faction = bare_faction();
        faction.tech_level = TechLevel::CuttingEdge;
        faction.hostility_status = Hostility::Hostile;

        let chart = faction_chart(&faction);
        assert_eq!(chart.values[0], 10);
        assert_eq!(chart.values[1], 5);
        assert_eq!(chart.values[2], 9);
        assert_eq!(chart.values[4], 2);
    }

    #[test]
    fn test_axes_clamped_with_everything_filled() {
        let mut faction = bare_faction();
        faction.tech_level = TechLevel::CuttingEdge;
        faction.hostility_status = Hostility::Hostile;
        faction.ideology = "合成人至上".to_string();
        faction.leader = "父亲大人".to_string();
        faction.quote = "人类已是过去".to_string();
        faction.explanation = "详细说明".to_string();
        faction.allies = "无".to_string();
        faction.enemies = "铁路, 钢铁兄弟会".to_string();
        faction.faction_size = "数百人".to_string();
        faction.notable_members = "X6-88".to_string();
        faction.equipment_standard = "等离子武器".to_string();
        faction.base_of_operations = "剑桥聚变反应堆下方".to_string();
        faction.recruitment_policy = "绑架替换".to_string();
        faction.founding_year = Some(2110);
        faction.player_rep_impact = "巨大".to_string();
        faction.wiki_url = "http://wiki/institute".to_string();

        let chart = faction_chart(&faction);
        for value in chart.values {
            assert!(value <= 10, "axis exceeded clamp: {value}");
        }
        assert_eq!(chart.values[1], 10);
        assert_eq!(chart.values[2], 10);
        assert_eq!(chart.values[4], 10);
        assert_eq!(chart.values[5], 10);
    }

    #[test]
    fn test_friendly_faction_low_aggression() {
        let mut faction = bare_faction();
        faction.hostility_status = Hostility::Friendly;
        let chart = faction_chart(&faction);
        assert_eq!(chart.values[2], 2);
    }
}
