//! Faction entity - Organized groups contending for the wasteland

use serde::{Deserialize, Serialize};

use crate::domain::schema::{DescribableRecord, EntityKind, FieldSnapshot, FieldValue};

/// Technology tier of a faction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechLevel {
    Scavenged,
    PreWar,
    Advanced,
    CuttingEdge,
}

impl TechLevel {
    pub fn from_code(code: &str) -> Self {
        match code {
            "PRE_WAR" => TechLevel::PreWar,
            "ADVANCED" => TechLevel::Advanced,
            "CUTTING_EDGE" => TechLevel::CuttingEdge,
            _ => TechLevel::Scavenged,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TechLevel::Scavenged => "拾荒",
            TechLevel::PreWar => "战前",
            TechLevel::Advanced => "先进",
            TechLevel::CuttingEdge => "尖端",
        }
    }
}

/// Default stance toward the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hostility {
    Friendly,
    Neutral,
    Hostile,
}

impl Hostility {
    pub fn from_code(code: &str) -> Self {
        match code {
            "FRIENDLY" => Hostility::Friendly,
            "HOSTILE" => Hostility::Hostile,
            _ => Hostility::Neutral,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Hostility::Friendly => "友好",
            Hostility::Neutral => "中立",
            Hostility::Hostile => "敌对",
        }
    }
}

/// A faction operating in the wasteland
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faction {
    pub id: i64,
    /// Unique natural key
    pub name: String,
    pub ideology: String,
    pub leader: String,
    pub logo_url: String,
    pub is_joinable: bool,
    pub tech_level: TechLevel,
    pub hostility_status: Hostility,
    pub wiki_url: String,
    pub founding_year: Option<i64>,
    pub recruitment_policy: String,
    pub base_of_operations: String,
    pub allies: String,
    pub enemies: String,
    pub equipment_standard: String,
    pub faction_size: String,
    pub notable_members: String,
    pub player_rep_impact: String,
    pub quote: String,
    pub explanation: String,
    pub image_url_2: String,
    pub image_url_3: String,
    pub image_url_4: String,
}

impl DescribableRecord for Faction {
    fn kind(&self) -> EntityKind {
        EntityKind::Faction
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn primary_image_candidates(&self) -> Vec<&str> {
        vec![&self.logo_url]
    }

    fn additional_images(&self) -> Vec<&str> {
        vec![&self.image_url_2, &self.image_url_3, &self.image_url_4]
    }

    fn summary(&self) -> String {
        if self.leader.is_empty() {
            self.hostility_status.label().to_string()
        } else {
            format!("领袖: {}", self.leader)
        }
    }

    fn snapshot(&self) -> Vec<FieldSnapshot> {
        vec![
            FieldSnapshot::new("name", "派系名称", FieldValue::opt_text(&self.name)),
            FieldSnapshot::new(
                "ideology",
                "意识形态",
                FieldValue::LongText(self.ideology.clone()),
            ),
            FieldSnapshot::new("leader", "领袖", FieldValue::opt_text(&self.leader)),
            FieldSnapshot::new(
                "logo_url",
                "派系Logo链接",
                FieldValue::opt_text(&self.logo_url),
            ),
            FieldSnapshot::new("is_joinable", "可否加入", FieldValue::Bool(self.is_joinable)),
            FieldSnapshot::new(
                "tech_level",
                "科技水平",
                FieldValue::Choice(self.tech_level.label()),
            ),
            FieldSnapshot::new(
                "hostility_status",
                "敌对状态",
                FieldValue::Choice(self.hostility_status.label()),
            ),
            FieldSnapshot::new("wiki_url", "Wiki链接", FieldValue::opt_text(&self.wiki_url)),
            FieldSnapshot::new(
                "founding_year",
                "成立年份",
                FieldValue::opt_int(self.founding_year),
            ),
            FieldSnapshot::new(
                "recruitment_policy",
                "招募政策",
                FieldValue::opt_text(&self.recruitment_policy),
            ),
            FieldSnapshot::new(
                "base_of_operations",
                "行动基地",
                FieldValue::opt_text(&self.base_of_operations),
            ),
            FieldSnapshot::new("allies", "盟友", FieldValue::opt_text(&self.allies)),
            FieldSnapshot::new("enemies", "敌人", FieldValue::opt_text(&self.enemies)),
            FieldSnapshot::new(
                "equipment_standard",
                "装备标准",
                FieldValue::opt_text(&self.equipment_standard),
            ),
            FieldSnapshot::new(
                "faction_size",
                "派系规模",
                FieldValue::opt_text(&self.faction_size),
            ),
            FieldSnapshot::new(
                "notable_members",
                "知名成员",
                FieldValue::LongText(self.notable_members.clone()),
            ),
            FieldSnapshot::new(
                "player_rep_impact",
                "玩家声望影响",
                FieldValue::LongText(self.player_rep_impact.clone()),
            ),
            FieldSnapshot::new(
                "quote",
                "标志性引言",
                FieldValue::LongText(self.quote.clone()),
            ),
            FieldSnapshot::new(
                "explanation",
                "说明",
                FieldValue::LongText(self.explanation.clone()),
            ),
            FieldSnapshot::new(
                "image_url_2",
                "附加图片2链接",
                FieldValue::opt_text(&self.image_url_2),
            ),
            FieldSnapshot::new(
                "image_url_3",
                "附加图片3链接",
                FieldValue::opt_text(&self.image_url_3),
            ),
            FieldSnapshot::new(
                "image_url_4",
                "附加图片4链接",
                FieldValue::opt_text(&self.image_url_4),
            ),
        ]
    }
}
