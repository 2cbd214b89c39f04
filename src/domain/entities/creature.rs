//! Creature entity - Hostile and passive wildlife of the wasteland

use serde::{Deserialize, Serialize};

use crate::domain::schema::{DescribableRecord, EntityKind, FieldSnapshot, FieldValue};

/// Broad classification of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureType {
    Animal,
    Mutant,
    Robot,
    Abomination,
    Humanoid,
}

impl CreatureType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "MUTANT" => CreatureType::Mutant,
            "ROBOT" => CreatureType::Robot,
            "ABOMINATION" => CreatureType::Abomination,
            "HUMANOID" => CreatureType::Humanoid,
            _ => CreatureType::Animal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreatureType::Animal => "动物",
            CreatureType::Mutant => "变种生物",
            CreatureType::Robot => "机器人",
            CreatureType::Abomination => "畸变体",
            CreatureType::Humanoid => "类人生物",
        }
    }
}

/// How dangerous an encounter with the creature is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Deadly,
    Legendary,
}

impl ThreatLevel {
    pub fn from_code(code: &str) -> Self {
        match code {
            "MEDIUM" => ThreatLevel::Medium,
            "HIGH" => ThreatLevel::High,
            "DEADLY" => ThreatLevel::Deadly,
            "LEGENDARY" => ThreatLevel::Legendary,
            _ => ThreatLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "低",
            ThreatLevel::Medium => "中",
            ThreatLevel::High => "高",
            ThreatLevel::Deadly => "致命",
            ThreatLevel::Legendary => "传奇",
        }
    }
}

/// A creature encountered in the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub id: i64,
    /// Unique natural key
    pub name: String,
    pub creature_type: CreatureType,
    pub threat_level: ThreatLevel,
    pub habitat: String,
    pub weakness: String,
    pub resistances: String,
    pub behavior: String,
    pub loot_drops: String,
    pub variants: String,
    pub screenshot_url: String,
    pub wiki_url: String,
    pub lore_entry: String,
    pub explanation: String,
}

impl DescribableRecord for Creature {
    fn kind(&self) -> EntityKind {
        EntityKind::Creature
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn primary_image_candidates(&self) -> Vec<&str> {
        vec![&self.screenshot_url]
    }

    fn summary(&self) -> String {
        format!(
            "{} / 威胁等级: {}",
            self.creature_type.label(),
            self.threat_level.label()
        )
    }

    fn snapshot(&self) -> Vec<FieldSnapshot> {
        vec![
            FieldSnapshot::new("name", "生物名称", FieldValue::opt_text(&self.name)),
            FieldSnapshot::new(
                "creature_type",
                "生物类型",
                FieldValue::Choice(self.creature_type.label()),
            ),
            FieldSnapshot::new(
                "threat_level",
                "威胁等级",
                FieldValue::Choice(self.threat_level.label()),
            ),
            FieldSnapshot::new("habitat", "栖息地", FieldValue::opt_text(&self.habitat)),
            FieldSnapshot::new("weakness", "弱点", FieldValue::opt_text(&self.weakness)),
            FieldSnapshot::new(
                "resistances",
                "抗性",
                FieldValue::opt_text(&self.resistances),
            ),
            FieldSnapshot::new(
                "behavior",
                "行为模式",
                FieldValue::LongText(self.behavior.clone()),
            ),
            FieldSnapshot::new(
                "loot_drops",
                "掉落物品",
                FieldValue::LongText(self.loot_drops.clone()),
            ),
            FieldSnapshot::new("variants", "变种", FieldValue::LongText(self.variants.clone())),
            FieldSnapshot::new(
                "screenshot_url",
                "游戏截图链接",
                FieldValue::opt_text(&self.screenshot_url),
            ),
            FieldSnapshot::new("wiki_url", "Wiki链接", FieldValue::opt_text(&self.wiki_url)),
            FieldSnapshot::new(
                "lore_entry",
                "背景故事",
                FieldValue::LongText(self.lore_entry.clone()),
            ),
            FieldSnapshot::new(
                "explanation",
                "说明",
                FieldValue::LongText(self.explanation.clone()),
            ),
        ]
    }
}
