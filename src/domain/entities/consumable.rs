//! Consumable entity - Food, drink, chems and medicine

use serde::{Deserialize, Serialize};

use crate::domain::schema::{DescribableRecord, EntityKind, FieldSnapshot, FieldValue};

/// Category of consumable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumableType {
    Food,
    Drink,
    Chem,
    Medicine,
}

impl ConsumableType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "DRINK" => ConsumableType::Drink,
            "CHEM" => ConsumableType::Chem,
            "MEDICINE" => ConsumableType::Medicine,
            _ => ConsumableType::Food,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsumableType::Food => "食物",
            ConsumableType::Drink => "饮品",
            ConsumableType::Chem => "药物",
            ConsumableType::Medicine => "医疗用品",
        }
    }
}

/// Addiction risk of a consumable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddictionRisk {
    None,
    Low,
    Medium,
    High,
}

impl AddictionRisk {
    pub fn from_code(code: &str) -> Self {
        match code {
            "LOW" => AddictionRisk::Low,
            "MEDIUM" => AddictionRisk::Medium,
            "HIGH" => AddictionRisk::High,
            _ => AddictionRisk::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddictionRisk::None => "无",
            AddictionRisk::Low => "低",
            AddictionRisk::Medium => "中",
            AddictionRisk::High => "高",
        }
    }
}

/// A consumable item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consumable {
    pub id: i64,
    /// Unique natural key
    pub name: String,
    pub consumable_type: ConsumableType,
    pub effects: String,
    pub addiction_risk: AddictionRisk,
    pub rads: i64,
    pub base_value: i64,
    pub weight: f64,
    pub crafting_station: String,
    pub key_ingredients: String,
    pub image_url: String,
    pub wiki_url: String,
    pub explanation: String,
}

impl DescribableRecord for Consumable {
    fn kind(&self) -> EntityKind {
        EntityKind::Consumable
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn primary_image_candidates(&self) -> Vec<&str> {
        vec![&self.image_url]
    }

    fn summary(&self) -> String {
        self.consumable_type.label().to_string()
    }

    fn snapshot(&self) -> Vec<FieldSnapshot> {
        vec![
            FieldSnapshot::new("name", "消耗品名称", FieldValue::opt_text(&self.name)),
            FieldSnapshot::new(
                "consumable_type",
                "消耗品类型",
                FieldValue::Choice(self.consumable_type.label()),
            ),
            FieldSnapshot::new("effects", "效果", FieldValue::LongText(self.effects.clone())),
            FieldSnapshot::new(
                "addiction_risk",
                "成瘾风险",
                FieldValue::Choice(self.addiction_risk.label()),
            ),
            FieldSnapshot::new("rads", "辐射值", FieldValue::Integer(self.rads)),
            FieldSnapshot::new("base_value", "基础价值", FieldValue::Integer(self.base_value)),
            FieldSnapshot::new(
                "weight",
                "重量",
                FieldValue::opt_text(&format!("{}", self.weight)),
            ),
            FieldSnapshot::new(
                "crafting_station",
                "制作台",
                FieldValue::opt_text(&self.crafting_station),
            ),
            FieldSnapshot::new(
                "key_ingredients",
                "关键材料",
                FieldValue::opt_text(&self.key_ingredients),
            ),
            FieldSnapshot::new("image_url", "图片链接", FieldValue::opt_text(&self.image_url)),
            FieldSnapshot::new("wiki_url", "Wiki链接", FieldValue::opt_text(&self.wiki_url)),
            FieldSnapshot::new(
                "explanation",
                "说明",
                FieldValue::LongText(self.explanation.clone()),
            ),
        ]
    }
}
