//! Region entity - Named areas of the wasteland map

use serde::{Deserialize, Serialize};

use crate::domain::schema::{DescribableRecord, EntityKind, FieldSnapshot, FieldValue};

/// Radiation intensity of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadiationLevel {
    None,
    Low,
    Medium,
    High,
    Severe,
}

impl RadiationLevel {
    pub fn from_code(code: &str) -> Self {
        match code {
            "NONE" => RadiationLevel::None,
            "MEDIUM" => RadiationLevel::Medium,
            "HIGH" => RadiationLevel::High,
            "SEVERE" => RadiationLevel::Severe,
            _ => RadiationLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RadiationLevel::None => "无",
            RadiationLevel::Low => "低",
            RadiationLevel::Medium => "中",
            RadiationLevel::High => "高",
            RadiationLevel::Severe => "严重",
        }
    }
}

/// A region of the world map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    /// Unique natural key
    pub name: String,
    pub description: String,
    pub map_image_url: String,
    pub radiation_level: RadiationLevel,
    pub weather_pattern: String,
    pub discovered_date: String,
    pub primary_threat: String,
    pub economic_activity: String,
    pub pre_war_purpose: String,
    pub number_of_settlements: i64,
    pub major_landmarks: String,
    pub water_source: String,
    pub connectivity: String,
    pub lore_entry: String,
    pub map_coordinates: String,
    pub explanation: String,
}

impl DescribableRecord for Region {
    fn kind(&self) -> EntityKind {
        EntityKind::Region
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn primary_image_candidates(&self) -> Vec<&str> {
        vec![&self.map_image_url]
    }

    fn summary(&self) -> String {
        format!("辐射水平: {}", self.radiation_level.label())
    }

    fn snapshot(&self) -> Vec<FieldSnapshot> {
        vec![
            FieldSnapshot::new("name", "区域名称", FieldValue::opt_text(&self.name)),
            FieldSnapshot::new(
                "description",
                "描述",
                FieldValue::LongText(self.description.clone()),
            ),
            FieldSnapshot::new(
                "map_image_url",
                "地图图片链接",
                FieldValue::opt_text(&self.map_image_url),
            ),
            FieldSnapshot::new(
                "radiation_level",
                "辐射水平",
                FieldValue::Choice(self.radiation_level.label()),
            ),
            FieldSnapshot::new(
                "weather_pattern",
                "天气模式",
                FieldValue::opt_text(&self.weather_pattern),
            ),
            FieldSnapshot::new(
                "discovered_date",
                "发现日期",
                FieldValue::opt_text(&self.discovered_date),
            ),
            FieldSnapshot::new(
                "primary_threat",
                "主要威胁",
                FieldValue::opt_text(&self.primary_threat),
            ),
            FieldSnapshot::new(
                "economic_activity",
                "经济活动",
                FieldValue::opt_text(&self.economic_activity),
            ),
            FieldSnapshot::new(
                "pre_war_purpose",
                "战前用途",
                FieldValue::opt_text(&self.pre_war_purpose),
            ),
            FieldSnapshot::new(
                "number_of_settlements",
                "聚落数量",
                FieldValue::Integer(self.number_of_settlements),
            ),
            FieldSnapshot::new(
                "major_landmarks",
                "主要地标",
                FieldValue::LongText(self.major_landmarks.clone()),
            ),
            FieldSnapshot::new(
                "water_source",
                "水源状况",
                FieldValue::opt_text(&self.water_source),
            ),
            FieldSnapshot::new(
                "connectivity",
                "连通性",
                FieldValue::opt_text(&self.connectivity),
            ),
            FieldSnapshot::new(
                "lore_entry",
                "背景故事",
                FieldValue::LongText(self.lore_entry.clone()),
            ),
            FieldSnapshot::new(
                "map_coordinates",
                "地图坐标",
                FieldValue::opt_text(&self.map_coordinates),
            ),
            FieldSnapshot::new(
                "explanation",
                "说明",
                FieldValue::LongText(self.explanation.clone()),
            ),
        ]
    }
}
