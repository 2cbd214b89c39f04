//! Location entity - Individual places on the map
//!
//! Locations may reference a Region and a controlling Faction. Both
//! references are nullable and cleared (never cascaded) when the target
//! record is deleted, so a location can always render on its own.

use serde::{Deserialize, Serialize};

use crate::domain::schema::{DescribableRecord, EntityKind, FieldSnapshot, FieldValue};

/// Kind of place a location is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    Exterior,
    Interior,
    Dungeon,
    Settlement,
    Vault,
    Landmark,
    TestCell,
}

impl LocationType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "EXT" => LocationType::Exterior,
            "INT" => LocationType::Interior,
            "DGN" => LocationType::Dungeon,
            "SET" => LocationType::Settlement,
            "VLT" => LocationType::Vault,
            "TEST" => LocationType::TestCell,
            _ => LocationType::Landmark,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationType::Exterior => "外部",
            LocationType::Interior => "内部",
            LocationType::Dungeon => "地下城",
            LocationType::Settlement => "聚落",
            LocationType::Vault => "避难所",
            LocationType::Landmark => "地标",
            LocationType::TestCell => "测试单元",
        }
    }
}

/// A visitable location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    /// Unique natural key (editor cell code, e.g. "AbernathyFarmExt")
    pub code: String,
    /// Localized display name
    pub name_cn: String,
    pub notes: String,
    pub region_id: Option<i64>,
    /// Display name of the referenced region, resolved at read time
    pub region_name: Option<String>,
    pub controlling_faction_id: Option<i64>,
    /// Display name of the controlling faction, resolved at read time
    pub controlling_faction_name: Option<String>,
    pub parent_location_group: String,
    pub location_type: LocationType,
    pub description: String,
    pub is_settlement: bool,
    pub has_workbench: bool,
    pub is_cleared: bool,
    pub difficulty: i64,
    pub notable_loot: String,
    pub screenshot_url: String,
    pub interior_cell_count: i64,
    pub respawn_rate: String,
    pub primary_enemies: String,
    pub quest_starter: bool,
    pub related_quests: String,
    pub has_power_armor_station: bool,
    pub has_cooking_station: bool,
    pub has_chemistry_station: bool,
    pub is_underwater: bool,
    pub access_requires: String,
    pub explanation: String,
    pub location_wiki_url: String,
    pub atmosphere_lore: String,
    pub visuals_desc: String,
}

impl DescribableRecord for Location {
    fn kind(&self) -> EntityKind {
        EntityKind::Location
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        if self.name_cn.is_empty() {
            &self.code
        } else {
            &self.name_cn
        }
    }

    fn primary_image_candidates(&self) -> Vec<&str> {
        vec![&self.screenshot_url]
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.location_type.label(), self.code)
    }

    fn snapshot(&self) -> Vec<FieldSnapshot> {
        vec![
            FieldSnapshot::new("code", "地点代码", FieldValue::opt_text(&self.code)),
            FieldSnapshot::new("name_cn", "中文名称", FieldValue::opt_text(&self.name_cn)),
            FieldSnapshot::new("notes", "原始备注", FieldValue::opt_text(&self.notes)),
            FieldSnapshot::new(
                "region",
                "所属区域",
                FieldValue::Reference {
                    kind: EntityKind::Region,
                    display: self.region_name.clone(),
                },
            ),
            FieldSnapshot::new(
                "controlling_faction",
                "控制派系",
                FieldValue::Reference {
                    kind: EntityKind::Faction,
                    display: self.controlling_faction_name.clone(),
                },
            ),
            FieldSnapshot::new(
                "parent_location_group",
                "地点分组",
                FieldValue::opt_text(&self.parent_location_group),
            ),
            FieldSnapshot::new(
                "location_type",
                "地点类型",
                FieldValue::Choice(self.location_type.label()),
            ),
            FieldSnapshot::new(
                "description",
                "描述",
                FieldValue::LongText(self.description.clone()),
            ),
            FieldSnapshot::new(
                "is_settlement",
                "可否作为聚落",
                FieldValue::Bool(self.is_settlement),
            ),
            FieldSnapshot::new(
                "has_workbench",
                "有无工房",
                FieldValue::Bool(self.has_workbench),
            ),
            FieldSnapshot::new("is_cleared", "是否已肃清", FieldValue::Bool(self.is_cleared)),
            FieldSnapshot::new("difficulty", "难度", FieldValue::Integer(self.difficulty)),
            FieldSnapshot::new(
                "notable_loot",
                "知名战利品",
                FieldValue::LongText(self.notable_loot.clone()),
            ),
            FieldSnapshot::new(
                "screenshot_url",
                "游戏截图链接",
                FieldValue::opt_text(&self.screenshot_url),
            ),
            FieldSnapshot::new(
                "interior_cell_count",
                "内部单元数量",
                FieldValue::Integer(self.interior_cell_count),
            ),
            FieldSnapshot::new(
                "respawn_rate",
                "重生速率",
                FieldValue::opt_text(&self.respawn_rate),
            ),
            FieldSnapshot::new(
                "primary_enemies",
                "主要敌人类型",
                FieldValue::opt_text(&self.primary_enemies),
            ),
            FieldSnapshot::new(
                "quest_starter",
                "任务起点",
                FieldValue::Bool(self.quest_starter),
            ),
            FieldSnapshot::new(
                "related_quests",
                "相关任务",
                FieldValue::LongText(self.related_quests.clone()),
            ),
            FieldSnapshot::new(
                "has_power_armor_station",
                "有无动力装甲站",
                FieldValue::Bool(self.has_power_armor_station),
            ),
            FieldSnapshot::new(
                "has_cooking_station",
                "有无烹饪站",
                FieldValue::Bool(self.has_cooking_station),
            ),
            FieldSnapshot::new(
                "has_chemistry_station",
                "有无化学工作台",
                FieldValue::Bool(self.has_chemistry_station),
            ),
            FieldSnapshot::new(
                "is_underwater",
                "是否水下",
                FieldValue::Bool(self.is_underwater),
            ),
            FieldSnapshot::new(
                "access_requires",
                "进入需求",
                FieldValue::opt_text(&self.access_requires),
            ),
            FieldSnapshot::new(
                "explanation",
                "说明",
                FieldValue::LongText(self.explanation.clone()),
            ),
            FieldSnapshot::new(
                "location_wiki_url",
                "地点Wiki链接",
                FieldValue::opt_text(&self.location_wiki_url),
            ),
            FieldSnapshot::new(
                "atmosphere_lore",
                "深度档案",
                FieldValue::LongText(self.atmosphere_lore.clone()),
            ),
            FieldSnapshot::new(
                "visuals_desc",
                "视觉分镜",
                FieldValue::LongText(self.visuals_desc.clone()),
            ),
        ]
    }
}
