//! Field Classifier - turns an entity snapshot into render-ready rows
//!
//! Pure function of (snapshot, category map): no mutation, no I/O. Image
//! fields are routed to the detail assembler's image list instead of the row
//! list, empty values are dropped outright, and every surviving row is filed
//! into the navigation index under its category bucket.

use std::collections::HashMap;

use tracing::warn;

use crate::application::dto::{FieldRow, NavEntry, Navigation};
use crate::domain::schema::{FieldSnapshot, FieldValue};

/// Localized boolean tokens; raw true/false never reaches the payload
pub const YES_TOKEN: &str = "是";
pub const NO_TOKEN: &str = "否";

/// Per sub-label bucket cap. Overflow entries are dropped with a warning,
/// never re-bucketed.
const MAX_SECTION_ENTRIES: usize = 50;

/// Field name substrings that mark single-image fields
const IMAGE_MARKERS: [&str; 3] = ["screenshot", "logo", "image"];

/// The closed set of navigation category buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BasicInfo,
    Environment,
    Factions,
    Mechanics,
    Lore,
    Links,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::BasicInfo => "basic info",
            Category::Environment => "environment & geography",
            Category::Factions => "factions & organizations",
            Category::Mechanics => "game mechanics",
            Category::Lore => "lore & detail",
            Category::Links => "links",
            Category::Other => "other",
        }
    }
}

/// Immutable field-name -> category mapping
///
/// Hand-maintained, constructed once at startup and passed into the
/// classifier so it stays independently testable.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    by_field: HashMap<&'static str, Category>,
}

impl CategoryMap {
    /// The fixed production mapping covering all five entity schemas
    pub fn standard() -> Self {
        let mut by_field = HashMap::new();
        let entries: [(&'static str, Category); 54] = [
            ("name", Category::BasicInfo),
            ("name_cn", Category::BasicInfo),
            ("code", Category::BasicInfo),
            ("notes", Category::BasicInfo),
            ("leader", Category::BasicInfo),
            ("discovered_date", Category::BasicInfo),
            ("founding_year", Category::BasicInfo),
            ("parent_location_group", Category::BasicInfo),
            ("location_type", Category::BasicInfo),
            ("creature_type", Category::BasicInfo),
            ("consumable_type", Category::BasicInfo),
            ("threat_level", Category::BasicInfo),
            ("difficulty", Category::BasicInfo),
            ("base_value", Category::BasicInfo),
            ("weight", Category::BasicInfo),
            ("radiation_level", Category::Environment),
            ("weather_pattern", Category::Environment),
            ("primary_threat", Category::Environment),
            ("water_source", Category::Environment),
            ("connectivity", Category::Environment),
            ("map_coordinates", Category::Environment),
            ("major_landmarks", Category::Environment),
            ("number_of_settlements", Category::Environment),
            ("region", Category::Environment),
            ("habitat", Category::Environment),
            ("is_underwater", Category::Environment),
            ("controlling_faction", Category::Factions),
            ("ideology", Category::Factions),
            ("is_joinable", Category::Factions),
            ("hostility_status", Category::Factions),
            ("tech_level", Category::Factions),
            ("recruitment_policy", Category::Factions),
            ("base_of_operations", Category::Factions),
            ("allies", Category::Factions),
            ("enemies", Category::Factions),
            ("equipment_standard", Category::Factions),
            ("faction_size", Category::Factions),
            ("notable_members", Category::Factions),
            ("is_settlement", Category::Mechanics),
            ("has_workbench", Category::Mechanics),
            ("is_cleared", Category::Mechanics),
            ("interior_cell_count", Category::Mechanics),
            ("respawn_rate", Category::Mechanics),
            ("primary_enemies", Category::Mechanics),
            ("quest_starter", Category::Mechanics),
            ("related_quests", Category::Mechanics),
            ("has_power_armor_station", Category::Mechanics),
            ("has_cooking_station", Category::Mechanics),
            ("has_chemistry_station", Category::Mechanics),
            ("access_requires", Category::Mechanics),
            ("economic_activity", Category::Mechanics),
            ("player_rep_impact", Category::Mechanics),
            ("notable_loot", Category::Mechanics),
            ("pre_war_purpose", Category::Lore),
        ];
        for (field, category) in entries {
            by_field.insert(field, category);
        }
        // Remaining mechanics / lore / link fields
        for field in [
            "weakness",
            "resistances",
            "behavior",
            "loot_drops",
            "variants",
            "effects",
            "addiction_risk",
            "rads",
            "crafting_station",
            "key_ingredients",
        ] {
            by_field.insert(field, Category::Mechanics);
        }
        for field in [
            "description",
            "lore_entry",
            "explanation",
            "quote",
            "atmosphere_lore",
            "visuals_desc",
        ] {
            by_field.insert(field, Category::Lore);
        }
        for field in ["wiki_url", "location_wiki_url"] {
            by_field.insert(field, Category::Links);
        }
        Self { by_field }
    }

    pub fn category_of(&self, field_name: &str) -> Category {
        self.by_field
            .get(field_name)
            .copied()
            .unwrap_or(Category::Other)
    }
}

/// Classifier output: ordered rows plus the grouped navigation index
#[derive(Debug, Clone, Default)]
pub struct ClassifiedFields {
    pub rows: Vec<FieldRow>,
    pub navigation: Navigation,
}

/// Classify one entity snapshot
pub fn classify(snapshot: &[FieldSnapshot], categories: &CategoryMap) -> ClassifiedFields {
    let mut out = ClassifiedFields::default();

    for field in snapshot {
        // The internal id never renders, even if a snapshot carries it
        if field.name == "id" {
            continue;
        }
        // Image fields route to the detail assembler's image list
        if IMAGE_MARKERS.iter().any(|m| field.name.contains(m)) {
            continue;
        }

        let mut is_long_text = false;
        let mut is_foreign_script = false;
        let mut sub_label = "field list".to_string();

        let value = match &field.value {
            FieldValue::Empty => continue,
            FieldValue::Text(s) => {
                if s.is_empty() {
                    continue;
                }
                s.clone()
            }
            FieldValue::LongText(s) => {
                if s.is_empty() {
                    continue;
                }
                is_long_text = true;
                is_foreign_script = mostly_ascii_letters(s);
                s.clone()
            }
            FieldValue::Bool(b) => if *b { YES_TOKEN } else { NO_TOKEN }.to_string(),
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Choice(label) => (*label).to_string(),
            FieldValue::Reference { kind, display } => match display {
                None => continue,
                Some(d) => {
                    sub_label = format!("{} info", kind.name());
                    d.clone()
                }
            },
        };

        let is_link = field.name.ends_with("_url") || field.label.contains("链接");

        out.rows.push(FieldRow {
            label: field.label.to_string(),
            value,
            is_link,
            is_long_text,
            is_foreign_script,
        });

        let category = categories.category_of(field.name).label().to_string();
        let section = out
            .navigation
            .entry(category)
            .or_default()
            .entry(sub_label)
            .or_default();
        if section.len() < MAX_SECTION_ENTRIES {
            section.push(NavEntry {
                text: field.label.to_string(),
                anchor: field.name.to_string(),
            });
        } else {
            warn!(field = field.name, "navigation section full, dropping entry");
        }
    }

    out
}

/// More than 70% of alphabetic characters are ASCII letters
///
/// CJK ideographs count as alphabetic, so a mostly-Chinese text scores low
/// and a mostly-English one scores high. Styling hint only.
fn mostly_ascii_letters(text: &str) -> bool {
    let mut alphabetic = 0u32;
    let mut ascii = 0u32;
    for c in text.chars() {
        if c.is_alphabetic() {
            alphabetic += 1;
            if c.is_ascii_alphabetic() {
                ascii += 1;
            }
        }
    }
    alphabetic > 0 && f64::from(ascii) / f64::from(alphabetic) > 0.7
}
