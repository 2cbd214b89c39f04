//! Schema descriptors for wiki records
//!
//! Every entity type exposes an explicit, ordered field snapshot instead of
//! runtime reflection. The classifier works purely on these snapshots, so the
//! displayable field list for each type is checkable at compile time.

use serde::Serialize;

/// The closed set of entity types served by the wiki
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Region,
    Faction,
    Location,
    Creature,
    Consumable,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Region,
        EntityKind::Faction,
        EntityKind::Location,
        EntityKind::Creature,
        EntityKind::Consumable,
    ];

    /// Parse a URL path segment into a kind. Unknown segments are `None`.
    pub fn parse(segment: &str) -> Option<Self> {
        match segment.to_ascii_lowercase().as_str() {
            "region" => Some(EntityKind::Region),
            "faction" => Some(EntityKind::Faction),
            "location" => Some(EntityKind::Location),
            "creature" => Some(EntityKind::Creature),
            "consumable" => Some(EntityKind::Consumable),
            _ => None,
        }
    }

    /// Stable lowercase name used in URLs and payloads
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Region => "region",
            EntityKind::Faction => "faction",
            EntityKind::Location => "location",
            EntityKind::Creature => "creature",
            EntityKind::Consumable => "consumable",
        }
    }
}

/// A resolved field value as carried by a snapshot row
///
/// Choice fields arrive already decoded to their canonical label; reference
/// fields carry the referenced record's display string (or nothing when the
/// reference has been cleared).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Short free text (also dates, coordinates and similar one-liners)
    Text(String),
    /// Long-form free text, eligible for the foreign-script heuristic
    LongText(String),
    Bool(bool),
    Integer(i64),
    /// Decoded label of a closed enumerated set
    Choice(&'static str),
    /// Display string of a referenced record, `None` when cleared
    Reference {
        kind: EntityKind,
        display: Option<String>,
    },
    /// Absent optional value; always dropped by the classifier
    Empty,
}

impl FieldValue {
    pub fn opt_text(value: &str) -> Self {
        if value.is_empty() {
            FieldValue::Empty
        } else {
            FieldValue::Text(value.to_string())
        }
    }

    pub fn opt_int(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::Integer)
    }
}

/// One row of an entity snapshot: stable field name, human label, value
#[derive(Debug, Clone)]
pub struct FieldSnapshot {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
}

impl FieldSnapshot {
    pub fn new(name: &'static str, label: &'static str, value: FieldValue) -> Self {
        Self { name, label, value }
    }
}

/// Capability shared by every record the wiki can render
///
/// The detail and list assemblers only ever see records through this trait,
/// so the five entity types share one generic render path.
pub trait DescribableRecord {
    fn kind(&self) -> EntityKind;

    fn id(&self) -> i64;

    /// Title shown on the detail page: localized name when present, else the
    /// fallback name
    fn display_name(&self) -> &str;

    /// Candidate single-image fields in priority order; the first non-empty
    /// one becomes the main image
    fn primary_image_candidates(&self) -> Vec<&str>;

    /// Numbered additional image fields, appended after the main image
    fn additional_images(&self) -> Vec<&str> {
        Vec::new()
    }

    /// One-line summary shown in index lists
    fn summary(&self) -> String;

    /// Ordered field snapshot for the classifier. Must never include the
    /// internal id.
    fn snapshot(&self) -> Vec<FieldSnapshot>;
}
