//! Detail page payload

use std::collections::BTreeMap;

use serde::Serialize;

/// One displayable field row
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldRow {
    pub label: String,
    pub value: String,
    pub is_link: bool,
    pub is_long_text: bool,
    pub is_foreign_script: bool,
}

/// One navigation link pointing at a field row anchor
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavEntry {
    pub text: String,
    pub anchor: String,
}

/// Hierarchical navigation index: category -> sub-label -> entries
pub type Navigation = BTreeMap<String, BTreeMap<String, Vec<NavEntry>>>;

/// Derived six-axis score vector rendered as a radar chart (factions only)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: [&'static str; 6],
    pub values: [u8; 6],
}

/// Everything a detail view needs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPayload {
    pub entity_type: &'static str,
    pub display_name: String,
    pub images: Vec<String>,
    pub fields: Vec<FieldRow>,
    pub navigation: Navigation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<ChartData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> DetailPayload {
        DetailPayload {
            entity_type: "region",
            display_name: "联邦".to_string(),
            images: vec!["https://example.org/map.png".to_string()],
            fields: vec![FieldRow {
                label: "Wiki链接".to_string(),
                value: "https://example.org/wiki".to_string(),
                is_link: true,
                is_long_text: false,
                is_foreign_script: false,
            }],
            navigation: Navigation::new(),
            chart_data: None,
        }
    }

    #[test]
    fn test_detail_payload_serializes_camel_case() {
        let json = serde_json::to_value(payload()).unwrap();
        assert_eq!(json["entityType"], "region");
        assert_eq!(json["displayName"], "联邦");
        let row = &json["fields"][0];
        assert_eq!(row["isLink"], true);
        assert_eq!(row["isLongText"], false);
        assert_eq!(row["isForeignScript"], false);
    }

    #[test]
    fn test_chart_data_omitted_when_absent() {
        let json = serde_json::to_value(payload()).unwrap();
        assert!(json.get("chartData").is_none());
    }

    #[test]
    fn test_chart_data_present_for_scored_payload() {
        let mut scored = payload();
        scored.chart_data = Some(ChartData {
            labels: ["科技水平", "武力规模", "侵略性", "资源", "意识形态", "影响力"],
            values: [10, 5, 9, 3, 2, 3],
        });
        let json = serde_json::to_value(scored).unwrap();
        assert_eq!(json["chartData"]["values"][0], 10);
        assert_eq!(json["chartData"]["labels"][2], "侵略性");
    }
}
