use serde::{Deserialize, Serialize};

pub const UNKNOWN_TYPE: &str = "Unknown";

fn default_title() -> String {
    "Title unavailable".to_string()
}

fn default_description() -> String {
    "Description unavailable".to_string()
}

fn default_type() -> String {
    UNKNOWN_TYPE.to_string()
}

/// A single key/value tag attached to an Arweave transaction.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// One indexed transaction as returned by the search endpoint.
///
/// Only `txid` is required; the index does not guarantee the descriptive
/// fields so they fall back to placeholder text.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchResult {
    pub txid: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(rename = "type", default = "default_type")]
    pub result_type: String,
    #[serde(default)]
    pub markers: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl SearchResult {
    pub fn has_known_type(&self) -> bool {
        self.result_type != UNKNOWN_TYPE
    }
}

/// Fixture document shape: `{ "results": [...] }`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct SearchResults {
    pub results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_placeholders() {
        let result: SearchResult = serde_json::from_str(r#"{"txid":"abc123"}"#).unwrap();
        assert_eq!(result.txid, "abc123");
        assert_eq!(result.title, "Title unavailable");
        assert_eq!(result.description, "Description unavailable");
        assert_eq!(result.result_type, UNKNOWN_TYPE);
        assert!(!result.has_known_type());
        assert!(result.markers.is_empty());
        assert!(result.tags.is_empty());
    }

    #[test]
    fn txid_is_required() {
        let result = serde_json::from_str::<SearchResult>(r#"{"title":"A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn type_field_is_renamed() {
        let result: SearchResult = serde_json::from_str(
            r#"{"txid":"x","type":"image/png","markers":["NFT"],"tags":[{"key":"App-Name","value":"Explorar"}]}"#,
        )
        .unwrap();
        assert_eq!(result.result_type, "image/png");
        assert!(result.has_known_type());
        assert_eq!(result.markers, vec!["NFT".to_string()]);
        assert_eq!(
            result.tags,
            vec![Tag {
                key: "App-Name".to_string(),
                value: "Explorar".to_string()
            }]
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "image/png");
    }

    #[test]
    fn fixture_document_keeps_order() {
        let doc: SearchResults = serde_json::from_str(
            r#"{"results":[{"title":"A","description":"d1","txid":"abc123"},{"title":"B","description":"d2","txid":"def456"}]}"#,
        )
        .unwrap();
        let txids: Vec<_> = doc.results.iter().map(|r| r.txid.as_str()).collect();
        assert_eq!(txids, ["abc123", "def456"]);
    }
}
