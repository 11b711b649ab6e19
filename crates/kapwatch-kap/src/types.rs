//! Wire types for the disclosure platform's `byCriteria` endpoint.

use serde::{Deserialize, Serialize};

/// Criteria payload POSTed to `/tr/api/disclosure/members/byCriteria`.
///
/// Mirrors the platform's query form: only the date window and the index OID
/// vary between runs, every other field is sent empty the way the web UI does.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureQuery {
    pub from_date: String,
    pub to_date: String,
    pub member_type: String,
    pub mkk_member_oid_list: Vec<String>,
    pub inactive_mkk_member_oid_list: Vec<String>,
    pub disclosure_class: String,
    pub subject_list: Vec<String>,
    pub is_late: String,
    pub main_sector: String,
    pub sector: String,
    pub sub_sector: String,
    pub market_oid: String,
    pub index: String,
    pub bdk_review: String,
    pub bdk_member_oid_list: Vec<String>,
    pub year: String,
    pub term: String,
    pub rule_type: String,
    pub period: String,
    pub from_src: bool,
    pub src_category: String,
    pub disclosure_index_list: Vec<String>,
}

impl DisclosureQuery {
    /// Builds the standard daily query: listed-company disclosures for
    /// `index_oid` published between `from_date` and `to_date` (inclusive,
    /// `YYYY-MM-DD`).
    #[must_use]
    pub fn daily(from_date: &str, to_date: &str, index_oid: &str) -> Self {
        Self {
            from_date: from_date.to_string(),
            to_date: to_date.to_string(),
            member_type: "IGS".to_string(),
            mkk_member_oid_list: Vec::new(),
            inactive_mkk_member_oid_list: Vec::new(),
            disclosure_class: String::new(),
            subject_list: Vec::new(),
            is_late: String::new(),
            main_sector: String::new(),
            sector: String::new(),
            sub_sector: String::new(),
            market_oid: String::new(),
            index: index_oid.to_string(),
            bdk_review: String::new(),
            bdk_member_oid_list: Vec::new(),
            year: String::new(),
            term: String::new(),
            rule_type: String::new(),
            period: String::new(),
            from_src: false,
            src_category: String::new(),
            disclosure_index_list: Vec::new(),
        }
    }
}

/// One disclosure record as returned by the API.
///
/// Every field is optional on the wire; normalization maps absences to empty
/// strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disclosure {
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub stock_codes: Option<String>,
    #[serde(default)]
    pub kap_title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub related_stocks: Option<String>,
    #[serde(default)]
    pub disclosure_index: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_query_serializes_with_camel_case_fields() {
        let query = DisclosureQuery::daily("2025-07-21", "2025-07-22", "oid-123");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["fromDate"], "2025-07-21");
        assert_eq!(value["toDate"], "2025-07-22");
        assert_eq!(value["memberType"], "IGS");
        assert_eq!(value["index"], "oid-123");
        assert_eq!(value["fromSrc"], false);
        assert_eq!(value["mkkMemberOidList"], serde_json::json!([]));
        assert_eq!(value["disclosureClass"], "");
    }

    #[test]
    fn disclosure_tolerates_missing_fields() {
        let d: Disclosure = serde_json::from_value(serde_json::json!({
            "kapTitle": "ACME A.Ş."
        }))
        .unwrap();
        assert_eq!(d.kap_title.as_deref(), Some("ACME A.Ş."));
        assert!(d.publish_date.is_none());
        assert!(d.disclosure_index.is_none());
    }
}
