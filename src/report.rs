use crate::i18n::{normalize_text, to_display};
use anyhow::bail;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// One day's figures for a region, as returned by the reports API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub date: NaiveDate,
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
    #[serde(default)]
    pub fatality_rate: f64,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub iso: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub province: String,
}

/// Envelope of every reports API response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportsResponse {
    #[serde(default)]
    pub data: Vec<Report>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Report {
    /// Replace the region name with its display-language form.
    pub fn with_display_name(mut self) -> Self {
        let display = to_display(&self.region.name);
        if display != self.region.name {
            self.region.name = display.to_string();
        }
        self
    }
}

/// Order in which a listing presents reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the order the reports were fetched in
    AsFetched,
    /// By display name, ignoring case and accents
    #[default]
    Alphabetical,
    /// Highest confirmed count first
    MostConfirmed,
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "as-fetched" => Ok(SortOrder::AsFetched),
            "alphabetical" => Ok(SortOrder::Alphabetical),
            "confirmed" => Ok(SortOrder::MostConfirmed),
            other => bail!(
                "Unknown sort order: '{}' (expected alphabetical, confirmed or none)",
                other
            ),
        }
    }
}

/// Sort reports in place. The sort is stable, so ties keep fetch order.
pub fn sort_reports(reports: &mut [Report], order: SortOrder) {
    match order {
        SortOrder::AsFetched => {}
        SortOrder::Alphabetical => reports.sort_by_cached_key(|r| {
            (normalize_text(&r.region.name), r.region.name.clone())
        }),
        SortOrder::MostConfirmed => reports.sort_by(|a, b| b.confirmed.cmp(&a.confirmed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, iso: &str, confirmed: u64) -> Report {
        Report {
            date: NaiveDate::from_ymd_opt(2020, 4, 16).unwrap(),
            confirmed,
            deaths: 2000,
            recovered: 95000,
            active: 3000,
            fatality_rate: 5.555,
            region: Region {
                iso: iso.to_string(),
                name: name.to_string(),
                province: String::new(),
            },
        }
    }

    fn names(reports: &[Report]) -> Vec<&str> {
        reports.iter().map(|r| r.region.name.as_str()).collect()
    }

    // ==================== Deserialization Tests ====================

    #[test]
    fn test_report_deserialization() {
        let json = r#"{
            "date": "2020-04-16",
            "confirmed": 100000,
            "deaths": 2000,
            "recovered": 95000,
            "active": 3000,
            "fatality_rate": 0.02,
            "region": {"iso": "BRA", "name": "Brazil", "province": ""}
        }"#;

        let report: Report = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(report.date, NaiveDate::from_ymd_opt(2020, 4, 16).unwrap());
        assert_eq!(report.confirmed, 100000);
        assert_eq!(report.region.iso, "BRA");
        assert_eq!(report.region.name, "Brazil");
        assert!((report.fatality_rate - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_deserialization_ignores_extra_fields() {
        let json = r#"{
            "date": "2023-03-09",
            "confirmed": 1,
            "deaths": 0,
            "recovered": 0,
            "active": 1,
            "fatality_rate": 0,
            "last_update": "2023-03-10 04:21:03",
            "confirmed_diff": 0,
            "region": {
                "iso": "USA", "name": "US", "province": "Alabama",
                "lat": "32.3182", "long": "-86.9023", "cities": []
            }
        }"#;

        let report: Report = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(report.region.province, "Alabama");
    }

    #[test]
    fn test_region_null_province_becomes_empty() {
        let json = r#"{"iso": "CHN", "name": "China", "province": null}"#;
        let region: Region = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(region.province, "");
    }

    #[test]
    fn test_region_missing_province_becomes_empty() {
        let json = r#"{"iso": "CHN", "name": "China"}"#;
        let region: Region = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(region.province, "");
    }

    #[test]
    fn test_reports_response_missing_data_is_empty() {
        let response: ReportsResponse = serde_json::from_str("{}").expect("Should deserialize");
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_report_rejects_negative_counts() {
        let json = r#"{
            "date": "2020-04-16", "confirmed": -1, "deaths": 0, "recovered": 0,
            "active": 0, "fatality_rate": 0,
            "region": {"iso": "BRA", "name": "Brazil", "province": ""}
        }"#;
        assert!(serde_json::from_str::<Report>(json).is_err());
    }

    // ==================== Display Name Tests ====================

    #[test]
    fn test_with_display_name_translates() {
        let r = report("Brazil", "BRA", 1).with_display_name();
        assert_eq!(r.region.name, "Brasil");
        assert_eq!(r.region.iso, "BRA");
    }

    #[test]
    fn test_with_display_name_unknown_unchanged() {
        let r = report("Peru", "PER", 1).with_display_name();
        assert_eq!(r.region.name, "Peru");
    }

    // ==================== Sorting Tests ====================

    #[test]
    fn test_sort_alphabetical() {
        let mut reports = vec![report("China", "CHN", 1), report("Brasil", "BRA", 2)];
        sort_reports(&mut reports, SortOrder::Alphabetical);
        assert_eq!(names(&reports), vec!["Brasil", "China"]);
    }

    #[test]
    fn test_sort_alphabetical_ignores_accents() {
        let mut reports = vec![
            report("Japão", "JPN", 1),
            report("Índia", "IND", 1),
            report("Alemanha", "DEU", 1),
        ];
        sort_reports(&mut reports, SortOrder::Alphabetical);
        assert_eq!(names(&reports), vec!["Alemanha", "Índia", "Japão"]);
    }

    #[test]
    fn test_sort_most_confirmed() {
        let mut reports = vec![
            report("Brasil", "BRA", 10),
            report("China", "CHN", 30),
            report("Japão", "JPN", 20),
        ];
        sort_reports(&mut reports, SortOrder::MostConfirmed);
        assert_eq!(names(&reports), vec!["China", "Japão", "Brasil"]);
    }

    #[test]
    fn test_sort_as_fetched_keeps_order() {
        let mut reports = vec![report("China", "CHN", 1), report("Brasil", "BRA", 2)];
        sort_reports(&mut reports, SortOrder::AsFetched);
        assert_eq!(names(&reports), vec!["China", "Brasil"]);
    }

    // ==================== SortOrder Parsing Tests ====================

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("alphabetical".parse::<SortOrder>().unwrap(), SortOrder::Alphabetical);
        assert_eq!("Confirmed".parse::<SortOrder>().unwrap(), SortOrder::MostConfirmed);
        assert_eq!("none".parse::<SortOrder>().unwrap(), SortOrder::AsFetched);
        assert_eq!(" as-fetched ".parse::<SortOrder>().unwrap(), SortOrder::AsFetched);
    }

    #[test]
    fn test_sort_order_from_str_invalid() {
        let err = "random".parse::<SortOrder>().unwrap_err();
        assert!(err.to_string().contains("Unknown sort order"));
    }

    #[test]
    fn test_sort_order_default_is_alphabetical() {
        assert_eq!(SortOrder::default(), SortOrder::Alphabetical);
    }
}
