use serde::{Deserialize, Serialize};

/// One event as returned by TheSportsDB `eventsnextleague` endpoint.
///
/// The upstream payload carries dozens of fields; only the ones the feed
/// reads are modelled and everything is optional because the service is
/// happy to send `null` for any of them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiEvent {
    #[serde(rename = "idEvent", default)]
    pub id_event: Option<String>,
    #[serde(rename = "strEvent", default)]
    pub str_event: Option<String>,
    #[serde(rename = "strLeague", default)]
    pub str_league: Option<String>,
    #[serde(rename = "strHomeTeam", default)]
    pub str_home_team: Option<String>,
    #[serde(rename = "strAwayTeam", default)]
    pub str_away_team: Option<String>,
    #[serde(rename = "dateEvent", default)]
    pub date_event: Option<String>,
    #[serde(rename = "strTime", default)]
    pub str_time: Option<String>,
    #[serde(rename = "strStatus", default)]
    pub str_status: Option<String>,
}

/// Top-level response body. `events` is `null` when the league has nothing
/// scheduled, and may be missing entirely on some error pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Option<Vec<ApiEvent>>,
}

impl EventsResponse {
    /// Events if present and non-empty.
    pub fn into_events(self) -> Option<Vec<ApiEvent>> {
        self.events.filter(|events| !events.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserialization_ignores_unknown_fields() {
        let json = r#"{
            "idEvent": "2077435",
            "strEvent": "Alianza Lima vs Melgar",
            "strLeague": "Peruvian Primera Division",
            "strHomeTeam": "Alianza Lima",
            "strAwayTeam": "Melgar",
            "dateEvent": "2025-02-15",
            "strTime": "21:00:00",
            "strStatus": "Not Started",
            "intRound": "3",
            "strVenue": "Estadio Alejandro Villanueva"
        }"#;

        let event: ApiEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.id_event.as_deref(), Some("2077435"));
        assert_eq!(event.str_home_team.as_deref(), Some("Alianza Lima"));
        assert_eq!(event.str_time.as_deref(), Some("21:00:00"));
        assert_eq!(event.str_status.as_deref(), Some("Not Started"));
    }

    #[test]
    fn test_event_deserialization_with_nulls() {
        let json = r#"{"strHomeTeam": null, "strAwayTeam": "Melgar", "strTime": null}"#;
        let event: ApiEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.str_home_team, None);
        assert_eq!(event.str_away_team.as_deref(), Some("Melgar"));
        assert_eq!(event.date_event, None);
    }

    #[test]
    fn test_events_response_absent_null_and_empty() {
        let missing: EventsResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.into_events().is_none());

        let null: EventsResponse = serde_json::from_str(r#"{"events": null}"#).unwrap();
        assert!(null.into_events().is_none());

        let empty: EventsResponse = serde_json::from_str(r#"{"events": []}"#).unwrap();
        assert!(empty.into_events().is_none());

        let one: EventsResponse =
            serde_json::from_str(r#"{"events": [{"strHomeTeam": "Cusco FC"}]}"#).unwrap();
        assert_eq!(one.into_events().map(|e| e.len()), Some(1));
    }
}
