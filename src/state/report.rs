//! The submitted sighting record
//!
//! A `SightingReport` is the payload a real deployment would POST to a
//! conservation backend. Here submission is simulated: the report is
//! serialized to JSON and logged, then forgotten.

use serde::Serialize;

use super::data::{Location, OrganismCondition, OrganismType};
use super::session::Session;

/// One user-submitted record of an observed organism
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SightingReport {
    pub organism_type: OrganismType,
    pub organism_condition: Option<OrganismCondition>,
    pub notes: String,
    /// Mock coordinate if GPS "locked" before submission, otherwise absent
    pub location: Option<Location>,
    /// Capture time, formatted at the capture moment
    pub timestamp: String,
    pub photo_attached: bool,
}

impl SightingReport {
    /// Build the report from the current form state.
    /// Returns `None` until an organism type has been selected.
    pub fn from_session(session: &Session) -> Option<Self> {
        Some(SightingReport {
            organism_type: session.organism_type?,
            organism_condition: session.organism_condition,
            notes: session.notes.clone(),
            location: session.location,
            timestamp: session.timestamp.clone(),
            photo_attached: session.captured_image.is_some(),
        })
    }

    /// Serialize for the simulated submission log line
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::MOCK_LOCATION;

    #[test]
    fn test_from_session_requires_organism_type() {
        let session = Session::new();
        assert!(SightingReport::from_session(&session).is_none());
    }

    #[test]
    fn test_report_carries_form_fields() {
        let mut session = Session::new();
        session.select_organism_type(OrganismType::Shellfish);
        session.select_condition(OrganismCondition::Deceased);
        session.set_notes("washed up after the storm".to_string());
        session.location = Some(MOCK_LOCATION);

        let report = SightingReport::from_session(&session).unwrap();
        assert_eq!(report.organism_type, OrganismType::Shellfish);
        assert_eq!(report.organism_condition, Some(OrganismCondition::Deceased));
        assert_eq!(report.notes, "washed up after the storm");
        assert_eq!(report.location, Some(MOCK_LOCATION));
        assert!(!report.photo_attached);
    }

    #[test]
    fn test_json_uses_display_labels() {
        let mut session = Session::new();
        session.select_organism_type(OrganismType::HorseshoeCrab);
        session.select_condition(OrganismCondition::InDistress);

        let json = SightingReport::from_session(&session)
            .unwrap()
            .to_json()
            .unwrap();
        assert!(json.contains("Horseshoe Crab"));
        assert!(json.contains("In Distress"));
    }
}
