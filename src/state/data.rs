//! Shared data structures for the application state
//!
//! These types represent the data model that flows between
//! the session state machine and the UI layer, plus the fixed
//! content and timing constants the simulation runs on.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// How long the splash screen stays up before onboarding (simulates app init)
pub const SPLASH_DELAY: Duration = Duration::from_secs(2);

/// How long the simulated GPS search takes before locking
pub const GPS_LOCK_DELAY: Duration = Duration::from_secs(3);

/// Fixed mock coordinate reported once GPS "locks" (Bay of Bengal)
pub const MOCK_LOCATION: Location = Location {
    lat: 12.8905,
    lng: 80.2307,
};

/// The five mutually exclusive screens of the reporting flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Onboarding,
    Capture,
    Form,
    Success,
}

/// Simulated GPS acquisition state
///
/// `Error` exists in the model but is never produced: the simulation
/// always locks after the fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsStatus {
    Searching,
    Locked,
    Error,
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// One slide of the introductory onboarding slideshow
#[derive(Debug, Clone, Copy)]
pub struct OnboardingSlide {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Onboarding content, shown once before first use
pub const ONBOARDING_SLIDES: [OnboardingSlide; 3] = [
    OnboardingSlide {
        icon: "鲎",
        title: "Protect Horseshoe Crabs",
        description: "Report sightings along the Bay of Bengal to support conservation",
    },
    OnboardingSlide {
        icon: "📸",
        title: "Easy Reporting",
        description: "Capture or upload photos of horseshoe crabs and marine life",
    },
    OnboardingSlide {
        icon: "🌊",
        title: "Bay of Bengal Conservation",
        description: "Your reports help protect marine biodiversity in our region",
    },
];

/// Organism categories reportable in the Bay of Bengal region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrganismType {
    #[serde(rename = "Horseshoe Crab")]
    HorseshoeCrab,
    Shellfish,
    Shells,
    Crustaceans,
    Mollusks,
    #[serde(rename = "Unknown Organism")]
    UnknownOrganism,
    #[serde(rename = "Other Marine Life")]
    OtherMarineLife,
}

impl OrganismType {
    pub const ALL: [OrganismType; 7] = [
        OrganismType::HorseshoeCrab,
        OrganismType::Shellfish,
        OrganismType::Shells,
        OrganismType::Crustaceans,
        OrganismType::Mollusks,
        OrganismType::UnknownOrganism,
        OrganismType::OtherMarineLife,
    ];
}

impl fmt::Display for OrganismType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrganismType::HorseshoeCrab => "Horseshoe Crab",
            OrganismType::Shellfish => "Shellfish",
            OrganismType::Shells => "Shells",
            OrganismType::Crustaceans => "Crustaceans",
            OrganismType::Mollusks => "Mollusks",
            OrganismType::UnknownOrganism => "Unknown Organism",
            OrganismType::OtherMarineLife => "Other Marine Life",
        };
        f.write_str(label)
    }
}

/// Observed condition of the organism (always optional)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrganismCondition {
    Healthy,
    Injured,
    #[serde(rename = "In Distress")]
    InDistress,
    Deceased,
    Unknown,
}

impl OrganismCondition {
    pub const ALL: [OrganismCondition; 5] = [
        OrganismCondition::Healthy,
        OrganismCondition::Injured,
        OrganismCondition::InDistress,
        OrganismCondition::Deceased,
        OrganismCondition::Unknown,
    ];
}

impl fmt::Display for OrganismCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrganismCondition::Healthy => "Healthy",
            OrganismCondition::Injured => "Injured",
            OrganismCondition::InDistress => "In Distress",
            OrganismCondition::Deceased => "Deceased",
            OrganismCondition::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}
