//! The screen-flow state machine
//!
//! `Session` owns every field of the reporting flow and exposes one method
//! per user action or timer event. All mutation happens here so the flow is
//! unit-testable without opening a window; `main.rs` only routes messages.

use chrono::Local;
use iced::widget::image;

use super::data::{
    GpsStatus, Location, OrganismCondition, OrganismType, Screen, MOCK_LOCATION,
    ONBOARDING_SLIDES,
};
use super::report::SightingReport;

/// Session-scoped state for one run of the app
///
/// Nothing here outlives the process; there is no persistence.
#[derive(Debug, Clone)]
pub struct Session {
    pub screen: Screen,
    pub onboarding_step: usize,
    /// Tri-state: `None` = not asked yet, `Some(true)` = granted.
    /// The simulation never denies.
    pub camera_permission: Option<bool>,
    pub location_permission: Option<bool>,
    /// UI toggle only, no effect on capture
    pub flash_enabled: bool,
    pub gps_status: GpsStatus,
    /// Bumped on every entry into the capture screen so a lock timer
    /// fired for an earlier visit is recognised as stale and ignored.
    pub capture_generation: u64,
    pub captured_image: Option<image::Handle>,
    pub location: Option<Location>,
    /// Formatted at the capture moment, empty until the first photo
    pub timestamp: String,
    pub organism_type: Option<OrganismType>,
    pub organism_condition: Option<OrganismCondition>,
    pub notes: String,
}

impl Session {
    pub fn new() -> Self {
        Session {
            screen: Screen::Splash,
            onboarding_step: 0,
            camera_permission: None,
            location_permission: None,
            flash_enabled: false,
            gps_status: GpsStatus::Searching,
            capture_generation: 0,
            captured_image: None,
            location: None,
            timestamp: String::new(),
            organism_type: None,
            organism_condition: None,
            notes: String::new(),
        }
    }

    /// Splash timer fired. Inert unless still on the splash screen.
    pub fn splash_elapsed(&mut self) {
        if self.screen == Screen::Splash {
            self.screen = Screen::Onboarding;
        }
    }

    /// Advance one onboarding slide, stopping at the last one.
    /// The last slide offers "Get Started" instead, see `start_capture`.
    pub fn onboarding_next(&mut self) {
        if self.screen == Screen::Onboarding
            && self.onboarding_step + 1 < ONBOARDING_SLIDES.len()
        {
            self.onboarding_step += 1;
        }
    }

    /// Go back one onboarding slide, stopping at the first one
    pub fn onboarding_back(&mut self) {
        if self.screen == Screen::Onboarding {
            self.onboarding_step = self.onboarding_step.saturating_sub(1);
        }
    }

    /// Simulated permission grant, idempotent, never gates progression
    pub fn grant_camera_permission(&mut self) {
        self.camera_permission = Some(true);
    }

    pub fn grant_location_permission(&mut self) {
        self.location_permission = Some(true);
    }

    pub fn toggle_flash(&mut self) {
        self.flash_enabled = !self.flash_enabled;
    }

    /// "Get Started" on the last onboarding slide
    ///
    /// Returns the generation the caller should schedule the GPS lock
    /// timer with.
    pub fn start_capture(&mut self) -> u64 {
        self.enter_capture()
    }

    /// "Retake" on the form screen. The previous image is kept and only
    /// overwritten by the next capture.
    pub fn retake(&mut self) -> u64 {
        self.enter_capture()
    }

    /// "Report Another Sighting" on the success screen. Clears the
    /// submitted report's fields and returns to the viewfinder.
    pub fn report_another(&mut self) -> u64 {
        self.captured_image = None;
        self.organism_type = None;
        self.organism_condition = None;
        self.notes.clear();
        self.enter_capture()
    }

    /// Move to the capture screen and restart the simulated GPS search
    fn enter_capture(&mut self) -> u64 {
        self.screen = Screen::Capture;
        self.gps_status = GpsStatus::Searching;
        self.capture_generation += 1;
        self.capture_generation
    }

    /// GPS lock timer fired for `generation`. Stale timers (a previous
    /// capture visit) and timers arriving after the screen changed are
    /// ignored.
    pub fn gps_locked(&mut self, generation: u64) {
        if self.screen == Screen::Capture && generation == self.capture_generation {
            self.gps_status = GpsStatus::Locked;
            self.location = Some(MOCK_LOCATION);
        }
    }

    /// Accept a photo (shutter placeholder or gallery pick), stamp the
    /// capture time, and move to the form
    pub fn set_photo(&mut self, handle: image::Handle) {
        self.captured_image = Some(handle);
        self.timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.screen = Screen::Form;
    }

    pub fn select_organism_type(&mut self, organism: OrganismType) {
        self.organism_type = Some(organism);
    }

    pub fn select_condition(&mut self, condition: OrganismCondition) {
        self.organism_condition = Some(condition);
    }

    pub fn set_notes(&mut self, notes: String) {
        self.notes = notes;
    }

    /// Submission is gated only on an organism type being selected
    pub fn can_submit(&self) -> bool {
        self.organism_type.is_some()
    }

    /// Submit the report. Returns the report that "went out", or `None`
    /// if the gate is not met (the UI disables the button in that case).
    pub fn submit(&mut self) -> Option<SightingReport> {
        if self.screen != Screen::Form || !self.can_submit() {
            return None;
        }
        let report = SightingReport::from_session(self)?;
        self.screen = Screen::Success;
        Some(report)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{GPS_LOCK_DELAY, SPLASH_DELAY};

    fn test_photo() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    /// Walk a fresh session to the capture screen
    fn session_on_capture() -> Session {
        let mut session = Session::new();
        session.splash_elapsed();
        session.onboarding_step = ONBOARDING_SLIDES.len() - 1;
        session.start_capture();
        session
    }

    #[test]
    fn test_splash_transitions_to_onboarding() {
        let mut session = Session::new();
        assert_eq!(session.screen, Screen::Splash);

        session.splash_elapsed();
        assert_eq!(session.screen, Screen::Onboarding);
        assert_eq!(session.onboarding_step, 0);
    }

    #[test]
    fn test_splash_elapsed_is_inert_off_splash() {
        let mut session = session_on_capture();
        session.splash_elapsed();
        assert_eq!(session.screen, Screen::Capture);
    }

    #[test]
    fn test_onboarding_index_stays_in_bounds() {
        let mut session = Session::new();
        session.splash_elapsed();

        // Back on the first slide stays at 0
        session.onboarding_back();
        assert_eq!(session.onboarding_step, 0);

        // Next past the last slide stays at the last slide
        for _ in 0..ONBOARDING_SLIDES.len() * 2 {
            session.onboarding_next();
            assert!(session.onboarding_step < ONBOARDING_SLIDES.len());
        }
        assert_eq!(session.onboarding_step, ONBOARDING_SLIDES.len() - 1);
        assert_eq!(session.screen, Screen::Onboarding);

        session.onboarding_back();
        assert_eq!(session.onboarding_step, ONBOARDING_SLIDES.len() - 2);
    }

    #[test]
    fn test_permission_grants_are_idempotent() {
        let mut session = Session::new();
        session.splash_elapsed();
        assert_eq!(session.camera_permission, None);
        assert_eq!(session.location_permission, None);

        session.grant_camera_permission();
        session.grant_camera_permission();
        session.grant_location_permission();
        assert_eq!(session.camera_permission, Some(true));
        assert_eq!(session.location_permission, Some(true));

        // Grants never moved the flow
        assert_eq!(session.screen, Screen::Onboarding);
    }

    #[test]
    fn test_get_started_enters_capture_searching() {
        let mut session = Session::new();
        session.splash_elapsed();
        let generation = session.start_capture();

        assert_eq!(session.screen, Screen::Capture);
        assert_eq!(session.gps_status, GpsStatus::Searching);
        assert_eq!(generation, session.capture_generation);
        assert_eq!(session.location, None);
    }

    #[test]
    fn test_gps_lock_sets_mock_coordinate() {
        let mut session = session_on_capture();
        let generation = session.capture_generation;

        session.gps_locked(generation);
        assert_eq!(session.gps_status, GpsStatus::Locked);
        assert_eq!(session.location, Some(MOCK_LOCATION));
    }

    #[test]
    fn test_stale_gps_lock_is_ignored() {
        let mut session = session_on_capture();
        let stale = session.capture_generation;

        // Leave and re-enter capture before the first timer fires
        session.set_photo(test_photo());
        session.retake();

        session.gps_locked(stale);
        assert_eq!(session.gps_status, GpsStatus::Searching);
        assert_eq!(session.location, None);

        session.gps_locked(session.capture_generation);
        assert_eq!(session.gps_status, GpsStatus::Locked);
    }

    #[test]
    fn test_gps_lock_after_leaving_capture_is_ignored() {
        let mut session = session_on_capture();
        let generation = session.capture_generation;

        session.set_photo(test_photo());
        assert_eq!(session.screen, Screen::Form);

        session.gps_locked(generation);
        assert_eq!(session.gps_status, GpsStatus::Searching);
    }

    #[test]
    fn test_photo_sets_image_and_timestamp() {
        let mut session = session_on_capture();
        assert!(session.captured_image.is_none());
        assert!(session.timestamp.is_empty());

        session.set_photo(test_photo());
        assert_eq!(session.screen, Screen::Form);
        assert!(session.captured_image.is_some());
        assert!(!session.timestamp.is_empty());
    }

    #[test]
    fn test_retake_keeps_previous_image() {
        let mut session = session_on_capture();
        session.set_photo(test_photo());

        session.retake();
        assert_eq!(session.screen, Screen::Capture);
        assert!(session.captured_image.is_some());
        assert_eq!(session.gps_status, GpsStatus::Searching);
    }

    #[test]
    fn test_submit_requires_organism_type() {
        let mut session = session_on_capture();
        session.set_photo(test_photo());

        // Condition and notes alone do not unlock submission
        session.select_condition(OrganismCondition::Healthy);
        session.set_notes("two of them near the tide line".to_string());
        assert!(!session.can_submit());
        assert!(session.submit().is_none());
        assert_eq!(session.screen, Screen::Form);

        session.select_organism_type(OrganismType::HorseshoeCrab);
        assert!(session.can_submit());
        let report = session.submit().unwrap();
        assert_eq!(session.screen, Screen::Success);
        assert_eq!(report.organism_type, OrganismType::HorseshoeCrab);
    }

    #[test]
    fn test_submit_with_type_only() {
        let mut session = session_on_capture();
        session.set_photo(test_photo());
        session.select_organism_type(OrganismType::Mollusks);

        let report = session.submit().unwrap();
        assert_eq!(report.organism_condition, None);
        assert!(report.notes.is_empty());
    }

    #[test]
    fn test_report_another_clears_and_returns_to_capture() {
        let mut session = session_on_capture();
        session.gps_locked(session.capture_generation);
        session.set_photo(test_photo());
        session.select_organism_type(OrganismType::Crustaceans);
        session.select_condition(OrganismCondition::Injured);
        session.set_notes("stranded on the beach".to_string());
        session.submit().unwrap();
        assert_eq!(session.screen, Screen::Success);

        session.report_another();
        assert_eq!(session.screen, Screen::Capture);
        assert!(session.captured_image.is_none());
        assert_eq!(session.organism_type, None);
        assert_eq!(session.organism_condition, None);
        assert!(session.notes.is_empty());

        // GPS search restarts for the next sighting
        assert_eq!(session.gps_status, GpsStatus::Searching);
    }

    #[test]
    fn test_flash_toggle_flips_flag_only() {
        let mut session = session_on_capture();
        assert!(!session.flash_enabled);
        session.toggle_flash();
        assert!(session.flash_enabled);
        session.toggle_flash();
        assert!(!session.flash_enabled);
        assert_eq!(session.screen, Screen::Capture);
    }

    #[test]
    fn test_timing_constants() {
        // 2s splash, 3s GPS search
        assert_eq!(SPLASH_DELAY.as_secs(), 2);
        assert_eq!(GPS_LOCK_DELAY.as_secs(), 3);
    }
}
