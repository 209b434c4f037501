use iced::widget::image;
use iced::{Element, Task, Theme};

mod capture;
mod state;
mod ui;

use capture::photo::{self, LoadedPhoto, PhotoError};
use state::data::{
    OrganismCondition, OrganismType, Screen, GPS_LOCK_DELAY, SPLASH_DELAY,
};
use state::session::Session;

/// Main application state
struct MarineGuardian {
    /// The screen-flow state machine
    session: Session,
    /// Simulated camera frame, generated once and reused
    viewfinder: image::Handle,
    /// Gallery failure line shown on the capture screen, empty when fine
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Splash delay elapsed
    SplashElapsed,
    OnboardingNext,
    OnboardingBack,
    GrantCameraPermission,
    GrantLocationPermission,
    /// "Get Started" on the last onboarding slide
    StartCapture,
    ToggleFlash,
    /// Simulated GPS search finished for the given capture generation
    GpsLocked(u64),
    /// Shutter pressed
    CapturePhoto,
    /// Gallery button pressed (capture screen, or "Change" on the form)
    OpenGallery,
    /// Gallery pick finished; `Ok(None)` means the dialog was cancelled
    GalleryLoaded(Result<Option<LoadedPhoto>, PhotoError>),
    OrganismTypeSelected(OrganismType),
    ConditionSelected(OrganismCondition),
    NotesChanged(String),
    Retake,
    SubmitReport,
    ReportAnother,
}

impl MarineGuardian {
    /// Create a new instance and start the splash timer
    fn new() -> (Self, Task<Message>) {
        println!("🌊 Marine Guardian starting");

        let app = MarineGuardian {
            session: Session::new(),
            viewfinder: photo::placeholder_photo(),
            status: String::new(),
        };

        (
            app,
            Task::perform(tokio::time::sleep(SPLASH_DELAY), |_| Message::SplashElapsed),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SplashElapsed => {
                self.session.splash_elapsed();
                Task::none()
            }
            Message::OnboardingNext => {
                self.session.onboarding_next();
                Task::none()
            }
            Message::OnboardingBack => {
                self.session.onboarding_back();
                Task::none()
            }
            Message::GrantCameraPermission => {
                self.session.grant_camera_permission();
                Task::none()
            }
            Message::GrantLocationPermission => {
                self.session.grant_location_permission();
                Task::none()
            }
            Message::StartCapture => {
                let generation = self.session.start_capture();
                gps_search(generation)
            }
            Message::ToggleFlash => {
                self.session.toggle_flash();
                Task::none()
            }
            Message::GpsLocked(generation) => {
                self.session.gps_locked(generation);
                Task::none()
            }
            Message::CapturePhoto => {
                println!("📷 Photo captured");
                self.session.set_photo(photo::placeholder_photo());
                Task::none()
            }
            Message::OpenGallery => {
                Task::perform(photo::pick_gallery_photo(), Message::GalleryLoaded)
            }
            Message::GalleryLoaded(Ok(Some(loaded))) => {
                println!("🖼  Using gallery photo {}", loaded.file_name);
                self.status.clear();
                self.session.set_photo(loaded.handle);
                Task::none()
            }
            Message::GalleryLoaded(Ok(None)) => {
                // Dialog cancelled, nothing changes
                Task::none()
            }
            Message::GalleryLoaded(Err(error)) => {
                eprintln!("⚠️  Gallery photo rejected: {error}");
                self.status = error.to_string();
                Task::none()
            }
            Message::OrganismTypeSelected(organism) => {
                self.session.select_organism_type(organism);
                Task::none()
            }
            Message::ConditionSelected(condition) => {
                self.session.select_condition(condition);
                Task::none()
            }
            Message::NotesChanged(notes) => {
                self.session.set_notes(notes);
                Task::none()
            }
            Message::Retake => {
                let generation = self.session.retake();
                gps_search(generation)
            }
            Message::SubmitReport => {
                if let Some(report) = self.session.submit() {
                    // Simulated submission: serialize and log the payload
                    match report.to_json() {
                        Ok(json) => println!("📤 Report submitted:\n{json}"),
                        Err(error) => eprintln!("⚠️  Could not serialize report: {error}"),
                    }
                }
                Task::none()
            }
            Message::ReportAnother => {
                let generation = self.session.report_another();
                gps_search(generation)
            }
        }
    }

    /// Render whichever screen the session is on
    fn view(&self) -> Element<'_, Message> {
        match self.session.screen {
            Screen::Splash => ui::splash::view(),
            Screen::Onboarding => ui::onboarding::view(&self.session),
            Screen::Capture => ui::capture::view(&self.session, &self.viewfinder, &self.status),
            Screen::Form => ui::form::view(&self.session, &self.status),
            Screen::Success => ui::success::view(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Nord
    }
}

/// Schedule the simulated GPS lock for one visit to the capture screen.
/// The generation lets the session drop the message if the user has
/// already left and come back.
fn gps_search(generation: u64) -> Task<Message> {
    Task::perform(tokio::time::sleep(GPS_LOCK_DELAY), move |_| {
        Message::GpsLocked(generation)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An app sitting on the form screen with a captured photo
    fn app_on_form() -> MarineGuardian {
        let mut app = MarineGuardian {
            session: Session::new(),
            viewfinder: photo::placeholder_photo(),
            status: String::new(),
        };
        app.session.splash_elapsed();
        app.session.start_capture();
        app.session.set_photo(photo::placeholder_photo());
        assert_eq!(app.session.screen, Screen::Form);
        app
    }

    #[test]
    fn test_gallery_failure_on_form_sets_status() {
        let mut app = app_on_form();

        let _ = app.update(Message::GalleryLoaded(Err(PhotoError::Decode(
            "bad file".to_string(),
        ))));

        // The user stays on the form and the failure line is there to render
        assert_eq!(app.session.screen, Screen::Form);
        assert!(!app.status.is_empty());
    }

    #[test]
    fn test_successful_gallery_pick_clears_status() {
        let mut app = app_on_form();
        let _ = app.update(Message::GalleryLoaded(Err(PhotoError::Read(
            "no such file".to_string(),
        ))));
        assert!(!app.status.is_empty());

        let loaded = LoadedPhoto {
            handle: photo::placeholder_photo(),
            file_name: "crab.png".to_string(),
        };
        let _ = app.update(Message::GalleryLoaded(Ok(Some(loaded))));

        assert!(app.status.is_empty());
        assert_eq!(app.session.screen, Screen::Form);
    }

    #[test]
    fn test_cancelled_gallery_pick_changes_nothing() {
        let mut app = app_on_form();
        let before = app.session.clone();

        let _ = app.update(Message::GalleryLoaded(Ok(None)));

        assert_eq!(app.session.screen, before.screen);
        assert_eq!(app.session.timestamp, before.timestamp);
        assert!(app.status.is_empty());
    }
}

fn main() -> iced::Result {
    iced::application(
        "Marine Guardian",
        MarineGuardian::update,
        MarineGuardian::view,
    )
    .theme(MarineGuardian::theme)
    .window_size((430.0, 860.0))
    .centered()
    .run_with(MarineGuardian::new)
}
