//! Onboarding slideshow with permission prompts on the last slide

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::state::data::ONBOARDING_SLIDES;
use crate::state::session::Session;
use crate::Message;

pub fn view(session: &Session) -> Element<'_, Message> {
    let slide = &ONBOARDING_SLIDES[session.onboarding_step];
    let last_step = session.onboarding_step == ONBOARDING_SLIDES.len() - 1;

    let slide_content = column![
        text(slide.icon).size(64),
        text(slide.title).size(28),
        text(slide.description).size(18),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    // One dot per slide, the current one filled
    let dots = (0..ONBOARDING_SLIDES.len()).fold(row![].spacing(8), |dots, index| {
        dots.push(text(if index == session.onboarding_step {
            "●"
        } else {
            "○"
        }))
    });

    let back: Element<'_, Message> = if session.onboarding_step > 0 {
        button(text("← Back"))
            .on_press(Message::OnboardingBack)
            .padding(10)
            .into()
    } else {
        horizontal_space().into()
    };

    let forward: Element<'_, Message> = if last_step {
        button(text("Get Started →"))
            .on_press(Message::StartCapture)
            .padding(10)
            .into()
    } else {
        button(text("Next →"))
            .on_press(Message::OnboardingNext)
            .padding(10)
            .into()
    };

    let mut page = column![
        container(slide_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        container(dots).center_x(Length::Fill),
        row![back, horizontal_space(), forward].width(Length::Fill),
    ]
    .spacing(24)
    .padding(24);

    if last_step {
        page = page.push(permissions_card(session));
    }

    page.into()
}

/// The simulated permission prompts. Grants are cosmetic: progression
/// never waits on them.
fn permissions_card(session: &Session) -> Element<'_, Message> {
    let content = column![
        text("Permissions Required").size(20),
        permission_row(
            "Camera Access",
            "To capture horseshoe crab sightings",
            session.camera_permission,
            Message::GrantCameraPermission,
        ),
        permission_row(
            "Location Access",
            "To record sighting locations in Bay of Bengal",
            session.location_permission,
            Message::GrantLocationPermission,
        ),
    ]
    .spacing(12);

    container(content).padding(16).width(Length::Fill).into()
}

fn permission_row<'a>(
    name: &'a str,
    why: &'a str,
    granted: Option<bool>,
    on_allow: Message,
) -> Element<'a, Message> {
    let status: Element<'a, Message> = match granted {
        Some(true) => text("Granted ✓").into(),
        _ => button(text("Allow")).on_press(on_allow).padding(8).into(),
    };

    row![
        column![text(name).size(16), text(why).size(13)].spacing(2),
        horizontal_space(),
        status,
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}
