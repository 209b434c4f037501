//! Sighting details form

use iced::widget::{
    button, column, container, horizontal_space, image, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Alignment, Element, Length};

use crate::state::data::{OrganismCondition, OrganismType};
use crate::state::session::Session;
use crate::Message;

pub fn view<'a>(session: &'a Session, status_line: &'a str) -> Element<'a, Message> {
    let header = row![
        text("Report Sighting").size(26),
        horizontal_space(),
        button(text("🖼 Change")).on_press(Message::OpenGallery).padding(8),
        button(text("↺ Retake")).on_press(Message::Retake).padding(8),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .width(Length::Fill);

    let photo: Element<'_, Message> = match &session.captured_image {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(260.0))
            .into(),
        None => container(text("📷").size(48))
            .width(Length::Fill)
            .height(Length::Fixed(260.0))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    let location_line = match &session.location {
        Some(location) => format!(
            "📍 {:.4}, {:.4} (Bay of Bengal)",
            location.lat, location.lng
        ),
        None => "📍 Location not available".to_string(),
    };

    let details = column![
        text("Sighting Details").size(18),
        text(location_line).size(14),
        text(format!("🕒 {}", session.timestamp)).size(14),
    ]
    .spacing(6);

    let organism = column![
        text("Organism Information").size(18),
        text("Organism Type *").size(14),
        pick_list(
            &OrganismType::ALL[..],
            session.organism_type,
            Message::OrganismTypeSelected,
        )
        .placeholder("Select organism type")
        .width(Length::Fill),
        text("Condition").size(14),
        pick_list(
            &OrganismCondition::ALL[..],
            session.organism_condition,
            Message::ConditionSelected,
        )
        .placeholder("Select condition (optional)")
        .width(Length::Fill),
        text("Additional Notes").size(14),
        text_input(
            "Describe the sighting, behavior, or environment...",
            &session.notes,
        )
        .on_input(Message::NotesChanged)
        .padding(10),
    ]
    .spacing(8);

    // Greyed out until an organism type is chosen
    let submit = button(
        container(text("Submit Report"))
            .center_x(Length::Fill)
            .width(Length::Fill),
    )
    .on_press_maybe(session.can_submit().then_some(Message::SubmitReport))
    .padding(12)
    .width(Length::Fill);

    let mut page = column![
        header,
        scrollable(column![photo, details, organism].spacing(16)).height(Length::Fill),
    ]
    .spacing(16)
    .padding(16)
    .width(Length::Fill)
    .height(Length::Fill);

    // A failed "Change" pick surfaces here, next to the button that caused it
    if !status_line.is_empty() {
        page = page.push(
            container(text(status_line).size(13))
                .center_x(Length::Fill)
                .padding(6),
        );
    }

    page.push(submit).into()
}
