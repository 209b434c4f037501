//! Capture screen: simulated viewfinder, GPS indicator, shutter controls

use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::GpsStatus;
use crate::state::session::Session;
use crate::Message;

pub fn view<'a>(
    session: &'a Session,
    viewfinder: &image::Handle,
    status_line: &'a str,
) -> Element<'a, Message> {
    let gps_label = match session.gps_status {
        GpsStatus::Searching => "📡 Acquiring location...",
        GpsStatus::Locked => "🛰 Bay of Bengal location",
        GpsStatus::Error => "📡 Location error",
    };

    let flash_icon = if session.flash_enabled { "⚡" } else { "⚡̸" };

    let top_bar = row![
        text(gps_label).size(14),
        horizontal_space(),
        button(text(flash_icon)).on_press(Message::ToggleFlash).padding(8),
    ]
    .align_y(Alignment::Center)
    .padding(12)
    .width(Length::Fill);

    // Placeholder standing in for the live camera frame
    let camera_view = container(
        column![
            image(viewfinder.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover),
            text("Camera View — point at horseshoe crabs").size(14),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let shutter_bar = row![
        button(text("🖼").size(24))
            .on_press(Message::OpenGallery)
            .padding(14),
        button(text("📷").size(32))
            .on_press(Message::CapturePhoto)
            .padding(20),
        button(text(flash_icon).size(24))
            .on_press(Message::ToggleFlash)
            .padding(14),
    ]
    .spacing(32)
    .align_y(Alignment::Center);

    let mut page = column![
        top_bar,
        camera_view,
        container(shutter_bar).center_x(Length::Fill).padding(20),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    // Gallery read/decode failures surface here without breaking the flow
    if !status_line.is_empty() {
        page = page.push(
            container(text(status_line).size(13))
                .center_x(Length::Fill)
                .padding(6),
        );
    }

    page.into()
}
