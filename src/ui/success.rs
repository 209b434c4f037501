//! Success screen after a simulated submission

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

pub fn view() -> Element<'static, Message> {
    let content = column![
        text("✅").size(64),
        text("Report Submitted!").size(30),
        text("Thank you for protecting horseshoe crabs in the Bay of Bengal").size(17),
        text("Your report helps scientists track populations and protect habitats").size(14),
        button(
            container(text("Report Another Sighting"))
                .center_x(Length::Fill)
                .width(Length::Fill)
        )
        .on_press(Message::ReportAnother)
        .padding(12)
        .width(Length::Fill),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .max_width(420);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(24)
        .into()
}
