//! Splash screen, shown while the app "initializes"

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

pub fn view() -> Element<'static, Message> {
    let content = column![
        text("📍").size(64),
        text("Marine Guardian").size(36),
        text("Bay of Bengal Conservation").size(18),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
