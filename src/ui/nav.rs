use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::state::session::Route;
use crate::Message;

/// Top bar wrapped around the gallery
pub fn view<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    let bar = row![
        button(text("🚀 Projects").size(40))
            .on_press(Message::Navigate(Route::Gallery))
            .style(button::text),
        horizontal_space(),
        button(text("➕ Add Project").size(18))
            .on_press(Message::Navigate(Route::CreateProject))
            .style(button::success)
            .padding([12, 24]),
        button(text("🔒 Logout").size(18))
            .on_press(Message::Logout)
            .style(button::danger)
            .padding([12, 24]),
    ]
    .spacing(24)
    .padding([24, 60])
    .align_y(Alignment::Center);

    column![
        container(bar).style(container::dark).width(Length::Fill),
        content,
    ]
    .into()
}
