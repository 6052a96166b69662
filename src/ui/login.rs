use iced::widget::{button, center, column, container, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::login::LoginForm;
use crate::Message;

pub fn view(form: &LoginForm) -> Element<'_, Message> {
    let submit = (!form.status.is_loading()).then_some(Message::LoginSubmitted);

    let content = column![text("Welcome Boss").size(32)]
        .push_maybe(form.error().map(|error| text(error).style(text::danger).size(14)))
        .push(
            column![
                text("Username"),
                text_input("", &form.username)
                    .on_input(Message::UsernameChanged)
                    .on_submit(Message::LoginSubmitted)
                    .padding(12),
            ]
            .spacing(4),
        )
        .push(
            column![
                text("Password"),
                text_input("", &form.password)
                    .secure(true)
                    .on_input(Message::PasswordChanged)
                    .on_submit(Message::LoginSubmitted)
                    .padding(12),
            ]
            .spacing(4),
        )
        .push(
            button(text("Login").size(18).width(Length::Fill).center())
                .on_press_maybe(submit)
                .style(button::primary)
                .width(Length::Fill)
                .padding(12),
        )
        .spacing(16)
        .align_x(Alignment::Center);

    center(
        container(content)
            .padding(32)
            .max_width(400)
            .style(container::rounded_box),
    )
    .into()
}
