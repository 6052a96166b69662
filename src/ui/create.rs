use iced::widget::{button, center, column, container, image, pick_list, row, text, text_input};
use iced::{Alignment, ContentFit, Element, Length, Theme};

use crate::state::create::CreateForm;
use crate::state::data::ProjectType;
use crate::Message;

pub fn view(form: &CreateForm) -> Element<'_, Message> {
    let busy = form.status.is_loading();

    let prompt = match form.drop_zone.loading() {
        Some(path) => format!(
            "⏳ Reading {}...",
            path.file_name().unwrap_or(path.as_os_str()).to_string_lossy()
        ),
        None if form.drop_zone.is_active() => "📂 Drop the image here...".to_string(),
        None => "Drag & drop an image or click to upload".to_string(),
    };

    let zone = column![text(prompt).size(18)]
        .push_maybe(form.image.as_ref().map(|file| {
            image(file.image.handle())
                .width(Length::Fill)
                .height(190)
                .content_fit(ContentFit::Cover)
        }))
        .spacing(12)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    let zone_style: fn(&Theme, button::Status) -> button::Style = if form.drop_zone.is_active() {
        button::primary
    } else {
        button::secondary
    };

    let content = column![
        text("Add Project").size(28),
        button(zone)
            .on_press(Message::Browse)
            .style(zone_style)
            .padding(24)
            .width(Length::Fill),
    ]
    .push_maybe(
        form.image
            .as_ref()
            .map(|file| text(format!("📁 Selected: {}", file.file_name)).size(14)),
    )
    .push(
        text_input("Project Description", &form.description)
            .on_input(Message::DescriptionChanged)
            .padding(12),
    )
    .push(
        column![
            text("Project Type"),
            pick_list(ProjectType::ALL, form.project_type, Message::TypeSelected)
                .placeholder("Select a project type")
                .width(Length::Fill),
        ]
        .spacing(8),
    )
    .push(
        row![
            button(text("Cancel").width(Length::Fill).center())
                .on_press(Message::Back)
                .style(button::secondary)
                .width(Length::Fill)
                .padding(12),
            button(text("Add Project").width(Length::Fill).center())
                .on_press_maybe((!busy).then_some(Message::CreateSubmitted))
                .style(button::success)
                .width(Length::Fill)
                .padding(12),
        ]
        .spacing(16),
    )
    .push_maybe(form.notice.as_ref().map(super::notice))
    .spacing(20)
    .align_x(Alignment::Center);

    center(
        container(content)
            .padding(32)
            .max_width(520)
            .style(container::rounded_box),
    )
    .padding(20)
    .into()
}
