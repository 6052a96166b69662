use iced::widget::{
    button, column, container, image, pick_list, row, scrollable, text, text_input, Row,
};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::{Project, ProjectType};
use crate::state::gallery::{EditDraft, Gallery};
use crate::Message;

/// Card grid with the edit and delete dialogs layered on top
pub fn view(gallery: &Gallery) -> Element<'_, Message> {
    let mut content = column![]
        .spacing(24)
        .padding([40, 24])
        .width(Length::Fill)
        .align_x(Alignment::Center);

    if let Some(error) = gallery.error_message() {
        content = content.push(text(error).style(text::danger).size(16));
    }

    if gallery.shows_placeholder() {
        content = content.push(
            text(gallery.placeholder_text())
                .size(32)
                .style(text::danger),
        );
    } else {
        let cards = gallery.projects().iter().map(card);
        content = content.push(Row::with_children(cards).spacing(40).wrap());
    }

    let base: Element<'_, Message> = scrollable(content).height(Length::Fill).into();

    if let Some(draft) = gallery.editing() {
        super::modal(base, edit_dialog(draft))
    } else if gallery.pending_delete().is_some() {
        super::modal(base, confirm_dialog())
    } else {
        base
    }
}

fn card(project: &Project) -> Element<'_, Message> {
    let picture = image(project.image.handle())
        .width(Length::Fill)
        .height(200)
        .content_fit(ContentFit::Cover);

    let details = column![
        text(&project.project_name).size(18),
        text(project.project_type.to_string())
            .size(12)
            .style(text::primary),
        text(format!("Description: {}", project.description)).size(14),
    ]
    .spacing(6)
    .height(140);

    let actions = row![
        button(text("✏️ Edit"))
            .on_press(Message::EditRequested(project.id.clone()))
            .style(button::primary)
            .padding([8, 24]),
        button(text("🗑️ Delete"))
            .on_press(Message::DeleteRequested(project.id.clone()))
            .style(button::danger)
            .padding([8, 24]),
    ]
    .spacing(12);

    container(
        column![picture, details, actions]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .width(350)
    .padding(12)
    .style(container::rounded_box)
    .into()
}

fn edit_dialog(draft: &EditDraft) -> Element<'_, Message> {
    let selected = match &draft.image {
        Some(file) => format!("📁 Selected: {}", file.file_name),
        None => "Current image is kept".to_string(),
    };

    let content = column![
        text("Edit Project").size(28),
        text("Project Image"),
        row![
            button(text("Choose file"))
                .on_press(Message::EditBrowse)
                .style(button::secondary),
            text(selected).size(14),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        text("Description"),
        text_input("Enter project description", &draft.description)
            .on_input(Message::EditDescriptionChanged)
            .padding(12),
        text("Project Type"),
        pick_list(ProjectType::ALL, Some(draft.project_type), Message::EditTypeSelected)
            .placeholder("Select a project type")
            .width(Length::Fill),
        row![
            button(text("Save").width(Length::Fill).center())
                .on_press(Message::EditSaved)
                .style(button::success)
                .width(Length::Fill),
            button(text("Cancel").width(Length::Fill).center())
                .on_press(Message::EditCancelled)
                .style(button::secondary)
                .width(Length::Fill),
        ]
        .spacing(16),
    ]
    .push_maybe(draft.notice.as_ref().map(super::notice))
    .spacing(12);

    container(content)
        .padding(32)
        .max_width(500)
        .style(container::rounded_box)
        .into()
}

fn confirm_dialog<'a>() -> Element<'a, Message> {
    let content = column![
        text("Confirm Deletion").size(24),
        text("Are you sure you want to delete this project?"),
        row![
            button(text("Yes, Delete").width(Length::Fill).center())
                .on_press(Message::DeleteConfirmed)
                .style(button::danger)
                .width(Length::Fill),
            button(text("Cancel").width(Length::Fill).center())
                .on_press(Message::DeleteCancelled)
                .style(button::secondary)
                .width(Length::Fill),
        ]
        .spacing(16),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .padding(24)
        .max_width(400)
        .style(container::rounded_box)
        .into()
}
