//! View layer
//!
//! Every view is a pure function from state to widgets. Nothing here owns
//! state or talks to the network.

use iced::widget::{center, container, stack, text};
use iced::{Color, Element, Theme};

use crate::state::view_state::{Notice, NoticeKind};
use crate::Message;

pub mod create;
pub mod gallery;
pub mod login;
pub mod nav;

/// Render a form notice in the colour of its kind
pub fn notice(notice: &Notice) -> Element<'_, Message> {
    let style: fn(&Theme) -> text::Style = match notice.kind {
        NoticeKind::Success => text::success,
        NoticeKind::Warning | NoticeKind::Error => text::danger,
    };

    text(&notice.text).style(style).size(16).into()
}

/// Layer a dialog over a dimmed copy of the view
pub fn modal<'a>(base: Element<'a, Message>, dialog: Element<'a, Message>) -> Element<'a, Message> {
    let backdrop = center(dialog).style(|_theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
        ..container::Style::default()
    });

    stack![base, iced::widget::opaque(backdrop)].into()
}
