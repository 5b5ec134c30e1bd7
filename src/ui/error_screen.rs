// SPDX-License-Identifier: MPL-2.0
//! Blocking error screen shown when the viewer cannot start.
//!
//! Startup failures (missing card directory, unreadable manifest, viewer
//! timeout) have no recovery path, so this screen replaces the whole
//! window content. Messages arrive already localized; this module only
//! lays them out.

use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{container, text, Column, Container};
use iced::{alignment, Element, Length, Theme};

/// Renders a centered, non-interactive error panel.
///
/// `detail` carries the underlying cause (an IO error, a TOML parse
/// message) and is shown in smaller secondary text below the message.
pub fn view<Message: 'static>(
    title: impl Into<String>,
    message: impl Into<String>,
    detail: Option<String>,
) -> Element<'static, Message> {
    let icon = icons::sized(icons::warning(), sizing::ICON_MD);

    let heading = text(title.into())
        .size(typography::TITLE_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        });

    let body = text(message.into()).size(typography::BODY_LG);

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(heading)
        .push(body);

    if let Some(detail_text) = detail {
        let detail = text(detail_text)
            .size(typography::CAPTION)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().secondary.base.text),
            });
        content = content.push(detail);
    }

    let panel = Container::new(content)
        .max_width(460.0)
        .padding(spacing::LG)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: iced::Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            text_color: Some(theme.palette().text),
            ..Default::default()
        });

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_detail() {
        let _: Element<'static, ()> = view(
            "Something went wrong",
            "Card directory not found",
            Some("No such file or directory".to_string()),
        );
    }

    #[test]
    fn builds_without_detail() {
        let _: Element<'static, ()> = view("Something went wrong", "Viewer timed out", None);
    }
}
