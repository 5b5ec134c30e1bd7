// SPDX-License-Identifier: MPL-2.0
//! The video surface: reveal poster, playback progress, and the skip
//! control.
//!
//! The poster stands in for the reveal clip the way the clock-driven
//! playback adapter stands in for a media engine; progress comes from the
//! same adapter, so the bar tracks exactly what the state machine believes.

use iced::widget::image::Handle;
use iced::widget::{button, progress_bar, text, Column, Container, Image, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

use crate::app::i18n::I18n;
use crate::ui::design_tokens::{opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;

/// Controls offered while the reveal plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SkipPressed,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub poster: &'a Handle,
    /// Playback position as a fraction of the clip, in [0, 1].
    pub progress: f32,
}

/// Renders the reveal surface.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let poster = Image::new(ctx.poster.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let bar = progress_bar(0.0..=1.0, ctx.progress.clamp(0.0, 1.0));

    let skip_label = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::skip(), sizing::ICON_SM))
        .push(Text::new(ctx.i18n.tr("button-skip")).size(typography::BODY));

    let skip_button = button(skip_label)
        .on_press(Message::SkipPressed)
        .padding([spacing::XXS, spacing::SM])
        .style(skip_button_style);

    let hint = Text::new(ctx.i18n.tr("hint-skip"))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(bar).width(Length::Fill))
        .push(hint)
        .push(skip_button);

    Column::new()
        .push(
            Container::new(poster)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(
            Container::new(controls)
                .width(Length::Fill)
                .padding(spacing::MD),
        )
        .into()
}

/// Style function for the skip button: a quiet pill over the video.
fn skip_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background_alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(iced::Background::Color(iced::Color {
            a: background_alpha,
            ..palette.background.strong.color
        })),
        text_color: palette.background.base.text,
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
