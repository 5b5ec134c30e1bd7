// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One window, three possible contents: a blocking startup error, a
//! loading placeholder while the card art decodes, or the card stage. The
//! stage cross-fades with the reveal video by stacking the two surfaces
//! and fading the card layer; toasts sit on top of everything.

use std::time::Instant;

use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, Element, Length, Theme};

use super::{Message, StartupError};
use crate::app::i18n::I18n;
use crate::error::{Error, ResourceError};
use crate::interaction::{InteractionController, RevealSurface};
use crate::playback::ClockPlayback;
use crate::resources::CardManifest;
use crate::ui::card_art::CardArt;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theme::{ColorScheme, ThemeMode};
use crate::ui::{card_pane, error_screen, icons, notifications, video_pane};
use crate::viewer::{CardViewer, ViewerPort};

/// Context required to render the application view.
pub(super) struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub manifest: Option<&'a CardManifest>,
    pub card_art: Option<&'a CardArt>,
    pub controller: &'a InteractionController<CardViewer, ClockPlayback>,
    pub notifications: &'a notifications::Manager,
    pub startup_error: Option<&'a StartupError>,
    pub share_in_flight: bool,
    pub theme_mode: ThemeMode,
    pub now: Instant,
}

/// Renders the whole window.
pub(super) fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if let Some(error) = ctx.startup_error {
        let (message, detail) = resolve_startup_error(ctx.i18n, error);
        return error_screen::view(ctx.i18n.tr("error-title"), message, detail);
    }

    let content: Element<'_, Message> = match (ctx.card_art, ctx.manifest) {
        (Some(art), Some(manifest)) => view_card(&ctx, art, manifest),
        _ => view_loading(ctx.i18n),
    };

    let toasts =
        notifications::Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(toasts)
        .into()
}

/// The card stage, the reveal video, or both mid-fade.
fn view_card<'a>(
    ctx: &ViewContext<'a>,
    art: &'a CardArt,
    manifest: &'a CardManifest,
) -> Element<'a, Message> {
    let scheme = ColorScheme::for_mode(ctx.theme_mode);
    let reveal = ctx.controller.reveal();
    let fade = ctx.controller.transition_progress(ctx.now);

    // The stage sits above the video surface and fades; the video never
    // changes opacity itself.
    let card_opacity = match (reveal.transition_target(), fade) {
        (Some(RevealSurface::Video), Some(f)) => 1.0 - f,
        (Some(RevealSurface::Model), Some(f)) => f,
        _ => 1.0,
    };

    let orbit = ctx.controller.viewer().orientation().unwrap_or_default();

    let stage = card_pane::view(card_pane::ViewContext {
        art,
        orbit,
        card_opacity,
        progress: ctx.controller.progress(),
        particles: ctx.controller.particles(),
        accent: scheme.accent,
    })
    .map(Message::CardPane);

    let video = video_pane::view(video_pane::ViewContext {
        i18n: ctx.i18n,
        poster: &art.poster,
        progress: ctx.controller.playback_progress(),
    })
    .map(Message::VideoPane);

    let surface: Element<'a, Message> = if reveal.is_video() {
        video
    } else if reveal.is_transitioning() {
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(video)
            .push(stage)
            .into()
    } else {
        stage
    };

    let mut layout = Column::new().push(
        Container::new(surface)
            .width(Length::Fill)
            .height(Length::Fill),
    );
    if reveal.is_model() {
        layout = layout.push(bottom_bar(ctx, manifest));
    }
    layout.into()
}

/// Card identity, the hold hint, and the share button.
fn bottom_bar<'a>(ctx: &ViewContext<'a>, manifest: &'a CardManifest) -> Element<'a, Message> {
    let identity = Column::new()
        .spacing(spacing::XXS)
        .push(text(manifest.title.as_str()).size(typography::BODY_LG))
        .push(
            text(manifest.handle.as_str())
                .size(typography::CAPTION)
                .style(secondary_text),
        );

    let hint = text(ctx.i18n.tr("hint-hold-to-reveal"))
        .size(typography::CAPTION)
        .style(secondary_text);

    let share_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::share(), sizing::ICON_SM))
            .push(text(ctx.i18n.tr("button-share"))),
    )
    .on_press_maybe((!ctx.share_in_flight).then_some(Message::ShareRequested))
    .padding([spacing::XXS, spacing::SM])
    .style(share_button_style);

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(identity)
        .push(
            Container::new(hint)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(share_button)
        .into()
}

fn view_loading(i18n: &I18n) -> Element<'_, Message> {
    Container::new(
        text(i18n.tr("loading-viewer"))
            .size(typography::BODY_LG)
            .style(secondary_text),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().secondary.base.text),
    }
}

fn share_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let (background, text_color) = match status {
        button::Status::Active => (palette.primary.base.color, palette.primary.base.text),
        button::Status::Hovered => (palette.primary.strong.color, palette.primary.strong.text),
        button::Status::Pressed => (palette.primary.weak.color, palette.primary.weak.text),
        button::Status::Disabled => (
            palette.background.weak.color,
            palette.background.weak.text,
        ),
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color,
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

/// Turns a startup error into a localized message plus optional technical
/// detail for the blocking error screen.
fn resolve_startup_error(i18n: &I18n, error: &StartupError) -> (String, Option<String>) {
    match error {
        StartupError::ViewerTimeout => (i18n.tr("error-viewer-timeout"), None),
        StartupError::Load(Error::Resource(resource)) => {
            let message = match resource {
                ResourceError::Missing(path) | ResourceError::DirectoryNotFound(path) => {
                    let path = path.display().to_string();
                    i18n.tr_with_args(resource.i18n_key(), &[("path", path.as_str())])
                }
                ResourceError::ManifestUnreadable(detail)
                | ResourceError::ManifestInvalid(detail) => {
                    i18n.tr_with_args(resource.i18n_key(), &[("detail", detail)])
                }
            };
            (message, None)
        }
        StartupError::Load(other) => (i18n.tr("error-card-art"), Some(other.to_string())),
    }
}
