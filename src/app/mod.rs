// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the reveal interaction.
//!
//! The `App` struct wires the interaction core (state machine, camera,
//! feedback) to the Iced shell and translates messages into side effects
//! like share tasks or card art decoding. This file intentionally keeps
//! policy decisions (window sizing, startup failure handling, where the
//! reveal duration comes from) close to the main update loop so it is easy
//! to audit user-facing behavior.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use std::fmt;
use std::time::{Duration, Instant};

use iced::{window, Element, Subscription, Task, Theme};

use crate::camera::{CameraController, CameraTuning};
use crate::error::Error;
use crate::feedback::{HapticsPort, NoopHaptics, ParticleField};
use crate::interaction::{InteractionController, InteractionTuning};
use crate::playback::ClockPlayback;
use crate::resources::CardManifest;
use crate::ui::card_art::CardArt;
use crate::ui::notifications::{self, Notification};
use crate::ui::theme::ThemeMode;
use crate::ui::video_pane;
use crate::viewer::CardViewer;
use i18n::I18n;

/// Default window size, portrait to match the card aspect plus chrome.
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
/// Minimum window width the layout still works at.
pub const MIN_WINDOW_WIDTH: u32 = 360;
/// Minimum window height the layout still works at.
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Card bundle opened when no directory is given on the command line.
pub const DEFAULT_CARD_DIR: &str = "assets/cards/sample";

/// How long the 3D surface may stay not-ready after launch before startup
/// is declared failed and the blocking error screen takes over.
const VIEWER_READY_TIMEOUT: Duration = Duration::from_secs(config::VIEWER_READY_TIMEOUT_SECS);

/// Failure that prevents the card from being shown at all.
///
/// Anything recoverable (share failures, playback hiccups) goes through
/// toasts instead; a `StartupError` replaces the whole window content.
#[derive(Debug, Clone)]
pub enum StartupError {
    /// The card bundle or its art could not be loaded.
    Load(Error),
    /// The 3D surface never reported ready.
    ViewerTimeout,
}

/// Root Iced application state bridging the interaction core, localization,
/// and the share pipeline.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    manifest: Option<CardManifest>,
    controller: InteractionController<CardViewer, ClockPlayback>,
    haptics: Box<dyn HapticsPort>,
    notifications: notifications::Manager,
    card_art: Option<CardArt>,
    startup_error: Option<StartupError>,
    /// A share task is running; the share button is disabled meanwhile.
    share_in_flight: bool,
    /// Last cursor position over the card stage, for drag deltas.
    last_cursor: Option<iced::Point>,
    launched_at: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("card", &self.manifest.as_ref().map(|m| m.title.as_str()))
            .field("reveal", &self.controller.reveal())
            .field("startup_error", &self.startup_error)
            .field("share_in_flight", &self.share_in_flight)
            .finish()
    }
}

fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off asynchronous card art
    /// decoding based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let card_dir = flags.card_dir.as_deref().unwrap_or(DEFAULT_CARD_DIR);
        let (manifest, startup_error) = match CardManifest::load(std::path::Path::new(card_dir)) {
            Ok(manifest) => (Some(manifest), None),
            Err(err) => {
                log::error!("failed to load card bundle from {}: {}", card_dir, err);
                (None, Some(StartupError::Load(err)))
            }
        };

        let reveal_secs = manifest
            .as_ref()
            .map(|m| m.reveal_duration_secs)
            .unwrap_or(config::DEFAULT_REVEAL_DURATION_SECS);

        let controller = InteractionController::new(
            InteractionTuning::from_config(&config),
            CameraController::new(CameraTuning::from_config(&config.camera)),
            ParticleField::from_config(&config.effects),
            CardViewer::new(),
            ClockPlayback::new(reveal_secs),
        );

        let mut notifications = notifications::Manager::new();
        if let Some(warning_key) = config_warning {
            notifications.push(Notification::warning(warning_key));
        }

        let task = match &manifest {
            Some(manifest) => {
                let manifest = manifest.clone();
                Task::perform(
                    async move { CardArt::load(&manifest) },
                    Message::CardArtLoaded,
                )
            }
            None => Task::none(),
        };

        let app = App {
            i18n,
            config,
            manifest,
            controller,
            haptics: Box::new(NoopHaptics),
            notifications,
            card_art: None,
            startup_error,
            share_in_flight: false,
            last_cursor: None,
            launched_at: Instant::now(),
        };

        (app, task)
    }

    /// Window title: the card name when one is loaded, plus the app name.
    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.manifest {
            Some(manifest) => format!("{} - {}", manifest.title, app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        match self.config.general.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.startup_error.is_some()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CardPane(msg) => update::handle_card_pane(self, msg),
            Message::VideoPane(video_pane::Message::SkipPressed) => update::handle_skip(self),
            Message::Tick(now) => update::handle_tick(self, now),
            Message::ShareRequested => update::handle_share_requested(self),
            Message::ShareCompleted(outcome) => update::handle_share_completed(self, outcome),
            Message::SkipRequested => update::handle_skip(self),
            Message::CardArtLoaded(result) => update::handle_card_art_loaded(self, result),
            Message::WindowFocusChanged(focused) => update::handle_focus_changed(self, focused),
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            manifest: self.manifest.as_ref(),
            card_art: self.card_art.as_ref(),
            controller: &self.controller,
            notifications: &self.notifications,
            startup_error: self.startup_error.as_ref(),
            share_in_flight: self.share_in_flight,
            theme_mode: self.config.general.theme_mode,
            now: Instant::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResourceError;
    use crate::interaction::RevealState;
    use crate::share::{ShareMethod, ShareOutcome};
    use crate::ui::card_pane;
    use crate::viewer::ViewerPort;
    use iced::widget::image::Handle;
    use iced::Point;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    /// Runs `test` with `HOLOCARD_CONFIG_DIR` pointed at a fresh temp dir,
    /// serialized so parallel tests do not fight over the variable.
    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = paths::env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    const CARD_MANIFEST: &str = r#"
title = "Aurora Drake"
handle = "@nightfoil"
front_image = "front.png"
back_image = "back.png"
reveal_poster = "reveal.png"
reveal_duration_secs = 4.0
"#;

    fn write_sample_card(dir: &Path) {
        fs::write(dir.join("card.toml"), CARD_MANIFEST).expect("failed to write manifest");
        for asset in ["front.png", "back.png", "reveal.png"] {
            fs::write(dir.join(asset), b"png-bytes").expect("failed to write asset");
        }
    }

    fn card_flags(dir: &Path) -> Flags {
        Flags {
            card_dir: Some(dir.to_string_lossy().into_owned()),
            ..Flags::default()
        }
    }

    /// Builds a 1x1 `CardArt` without touching the decoder.
    fn sample_art() -> CardArt {
        let pixel = Handle::from_rgba(1, 1, vec![255; 4]);
        CardArt {
            front: pixel.clone(),
            back: pixel.clone(),
            poster: pixel,
            front_size: (1, 1),
        }
    }

    /// App with a loaded card and a ready viewer, the common test fixture.
    fn ready_app(card_dir: &Path) -> App {
        write_sample_card(card_dir);
        let (mut app, _task) = App::new(card_flags(card_dir));
        let _ = app.update(Message::CardArtLoaded(Ok(sample_art())));
        app
    }

    #[test]
    fn new_loads_the_card_from_flags() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            write_sample_card(card_dir.path());

            let (app, _task) = App::new(card_flags(card_dir.path()));

            assert!(app.startup_error.is_none());
            let manifest = app.manifest.as_ref().expect("manifest should load");
            assert_eq!(manifest.title, "Aurora Drake");
            assert!(app.controller.reveal().is_model());
        });
    }

    #[test]
    fn missing_card_directory_is_a_startup_error() {
        with_temp_config_dir(|_| {
            let dir = tempdir().expect("failed to create temp dir");
            let gone = dir.path().join("no-card-here");

            let (app, _task) = App::new(card_flags(&gone));

            assert!(app.manifest.is_none());
            assert!(matches!(
                app.startup_error,
                Some(StartupError::Load(Error::Resource(
                    ResourceError::DirectoryNotFound(_)
                )))
            ));
        });
    }

    #[test]
    fn title_includes_the_card_name() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            write_sample_card(card_dir.path());

            let (app, _task) = App::new(card_flags(card_dir.path()));

            assert_eq!(app.title(), "Aurora Drake - HoloCard");
        });
    }

    #[test]
    fn corrupt_config_surfaces_a_warning_notification() {
        with_temp_config_dir(|config_dir| {
            fs::write(config_dir.join("settings.toml"), "not [valid toml")
                .expect("failed to write config");
            let card_dir = tempdir().expect("failed to create card dir");
            write_sample_card(card_dir.path());

            let (app, _task) = App::new(card_flags(card_dir.path()));

            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn card_art_success_marks_the_viewer_ready() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            write_sample_card(card_dir.path());
            let (mut app, _task) = App::new(card_flags(card_dir.path()));
            assert!(!app.controller.viewer().is_ready());

            let _ = app.update(Message::CardArtLoaded(Ok(sample_art())));

            assert!(app.controller.viewer().is_ready());
            assert!(app.card_art.is_some());
            assert!(app.startup_error.is_none());
        });
    }

    #[test]
    fn card_art_failure_is_a_startup_error() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            write_sample_card(card_dir.path());
            let (mut app, _task) = App::new(card_flags(card_dir.path()));

            let _ = app.update(Message::CardArtLoaded(Err(Error::Image(
                "truncated image".into(),
            ))));

            assert!(matches!(
                app.startup_error,
                Some(StartupError::Load(Error::Image(_)))
            ));
        });
    }

    #[test]
    fn focus_loss_cancels_an_open_gesture() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            let mut app = ready_app(card_dir.path());

            let _ = app.update(Message::CardPane(card_pane::Message::Pressed(Point::new(
                10.0, 10.0,
            ))));
            assert!(app.controller.has_open_gesture());

            let _ = app.update(Message::WindowFocusChanged(false));

            assert!(!app.controller.has_open_gesture());
            assert!(app.last_cursor.is_none());
        });
    }

    #[test]
    fn skip_on_the_model_surface_is_ignored() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            let mut app = ready_app(card_dir.path());

            let _ = app.update(Message::SkipRequested);

            assert!(app.controller.reveal().is_model());
        });
    }

    #[test]
    fn escape_leaves_the_video_after_the_fade() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            let mut app = ready_app(card_dir.path());
            let fade = app.config.interaction.fade_duration();

            let t0 = Instant::now();
            app.controller.show_video(t0);
            let _ = app.update(Message::Tick(t0 + fade + Duration::from_millis(50)));
            assert_eq!(app.controller.reveal(), RevealState::Video);

            let _ = app.update(Message::SkipRequested);
            assert!(app.controller.reveal().is_transitioning());

            let back = t0 + fade + fade + Duration::from_millis(200);
            let _ = app.update(Message::Tick(back));
            assert!(app.controller.reveal().is_model());
        });
    }

    #[test]
    fn share_is_ignored_while_the_video_shows() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            let mut app = ready_app(card_dir.path());
            app.controller.show_video(Instant::now());

            let _ = app.update(Message::ShareRequested);

            assert!(!app.share_in_flight);
        });
    }

    #[test]
    fn share_from_the_model_surface_marks_in_flight() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            let mut app = ready_app(card_dir.path());

            let _ = app.update(Message::ShareRequested);

            assert!(app.share_in_flight);
        });
    }

    #[test]
    fn share_completion_resets_the_flag_and_notifies() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            let mut app = ready_app(card_dir.path());
            app.share_in_flight = true;

            let _ = app.update(Message::ShareCompleted(ShareOutcome::Delivered {
                method: ShareMethod::Clipboard,
                detail: None,
            }));

            assert!(!app.share_in_flight);
            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn cancelled_share_stays_silent() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            let mut app = ready_app(card_dir.path());
            app.share_in_flight = true;

            let _ = app.update(Message::ShareCompleted(ShareOutcome::Cancelled));

            assert!(!app.share_in_flight);
            assert!(!app.notifications.has_notifications());
        });
    }

    #[test]
    fn tick_past_the_deadline_reports_viewer_timeout() {
        with_temp_config_dir(|_| {
            let card_dir = tempdir().expect("failed to create card dir");
            write_sample_card(card_dir.path());
            let (mut app, _task) = App::new(card_flags(card_dir.path()));

            let late = app.launched_at + VIEWER_READY_TIMEOUT + Duration::from_secs(1);
            let _ = app.update(Message::Tick(late));

            assert!(matches!(app.startup_error, Some(StartupError::ViewerTimeout)));
        });
    }
}
