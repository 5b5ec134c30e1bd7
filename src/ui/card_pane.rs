// SPDX-License-Identifier: MPL-2.0
//! The model surface: a canvas stage presenting the card in 3D.
//!
//! The stage draws the card face foreshortened by the camera azimuth (a
//! flat stand-in for the real 3D widget), the hold sparkles, and the charge
//! progress ring. It also owns pointer capture: raw mouse events inside the
//! stage become the pointer vocabulary the interaction controller consumes.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::image::Handle;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::f32::consts::PI;

use crate::camera::CameraOrbit;
use crate::feedback::{HoldProgress, ParticleField};
use crate::ui::card_art::CardArt;
use crate::ui::design_tokens::sizing;

/// Pointer reports leaving the stage. Positions are in stage-local
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Pressed(Point),
    Moved(Point),
    Released,
    /// The pointer stream was lost (cursor left the stage mid-gesture).
    Canceled,
}

/// Everything the stage needs for one frame.
pub struct ViewContext<'a> {
    pub art: &'a CardArt,
    pub orbit: CameraOrbit,
    /// Cross-fade alpha for the whole card surface, in [0, 1].
    pub card_opacity: f32,
    pub progress: &'a HoldProgress,
    pub particles: &'a ParticleField,
    /// Holographic accent for the ring and sparkles.
    pub accent: Color,
}

/// Renders the card stage.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Canvas::new(CardStage { ctx })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Tracks whether the primary button went down inside the stage, so only
/// gestures that started here produce pointer messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracking {
    pressed: bool,
}

struct CardStage<'a> {
    ctx: ViewContext<'a>,
}

impl<'a> CardStage<'a> {
    /// Card rectangle centered on the stage, foreshortened by the azimuth.
    fn card_rect(&self, bounds: Size) -> Rectangle {
        let height = (bounds.height * 0.8).min(sizing::CARD_MAX_HEIGHT);
        let width = height * sizing::CARD_ASPECT * self.facing().1;
        Rectangle {
            x: (bounds.width - width) / 2.0,
            y: (bounds.height - height) / 2.0,
            width,
            height,
        }
    }

    /// Which face the camera sees and how foreshortened it is.
    ///
    /// The cosine of the azimuth decides: positive means the front faces
    /// the camera, negative the back. Its magnitude scales the width, with
    /// a small floor so the card never collapses to nothing edge-on.
    fn facing(&self) -> (&Handle, f32) {
        let cos = self.ctx.orbit.normalized_theta().cos();
        let scale = cos.abs().max(0.04);
        if cos >= 0.0 {
            (&self.ctx.art.front, scale)
        } else {
            (&self.ctx.art.back, scale)
        }
    }
}

impl<'a> canvas::Program<Message> for CardStage<'a> {
    type State = PointerTracking;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    state.pressed = true;
                    return Some(Action::publish(Message::Pressed(position)).and_capture());
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if state.pressed => {
                return match cursor.position_in(bounds) {
                    Some(position) => Some(Action::publish(Message::Moved(position))),
                    None => {
                        state.pressed = false;
                        Some(Action::publish(Message::Canceled))
                    }
                };
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if state.pressed =>
            {
                state.pressed = false;
                return Some(Action::publish(Message::Released).and_capture());
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) if state.pressed => {
                state.pressed = false;
                return Some(Action::publish(Message::Canceled));
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let opacity = self.ctx.card_opacity.clamp(0.0, 1.0);
        let card = self.card_rect(bounds.size());
        let (face, _) = self.facing();

        frame.draw_image(card, canvas::Image::new(face.clone()).opacity(opacity));

        // Faint accent frame so the card reads against the dark stage
        frame.stroke(
            &Path::rectangle(card.position(), card.size()),
            Stroke::default().with_width(1.0).with_color(Color {
                a: 0.3 * opacity,
                ..self.ctx.accent
            }),
        );

        for particle in self.ctx.particles.iter() {
            let dot = Path::circle(particle.position, sizing::PARTICLE_RADIUS);
            frame.fill(
                &dot,
                Color {
                    a: particle.alpha * opacity,
                    ..self.ctx.accent
                },
            );
        }

        if self.ctx.progress.is_visible() {
            let center = frame.center();
            draw_progress_ring(
                &mut frame,
                center,
                self.ctx.progress.fraction(),
                self.ctx.accent,
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.pressed {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Draws the charge ring: a dim full circle with a bright arc covering
/// `fraction` of the turn, starting at twelve o'clock.
fn draw_progress_ring(frame: &mut Frame, center: Point, fraction: f32, accent: Color) {
    let radius = sizing::PROGRESS_RING_RADIUS;
    let track = Path::circle(center, radius);
    frame.stroke(
        &track,
        Stroke::default()
            .with_width(sizing::PROGRESS_RING_WIDTH)
            .with_color(Color { a: 0.25, ..accent }),
    );

    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= f32::EPSILON {
        return;
    }

    let start_angle = -PI / 2.0;
    let sweep = fraction * 2.0 * PI;

    // Build the arc from short line segments for smooth appearance
    let mut arc_path = canvas::path::Builder::new();
    arc_path.move_to(Point::new(
        center.x + radius * start_angle.cos(),
        center.y + radius * start_angle.sin(),
    ));
    let segments = 48;
    #[allow(clippy::cast_precision_loss)]
    for i in 1..=segments {
        let angle = start_angle + sweep * (i as f32 / segments as f32);
        arc_path.line_to(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }

    frame.stroke(
        &arc_path.build(),
        Stroke::default()
            .with_width(sizing::PROGRESS_RING_WIDTH)
            .with_color(accent)
            .with_line_cap(canvas::LineCap::Round),
    );
}
