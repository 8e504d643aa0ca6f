//! Frame composition
//!
//! The simulation never draws. Each frame, [`draw_frame`] walks the game
//! state and issues primitive calls against a [`DrawSurface`], which the host
//! implements (the HTML canvas on the web).

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::{GameState, Rect};

/// Straight (non-premultiplied) RGBA color, 0-255 channels and 0-1 alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(...)` string
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Neon palette
pub mod palette {
    use super::Rgba;

    pub const BACKDROP: Rgba = Rgba::new(0, 0, 0, 0.35);
    pub const CYAN: Rgba = Rgba::new(0, 246, 255, 0.85);
    pub const CYAN_GLOW: Rgba = Rgba::new(0, 246, 255, 0.6);
    pub const PINK: Rgba = Rgba::new(255, 79, 216, 0.9);
    pub const PINK_GLOW: Rgba = Rgba::new(255, 79, 216, 0.7);
    pub const BRICK_PINK: Rgba = Rgba::new(255, 79, 216, 0.55);
    pub const BRICK_PINK_GLOW: Rgba = Rgba::new(255, 79, 216, 0.35);
    pub const BRICK_CYAN: Rgba = Rgba::new(0, 246, 255, 0.45);
    pub const BRICK_CYAN_GLOW: Rgba = Rgba::new(0, 246, 255, 0.30);
    pub const BRICK_EDGE: Rgba = Rgba::new(255, 255, 255, 0.12);
    pub const TEXT: Rgba = Rgba::new(255, 255, 255, 0.85);
}

/// Soft shadow drawn around a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub blur: f32,
}

/// How to paint one primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Rgba,
    pub glow: Option<Glow>,
}

impl Style {
    pub const fn plain(color: Rgba) -> Self {
        Self { color, glow: None }
    }

    pub const fn glowing(color: Rgba, glow: Rgba, blur: f32) -> Self {
        Self {
            color,
            glow: Some(Glow { color: glow, blur }),
        }
    }
}

/// Primitive drawing capability supplied by the host
pub trait DrawSurface {
    /// Wipe the whole surface
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: Rect, style: &Style);
    fn stroke_rect(&mut self, rect: Rect, style: &Style);
    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &Style);
    /// `pos` is the left end of the text baseline
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, style: &Style);
}

pub const HUD_FONT: &str = "16px system-ui";
pub const HUD_POS: Vec2 = Vec2::new(18.0, 26.0);

/// Status line shown in the top-left corner
pub fn hud_text(state: &GameState) -> String {
    format!(
        "Score: {}   Lives: {}   Space: Start/Pause",
        state.score, state.lives
    )
}

/// Style for the brick at a row-major index (pink/cyan alternating)
pub fn brick_style(index: usize) -> Style {
    if index % 2 == 0 {
        Style::glowing(palette::BRICK_PINK, palette::BRICK_PINK_GLOW, 10.0)
    } else {
        Style::glowing(palette::BRICK_CYAN, palette::BRICK_CYAN_GLOW, 10.0)
    }
}

/// Outline for a brick, sharing the glow of its fill
pub fn brick_edge_style(fill: &Style) -> Style {
    Style {
        color: palette::BRICK_EDGE,
        glow: fill.glow,
    }
}

/// Draw one frame: backdrop, live bricks, paddle, ball, HUD
pub fn draw_frame<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S) {
    let layout = &state.layout;

    surface.clear(layout.width, layout.height);
    surface.fill_rect(
        Rect::new(0.0, 0.0, layout.width, layout.height),
        &Style::plain(palette::BACKDROP),
    );

    for (i, brick) in state.bricks.iter().enumerate() {
        if !brick.alive {
            continue;
        }
        let fill = brick_style(i);
        surface.fill_rect(brick.rect, &fill);
        surface.stroke_rect(brick.rect, &brick_edge_style(&fill));
    }

    surface.fill_rect(
        state.paddle.rect(),
        &Style::glowing(palette::CYAN, palette::CYAN_GLOW, 16.0),
    );

    surface.fill_circle(
        state.ball.pos,
        state.ball.radius,
        &Style::glowing(palette::PINK, palette::PINK_GLOW, 18.0),
    );

    surface.fill_text(
        &hud_text(state),
        HUD_POS,
        HUD_FONT,
        &Style::plain(palette::TEXT),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Layout;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        FillRect(Rect, Style),
        StrokeRect(Rect, Style),
        Circle(Vec2, f32),
        Text(String),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self, _width: f32, _height: f32) {
            self.calls.push(Call::Clear);
        }
        fn fill_rect(&mut self, rect: Rect, style: &Style) {
            self.calls.push(Call::FillRect(rect, *style));
        }
        fn stroke_rect(&mut self, rect: Rect, style: &Style) {
            self.calls.push(Call::StrokeRect(rect, *style));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, _style: &Style) {
            self.calls.push(Call::Circle(center, radius));
        }
        fn fill_text(&mut self, text: &str, _pos: Vec2, _font: &str, _style: &Style) {
            self.calls.push(Call::Text(text.to_string()));
        }
    }

    #[test]
    fn test_css_color() {
        assert_eq!(palette::CYAN.to_css(), "rgba(0,246,255,0.85)");
        assert_eq!(palette::BACKDROP.to_css(), "rgba(0,0,0,0.35)");
    }

    #[test]
    fn test_frame_order() {
        let state = GameState::new(Layout::default(), 1);
        let mut rec = Recorder::default();
        draw_frame(&state, &mut rec);

        // clear + backdrop + 72 * (fill + stroke) + paddle + ball + hud
        assert_eq!(rec.calls.len(), 2 + 144 + 3);
        assert_eq!(rec.calls[0], Call::Clear);
        assert!(matches!(rec.calls[1], Call::FillRect(r, _) if r.w == 960.0));
        assert_eq!(
            rec.calls[2],
            Call::FillRect(state.bricks[0].rect, brick_style(0))
        );
        assert_eq!(
            rec.calls[3],
            Call::StrokeRect(state.bricks[0].rect, brick_edge_style(&brick_style(0)))
        );
        assert!(matches!(rec.calls[146], Call::FillRect(r, _) if r == state.paddle.rect()));
        assert_eq!(rec.calls[147], Call::Circle(state.ball.pos, 8.0));
        assert_eq!(
            rec.calls[148],
            Call::Text("Score: 0   Lives: 3   Space: Start/Pause".to_string())
        );
    }

    #[test]
    fn test_dead_bricks_not_drawn() {
        let mut state = GameState::new(Layout::default(), 1);
        state.bricks[0].alive = false;
        state.bricks[7].alive = false;

        let mut rec = Recorder::default();
        draw_frame(&state, &mut rec);

        let brick_strokes = rec
            .calls
            .iter()
            .filter(|c| matches!(c, Call::StrokeRect(..)))
            .count();
        assert_eq!(brick_strokes, 70);
        assert!(
            !rec.calls
                .iter()
                .any(|c| matches!(c, Call::StrokeRect(r, _) if *r == state.bricks[0].rect))
        );
        // Colors still follow the grid index
        assert_eq!(
            rec.calls[2],
            Call::FillRect(state.bricks[1].rect, brick_style(1))
        );
    }

    #[test]
    fn test_brick_colors_alternate() {
        assert_eq!(brick_style(0).color, palette::BRICK_PINK);
        assert_eq!(brick_style(1).color, palette::BRICK_CYAN);
        assert_eq!(brick_style(2).color, palette::BRICK_PINK);
    }

    #[test]
    fn test_brick_outline_keeps_glow() {
        let state = GameState::new(Layout::default(), 1);
        let mut rec = Recorder::default();
        draw_frame(&state, &mut rec);

        let Call::StrokeRect(_, edge) = &rec.calls[5] else {
            panic!("expected the second brick outline, got {:?}", rec.calls[5]);
        };
        assert_eq!(edge.color, palette::BRICK_EDGE);
        assert_eq!(
            edge.glow,
            Some(Glow {
                color: palette::BRICK_CYAN_GLOW,
                blur: 10.0
            })
        );
    }
}
