//! Render-facing scene description
//!
//! The external renderer reads one `Scene` per tick and draws it; nothing
//! here touches a drawing API. Horizontal positions are derived from lane
//! indices at this layer and are not part of simulation state.

use std::f32::consts::PI;

use glam::Vec2;

use crate::sim::GameState;
use crate::{hex_to_rgba, lane_center_x};

/// A filled, stroked circle
#[derive(Debug, Clone)]
pub struct CircleShape {
    pub center: Vec2,
    pub radius: f32,
    pub fill: [f32; 4],
    pub stroke: [f32; 4],
}

/// A filled, stroked axis-aligned rectangle
#[derive(Debug, Clone)]
pub struct RectShape {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
    pub fill: [f32; 4],
    pub stroke: [f32; 4],
}

/// A stroked line segment
#[derive(Debug, Clone)]
pub struct LineShape {
    pub from: Vec2,
    pub to: Vec2,
    pub color: [f32; 4],
    pub width: f32,
}

/// A stroked open arc
#[derive(Debug, Clone)]
pub struct ArcShape {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub color: [f32; 4],
    pub width: f32,
}

/// Text anchored at a point
#[derive(Debug, Clone)]
pub struct TextShape {
    pub pos: Vec2,
    pub text: String,
    pub size: f32,
    pub color: [f32; 4],
}

/// Everything the renderer needs for one frame, in draw order
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub background: [f32; 4],
    pub lines: Vec<LineShape>,
    pub circles: Vec<CircleShape>,
    pub arcs: Vec<ArcShape>,
    pub rects: Vec<RectShape>,
    pub texts: Vec<TextShape>,
}

/// Build the scene for the current state
///
/// Pure query: reads positions, sizes, colors, rotations and active flags,
/// mutates nothing.
pub fn build_scene(state: &GameState) -> Scene {
    let config = &state.config;
    let lane_width = config.lane_width();

    let mut scene = Scene {
        background: hex_to_rgba(&config.background_color),
        ..Default::default()
    };

    if config.show_lane_borders {
        for lane in 1..config.n_lanes {
            let x = lane as f32 * lane_width;
            scene.lines.push(LineShape {
                from: Vec2::new(x, 0.0),
                to: Vec2::new(x, config.game_height),
                color: [0.0, 0.0, 0.0, 0.25],
                width: 1.0,
            });
        }
    }

    let ball_fill = hex_to_rgba(&config.ball_color);
    let ball_stroke = hex_to_rgba(&config.ball_border_color);
    for ball in state.balls.iter().filter(|b| b.is_active()) {
        let center = Vec2::new(lane_center_x(ball.lane, lane_width), ball.y);
        scene.circles.push(CircleShape {
            center,
            radius: ball.diameter / 2.0,
            fill: ball_fill,
            stroke: ball_stroke,
        });
        if config.draw_smiley {
            push_smiley(&mut scene, center, ball.diameter, ball.rotation, ball_stroke);
        }
    }

    let paddle = &state.paddle;
    let paddle_x = paddle.lane as f32 * lane_width + (lane_width - paddle.width) / 2.0;
    scene.rects.push(RectShape {
        min: Vec2::new(paddle_x, paddle.upper_edge()),
        size: Vec2::new(paddle.width, paddle.height),
        fill: hex_to_rgba(&config.paddle_color),
        stroke: hex_to_rgba(&config.paddle_border_color),
    });

    scene.texts.push(TextShape {
        pos: Vec2::new(10.0, 30.0),
        text: format!("Score: {}", state.score),
        size: 20.0,
        color: [0.0, 0.0, 0.0, 1.0],
    });

    scene
}

/// Eyes and mouth, scaled to the ball and rotated with its spin
fn push_smiley(scene: &mut Scene, center: Vec2, diameter: f32, rotation: f32, stroke: [f32; 4]) {
    let scale = diameter / 100.0;
    let (sin, cos) = rotation.sin_cos();
    let rotate = |offset: Vec2| {
        center + Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos)
    };

    let eye_color = [0.0, 0.0, 0.0, 1.0];
    for side in [-1.0f32, 1.0] {
        scene.circles.push(CircleShape {
            center: rotate(Vec2::new(side * 15.0 * scale, -10.0 * scale)),
            radius: 5.0 * scale,
            fill: eye_color,
            stroke: eye_color,
        });
    }

    scene.arcs.push(ArcShape {
        center: rotate(Vec2::new(0.0, 5.0 * scale)),
        radius: 20.0 * scale,
        start_angle: rotation,
        end_angle: rotation + PI,
        color: stroke,
        width: (2.0 * scale).max(1.0),
    });
}
