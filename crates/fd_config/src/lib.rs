// Pure data crate; no Bevy dependency. Loaded once by the binary, wrapped in a
// Bevy resource by fd_core, and read by setup/physics systems from there.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 700.0,
            title: "Funnel Drop".into(),
            auto_close: 0.0,
        }
    }
}

/// Visible scene bounds, centered on the origin. A shape is "out of the scene"
/// once it leaves this rectangle expanded by `exit_margin`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub exit_margin: f32,
}
impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            exit_margin: 40.0,
        }
    }
}
impl ArenaConfig {
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -600.0 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BounceConfig {
    pub ball_restitution: f32,
    pub ball_friction: f32,
}
impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            ball_restitution: 0.85,
            ball_friction: 0.1,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BallLayout {
    pub radius: f32,
    /// Off-screen parking spot used between rounds (above the visible arena).
    pub park: Point2,
}
impl Default for BallLayout {
    fn default() -> Self {
        Self {
            radius: 20.0,
            park: Point2::new(-50.0, 330.0),
        }
    }
}

/// Trapezoid mouth the ball drops out of. `top_width` >= `bottom_width`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FunnelLayout {
    pub x: f32,
    pub y: f32,
    pub top_width: f32,
    pub bottom_width: f32,
    pub height: f32,
}
impl Default for FunnelLayout {
    fn default() -> Self {
        Self {
            x: -50.0,
            y: 225.0,
            top_width: 80.0,
            bottom_width: 40.0,
            height: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct BarrierLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Radians, counter-clockwise.
    pub rotation: f32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct TargetLayout {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub ball: BallLayout,
    pub funnel: FunnelLayout,
    pub barriers: Vec<BarrierLayout>,
    pub targets: Vec<TargetLayout>,
    /// Half diagonal of the diamond targets.
    pub target_half_extent: f32,
}
impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ball: BallLayout::default(),
            funnel: FunnelLayout::default(),
            barriers: vec![
                BarrierLayout { x: -90.0, y: 60.0, width: 160.0, height: 25.0, rotation: 0.35 },
                BarrierLayout { x: 95.0, y: -15.0, width: 160.0, height: 25.0, rotation: -0.35 },
                BarrierLayout { x: -40.0, y: -110.0, width: 200.0, height: 25.0, rotation: 0.15 },
            ],
            targets: vec![
                TargetLayout { x: -185.0, y: -190.0 },
                TargetLayout { x: -110.0, y: -155.0 },
                TargetLayout { x: -35.0, y: -195.0 },
                TargetLayout { x: 40.0, y: -150.0 },
                TargetLayout { x: 115.0, y: -195.0 },
                TargetLayout { x: 190.0, y: -160.0 },
            ],
            target_half_extent: 12.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub arena: ArenaConfig,
    pub gravity: GravityConfig,
    pub bounce: BounceConfig,
    pub layout: LayoutConfig,
}

impl GameConfig {
    /// Load from a single RON file (errors contain human-readable context).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load file; on failure returns default config plus error string.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            w.push("arena dimensions must be > 0".into());
        }
        if self.arena.exit_margin < 0.0 {
            w.push(format!(
                "arena.exit_margin {} negative; shapes would count as exited while visible",
                self.arena.exit_margin
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; the ball will float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); typical configs use negative for downward",
                self.gravity.y
            ));
        }
        if !(0.0..=1.5).contains(&self.bounce.ball_restitution) {
            w.push(format!(
                "ball_restitution {} outside recommended 0..1.5",
                self.bounce.ball_restitution
            ));
        }
        let lay = &self.layout;
        if lay.ball.radius <= 0.0 {
            w.push("layout.ball.radius must be > 0".into());
        }
        if self.point_in_arena(lay.ball.park) {
            w.push(format!(
                "layout.ball.park ({}, {}) is inside the arena; the parked ball will be visible",
                lay.ball.park.x, lay.ball.park.y
            ));
        }
        if lay.funnel.top_width <= 0.0 || lay.funnel.bottom_width <= 0.0 || lay.funnel.height <= 0.0 {
            w.push("layout.funnel dimensions must be > 0".into());
        }
        if lay.funnel.top_width < lay.funnel.bottom_width {
            w.push(format!(
                "layout.funnel top_width {} narrower than bottom_width {}",
                lay.funnel.top_width, lay.funnel.bottom_width
            ));
        }
        if lay.targets.is_empty() {
            w.push("layout.targets is empty; the round can never be won".into());
        }
        if lay.target_half_extent <= 0.0 {
            w.push("layout.target_half_extent must be > 0".into());
        }
        for (i, b) in lay.barriers.iter().enumerate() {
            if b.width <= 0.0 || b.height <= 0.0 {
                w.push(format!("layout.barriers[{i}] dimensions must be > 0"));
            }
            if !self.point_in_arena(Point2::new(b.x, b.y)) {
                w.push(format!("layout.barriers[{i}] center outside the arena"));
            }
        }
        for (i, t) in lay.targets.iter().enumerate() {
            if !self.point_in_arena(Point2::new(t.x, t.y)) {
                w.push(format!("layout.targets[{i}] outside the arena"));
            }
        }
        w
    }

    fn point_in_arena(&self, p: Point2) -> bool {
        p.x.abs() <= self.arena.half_width() && p.y.abs() <= self.arena.half_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_a_playable_scene() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.layout.targets.len(), 6);
        assert_eq!(cfg.layout.barriers.len(), 3);
        assert!(cfg.validate().is_empty(), "default config should carry no warnings: {:?}", cfg.validate());
    }

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 800.0, height: 600.0, title: "Test"),
            arena: (width: 400.0, height: 400.0, exit_margin: 30.0),
            gravity: (y: -500.0),
            bounce: (ball_restitution: 0.5),
            layout: (
                ball: (radius: 15.0, park: (x: 0.0, y: 260.0)),
                funnel: (x: 0.0, y: 180.0, top_width: 60.0, bottom_width: 30.0, height: 40.0),
                barriers: [
                    (x: -50.0, y: 40.0, width: 120.0, height: 20.0, rotation: 0.2),
                ],
                targets: [
                    (x: -60.0, y: -150.0),
                    (x: 60.0, y: -150.0),
                ],
                target_half_extent: 10.0,
            ),
        )"#;
        let cfg = GameConfig::load_from_file(write_temp(sample).path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.bounce.ball_restitution, 0.5);
        assert_eq!(cfg.layout.barriers.len(), 1);
        assert_eq!(cfg.layout.targets.len(), 2);
        assert!(cfg.validate().is_empty(), "expected no warnings");
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let sample = r#"(window: (title: "Custom"), gravity: (y: -700.0))"#;
        let cfg = GameConfig::load_from_file(write_temp(sample).path()).expect("parse config");
        assert_eq!(cfg.window.title, "Custom");
        assert_eq!(cfg.gravity.y, -700.0);
        assert_eq!(cfg.window.width, WindowConfig::default().width);
        assert_eq!(cfg.layout.targets.len(), 6);
    }

    #[test]
    fn validate_detects_warnings() {
        let mut bad = GameConfig::default();
        bad.window.width = -100.0;
        bad.gravity.y = 0.0;
        bad.bounce.ball_restitution = -0.2;
        bad.layout.ball.radius = 0.0;
        bad.layout.ball.park = Point2::new(0.0, 0.0);
        bad.layout.funnel.top_width = 10.0; // narrower than bottom_width 40
        bad.layout.targets.clear();
        bad.layout.barriers[0].width = 0.0;
        bad.layout.barriers[1].x = 9_000.0;
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("gravity.y magnitude near zero"));
        assert!(joined.contains("ball_restitution"));
        assert!(joined.contains("layout.ball.radius must be > 0"));
        assert!(joined.contains("is inside the arena"));
        assert!(joined.contains("narrower than bottom_width"));
        assert!(joined.contains("layout.targets is empty"));
        assert!(joined.contains("layout.barriers[0] dimensions"));
        assert!(joined.contains("layout.barriers[1] center outside"));
        assert!(warnings.len() >= 9, "expected many warnings, got {}: {joined}", warnings.len());
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = GameConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg.window.width, WindowConfig::default().width);
    }

    #[test]
    fn parse_autoclose() {
        let sample = r"(window: (autoClose: 3.25))";
        let cfg = GameConfig::load_from_file(write_temp(sample).path()).expect("parse config");
        assert!((cfg.window.auto_close - 3.25).abs() < 1e-6);
    }

    // Helper: create a temp file with given contents; returns handle (kept for lifetime)
    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("tmp");
        f.write_all(contents.as_bytes()).unwrap();
        f
    }
}
