use bevy::prelude::*;

/// Basic color enum for high-level game logic (separate from Bevy `Color`).
/// Target hit detection compares against [`GameColor::HIT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameColor {
    Red,
    Green,
    Blue,
    Gray,
    White,
}

impl Default for GameColor {
    fn default() -> Self { GameColor::White }
}

impl GameColor {
    /// The fill color a target takes on collision with the ball; equality with
    /// this color is the win-detection signal.
    pub const HIT: GameColor = GameColor::Green;

    pub fn to_bevy(self) -> Color {
        match self {
            GameColor::Red => Color::srgb(0.9, 0.2, 0.2),
            GameColor::Green => Color::srgb(0.2, 0.8, 0.3),
            GameColor::Blue => Color::srgb(0.25, 0.45, 0.9),
            GameColor::Gray => Color::srgb(0.55, 0.55, 0.6),
            GameColor::White => Color::srgb(0.95, 0.95, 0.95),
        }
    }
}

/// Which role a shape plays in the game. Collision handling discriminates on
/// this tag; nothing in the game compares name strings.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Ball,
    Barrier,
    Funnel,
    Target,
}

#[derive(Component, Debug, Default)]
pub struct Ball;

#[derive(Component, Debug, Default)]
pub struct Barrier;

#[derive(Component, Debug, Default)]
pub struct Funnel;

#[derive(Component, Debug, Default)]
pub struct Target;

/// Current fill color; rendering syncs the material whenever this changes.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Deref, DerefMut)]
pub struct FillColor(pub GameColor);

/// Whether pointer input may reposition this shape directly.
#[derive(Component, Clone, Copy, Debug, Deref, DerefMut)]
pub struct Draggable(pub bool);

/// Shapes carrying this marker are watched by the scene-exit detector.
#[derive(Component, Debug, Default)]
pub struct TrackedForExit;

/// Drawable outline of a shape: either a circle or a convex polygon given as an
/// ordered point list (local coordinates, counter-clockwise). Mirrors the two
/// construction primitives the scene offers.
#[derive(Component, Clone, Debug, PartialEq)]
pub enum ShapeGeometry {
    Circle { radius: f32 },
    Polygon { points: Vec<Vec2> },
}

impl ShapeGeometry {
    pub fn circle(radius: f32) -> Self {
        ShapeGeometry::Circle { radius }
    }

    /// Axis-aligned rectangle centered on the origin.
    pub fn rectangle(width: f32, height: f32) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);
        ShapeGeometry::Polygon {
            points: vec![
                Vec2::new(-hw, -hh),
                Vec2::new(hw, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ],
        }
    }

    /// Diamond with the given half diagonal, the classic target outline.
    pub fn diamond(half_extent: f32) -> Self {
        ShapeGeometry::Polygon {
            points: vec![
                Vec2::new(half_extent, 0.0),
                Vec2::new(0.0, half_extent),
                Vec2::new(-half_extent, 0.0),
                Vec2::new(0.0, -half_extent),
            ],
        }
    }

    /// Funnel mouth: an isosceles trapezoid, wide edge up.
    pub fn trapezoid(top_width: f32, bottom_width: f32, height: f32) -> Self {
        let (ht, hb, hh) = (top_width * 0.5, bottom_width * 0.5, height * 0.5);
        ShapeGeometry::Polygon {
            points: vec![
                Vec2::new(-hb, -hh),
                Vec2::new(hb, -hh),
                Vec2::new(ht, hh),
                Vec2::new(-ht, hh),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_color_is_green() {
        assert_eq!(GameColor::HIT, GameColor::Green);
        assert_ne!(GameColor::default(), GameColor::HIT);
    }

    #[test]
    fn diamond_outline_spans_both_axes() {
        let ShapeGeometry::Polygon { points } = ShapeGeometry::diamond(12.0) else {
            panic!("diamond must be a polygon");
        };
        assert_eq!(points.len(), 4);
        let max_x = points.iter().map(|p| p.x.abs()).fold(0.0, f32::max);
        let max_y = points.iter().map(|p| p.y.abs()).fold(0.0, f32::max);
        assert_eq!(max_x, 12.0);
        assert_eq!(max_y, 12.0);
    }

    #[test]
    fn trapezoid_is_wider_at_the_top() {
        let ShapeGeometry::Polygon { points } = ShapeGeometry::trapezoid(80.0, 40.0, 50.0) else {
            panic!("trapezoid must be a polygon");
        };
        let top: Vec<_> = points.iter().filter(|p| p.y > 0.0).collect();
        let bottom: Vec<_> = points.iter().filter(|p| p.y < 0.0).collect();
        let top_span = top.iter().map(|p| p.x).fold(f32::MIN, f32::max)
            - top.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        let bottom_span = bottom.iter().map(|p| p.x).fold(f32::MIN, f32::max)
            - bottom.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        assert_eq!(top_span, 80.0);
        assert_eq!(bottom_span, 40.0);
    }
}
