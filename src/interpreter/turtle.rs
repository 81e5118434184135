use super::error::{ColorChannel, RangeError};

/// A drawing event handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Color { r: f64, g: f64, b: f64 },
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoveTo { x, y } => write!(f, "MoveTo {x} {y}"),
            Self::LineTo { x, y } => write!(f, "LineTo {x} {y}"),
            Self::Color { r, g, b } => write!(f, "Color {r} {g} {b}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Result<Self, RangeError> {
        for (channel, value) in [
            (ColorChannel::Red, r),
            (ColorChannel::Green, g),
            (ColorChannel::Blue, b),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RangeError::ColorComponent { channel, value });
            }
        }
        Ok(Self { r, g, b })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pen {
    #[default]
    Down,
    Up,
}

/// Position, heading and pen of the cursor. Heading is in degrees, 0 pointing up.
#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub pen: Pen,
    pub color: Color,
    pub halted: bool,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heading: 0.0,
            pen: Pen::Down,
            color: Color::BLACK,
            halted: false,
        }
    }

    /// Rotates by `delta` degrees. Normalization is a single correction step, so angles
    /// outside `[-360, 720)` are not brought fully back into `[0, 360)`.
    pub fn turn(&mut self, delta: f64) {
        self.heading += delta;
        if self.heading >= 360.0 {
            self.heading -= 360.0;
        } else if self.heading < 0.0 {
            self.heading += 360.0;
        }
    }

    pub fn move_by(&mut self, distance: f64) -> Primitive {
        let radians = self.heading.to_radians();
        self.x -= radians.sin() * distance;
        self.y -= radians.cos() * distance;
        self.current_position()
    }

    pub fn set_position(&mut self, x: f64, y: f64) -> Primitive {
        self.x = x;
        self.y = y;
        Primitive::MoveTo { x, y }
    }

    pub fn reset_heading(&mut self) {
        self.heading = 0.0;
    }

    pub fn set_color(&mut self, r: f64, g: f64, b: f64) -> Result<Primitive, RangeError> {
        self.color = Color::new(r, g, b)?;
        Ok(Primitive::Color { r, g, b })
    }

    /// Resets everything but the halt flag and reports the primitives a renderer needs
    /// to follow along.
    pub fn home(&mut self) -> [Primitive; 2] {
        let halted = self.halted;
        *self = Self {
            halted,
            ..Self::new()
        };
        let Color { r, g, b } = self.color;
        [
            Primitive::MoveTo {
                x: self.x,
                y: self.y,
            },
            Primitive::Color { r, g, b },
        ]
    }

    fn current_position(&self) -> Primitive {
        let (x, y) = (self.x, self.y);
        match self.pen {
            Pen::Up => Primitive::MoveTo { x, y },
            Pen::Down => Primitive::LineTo { x, y },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_from_origin_draws_upwards() {
        let mut turtle = Turtle::new();
        assert_eq!(turtle.move_by(5.0), Primitive::LineTo { x: 0.0, y: -5.0 });
        assert_eq!(turtle.move_by(5.0).to_string(), "LineTo 0 -10");
    }

    #[test]
    fn backward_with_pen_up_moves() {
        let mut turtle = Turtle::new();
        turtle.pen = Pen::Up;
        assert_eq!(turtle.move_by(-3.0).to_string(), "MoveTo 0 3");
    }

    #[test]
    fn turn_wraps_once() {
        let mut turtle = Turtle::new();
        turtle.turn(-90.0);
        assert_eq!(turtle.heading, 270.0);
        turtle.turn(180.0);
        assert_eq!(turtle.heading, 90.0);
        turtle.turn(270.0);
        assert_eq!(turtle.heading, 0.0);
    }

    #[test]
    fn turn_does_not_fully_normalize_large_angles() {
        let mut turtle = Turtle::new();
        turtle.turn(800.0);
        assert_eq!(turtle.heading, 440.0);
    }

    #[test]
    fn color_out_of_range_keeps_previous_color() {
        let mut turtle = Turtle::new();
        assert_eq!(
            turtle.set_color(1.5, 0.0, 0.0),
            Err(RangeError::ColorComponent {
                channel: ColorChannel::Red,
                value: 1.5
            })
        );
        assert_eq!(turtle.color, Color::BLACK);
        assert!(turtle.set_color(1.0, 0.5, 0.0).is_ok());
        assert_eq!(turtle.color, Color::new(1.0, 0.5, 0.0).unwrap());
    }

    #[test]
    fn home_restores_defaults() {
        let mut turtle = Turtle::new();
        turtle.set_position(10.0, 20.0);
        turtle.turn(45.0);
        turtle.pen = Pen::Up;
        turtle.set_color(0.2, 0.2, 0.2).unwrap();
        let primitives = turtle.home();
        assert_eq!(turtle, Turtle::new());
        assert_eq!(primitives[0].to_string(), "MoveTo 0 0");
        assert_eq!(primitives[1].to_string(), "Color 0 0 0");
    }
}
