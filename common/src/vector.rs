use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians from the positive x axis.
    pub fn polar(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos, y: sin }
    }

    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }

    pub fn dot(&self, other: Vector) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length2(&self) -> f32 {
        self.dot(*self)
    }

    pub fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    pub fn distance2(&self, other: Vector) -> f32 {
        (*self - other).length2()
    }

    pub fn distance(&self, other: Vector) -> f32 {
        self.distance2(other).sqrt()
    }

    pub fn normalized(&self) -> Vector {
        let length = self.length();
        if length == 0.0 {
            return *self;
        }
        *self / length
    }

    /// Counter-clockwise rotation by `degrees`.
    pub fn rotate_deg(&self, degrees: f32) -> Vector {
        self.rotate(degrees.to_radians())
    }

    pub fn rotate(&self, radians: f32) -> Vector {
        let (sin, cos) = radians.sin_cos();
        Vector {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Exact counter-clockwise quarter turn, same as `rotate_deg(90.0)` without rounding.
    pub fn perp(&self) -> Vector {
        Vector {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn abs(&self) -> Vector {
        Vector {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Component-wise minimum.
    pub fn min(&self, other: Vector) -> Vector {
        Vector {
            x: f32::min(self.x, other.x),
            y: f32::min(self.y, other.y),
        }
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Vector) -> Vector {
        Vector {
            x: f32::max(self.x, other.x),
            y: f32::max(self.y, other.y),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Vector> for (f32, f32) {
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Div<f32> for Vector {
    type Output = Vector;

    fn div(self, rhs: f32) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}
