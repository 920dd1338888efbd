//! Three component vector used by composite engine properties.

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A component of a [Vec3].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[must_use]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Every axis, in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(axis)
    }
}

/// A 3-dimensional vector.
#[derive(Default, Debug, Copy, Clone, PartialOrd, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Create a 3-dimensional vector from given coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a 3-dimensional vector at the origin.
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns a single component.
    #[must_use]
    #[inline]
    pub fn component(&self, axis: Axis) -> f32 {
        self[axis]
    }

    /// Returns a copy with one component replaced, leaving the other two untouched.
    #[inline]
    pub fn with_component(mut self, axis: Axis, value: f32) -> Self {
        self[axis] = value;
        self
    }

    /// Converts the vector into an array of `f32`.
    #[must_use]
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(vector: Vec3) -> Self {
        vector.to_array()
    }
}

impl Index<Axis> for Vec3 {
    type Output = f32;
    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for Vec3 {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Constructs a new 3D [Vec3].
#[macro_export]
macro_rules! vec3 {
    () => {
        $crate::vector::Vec3::origin()
    };
    ($x:expr, $y:expr, $z:expr $(,)?) => {
        $crate::vector::Vec3::new($x, $y, $z)
    };
}
