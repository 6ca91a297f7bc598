//! Launch geometry: 1D/2D/3D index spaces and their linearization.
//!
//! Every lane is addressed two ways: by a 3-component index inside its scope
//! and by the linear rank derived from it. All collective machinery works on
//! linear ranks; the 3-component form exists only at the launch boundary.

use serde::{Deserialize, Serialize};

/// A 3-component extent or index. 1D and 2D shapes set the unused
/// components to 1 (extents) or 0 (indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dim3 {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Dim3 {
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// 1D extent: `{x, 1, 1}`.
    pub const fn d1(x: u32) -> Self {
        Self { x, y: 1, z: 1 }
    }

    /// 2D extent: `{x, y, 1}`.
    pub const fn d2(x: u32, y: u32) -> Self {
        Self { x, y, z: 1 }
    }

    /// Total number of indices in this extent.
    pub fn count(&self) -> u64 {
        self.x as u64 * self.y as u64 * self.z as u64
    }

    /// Linear rank of `idx` within this extent: x fastest, then y, then z.
    pub fn linearize(&self, idx: Dim3) -> u32 {
        idx.z * self.x * self.y + idx.y * self.x + idx.x
    }

    /// Inverse of [`linearize`](Self::linearize).
    pub fn delinearize(&self, linear: u32) -> Dim3 {
        let plane = self.x * self.y;
        Dim3 {
            x: linear % self.x,
            y: (linear / self.x) % self.y,
            z: linear / plane,
        }
    }

    /// True if every component of `idx` is within this extent.
    pub fn contains(&self, idx: Dim3) -> bool {
        idx.x < self.x && idx.y < self.y && idx.z < self.z
    }

    /// True if every component of `self` evenly divides the matching
    /// component of `global`.
    pub fn divides(&self, global: Dim3) -> bool {
        self.x != 0
            && self.y != 0
            && self.z != 0
            && global.x % self.x == 0
            && global.y % self.y == 0
            && global.z % self.z == 0
    }

    /// Component-wise product, e.g. group index times local extent.
    pub fn scaled(&self, by: Dim3) -> Dim3 {
        Dim3 {
            x: self.x * by.x,
            y: self.y * by.y,
            z: self.z * by.z,
        }
    }

    /// Component-wise sum.
    pub fn offset(&self, by: Dim3) -> Dim3 {
        Dim3 {
            x: self.x + by.x,
            y: self.y + by.y,
            z: self.z + by.z,
        }
    }
}

impl From<u32> for Dim3 {
    fn from(x: u32) -> Self {
        Dim3::d1(x)
    }
}

impl From<(u32, u32)> for Dim3 {
    fn from((x, y): (u32, u32)) -> Self {
        Dim3::d2(x, y)
    }
}

impl From<(u32, u32, u32)> for Dim3 {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Dim3::new(x, y, z)
    }
}
