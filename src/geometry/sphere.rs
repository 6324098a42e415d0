// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::{
    error::{GeomError, GeomResult},
    geometry::vector::Vec3,
    numeric::Scalar,
};

/// A sphere used for broad-phase rejection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sphere<T: Scalar = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub r: T,
}

impl<T: Scalar> Sphere<T> {
    pub fn new(center: Vec3<T>, r: T) -> Self {
        Sphere {
            x: center[0],
            y: center[1],
            z: center[2],
            r,
        }
    }

    /// Rejects negative and NaN radii.
    pub fn try_new(center: Vec3<T>, r: T) -> GeomResult<Self> {
        if r.is_nan() || r < T::zero() {
            return Err(GeomError::NegativeRadius);
        }
        Ok(Sphere::new(center, r))
    }

    pub fn center(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Containment-radius test: true when the squared difference of the
    /// radii exceeds the squared distance between centers.
    ///
    /// This is not the usual overlap test on the sum of the radii; two
    /// disjoint spheres of similar size report `false`, and a small sphere
    /// sitting inside a much larger one reports `true`.
    pub fn intersect(&self, other: &Sphere<T>) -> bool {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        let dr = self.r - other.r;
        dr * dr > dx * dx + dy * dy + dz * dz
    }

    pub fn contains_point(&self, p: &Vec3<T>) -> bool {
        self.center().distance_to(p) <= self.r
    }
}
