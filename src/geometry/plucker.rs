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

//! Plücker-coordinate rays.
//!
//! A ray with origin `P` and direction `L` is stored as `U = L`,
//! `V = L × P`. Two rays on the same line share coordinates, but the
//! moment changes under translation, so moving a ray goes through
//! [`PluckerVec::translate`] instead of a rebuild.

use crate::{geometry::vector::Vec3, kernel::predicates::Sign, numeric::Scalar};

/// An oriented line in Plücker coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PluckerVec<T: Scalar = f32> {
    pub u: Vec3<T>,
    pub v: Vec3<T>,
}

/// `-(a × b)`, the form every moment update here needs.
#[inline(always)]
fn neg_cross<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    Vec3([
        -a[1] * b[2] + a[2] * b[1],
        -a[2] * b[0] + a[0] * b[2],
        -a[0] * b[1] + a[1] * b[0],
    ])
}

impl<T: Scalar> PluckerVec<T> {
    /// Builds the ray through `p` along the unit direction `l`.
    ///
    /// `l` is not normalized here; callers pass a unit vector.
    pub fn new(p: &Vec3<T>, l: &Vec3<T>) -> Self {
        PluckerVec {
            u: *l,
            v: neg_cross(p, l),
        }
    }

    /// Builds the ray pointing from `p1` towards `p2`.
    ///
    /// The direction is `p2 - p1` and keeps the segment's length, so
    /// products against these rays scale with edge length.
    pub fn from_segment(p1: &Vec3<T>, p2: &Vec3<T>) -> Self {
        let u = *p2 - *p1;
        PluckerVec {
            u,
            v: neg_cross(p1, &u),
        }
    }

    /// Moves the underlying line by `dx`. The direction is unchanged.
    pub fn translate(&mut self, dx: &Vec3<T>) {
        self.v += neg_cross(dx, &self.u);
    }

    /// Permuted inner product `u1·v2 + v1·u2`.
    ///
    /// The sum is negated unless `flip` is set; face-edge tables store
    /// their flips against this convention.
    pub fn dot(&self, other: &PluckerVec<T>, flip: bool) -> T {
        let sum = self.u.dot(&other.v) + self.v.dot(&other.u);
        if flip { sum } else { -sum }
    }

    /// [`dot`](Self::dot) together with the sign of the result.
    pub fn sign_dot(&self, other: &PluckerVec<T>, flip: bool) -> (T, Sign) {
        let dot = self.dot(other, flip);
        (dot, Sign::of(dot))
    }
}

/// A Plücker ray that also remembers its origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchoredPluckerVec<T: Scalar = f32> {
    pub ray: PluckerVec<T>,
    pub p: Vec3<T>,
}

impl<T: Scalar> AnchoredPluckerVec<T> {
    pub fn new(p: &Vec3<T>, l: &Vec3<T>) -> Self {
        AnchoredPluckerVec {
            ray: PluckerVec::new(p, l),
            p: *p,
        }
    }

    pub fn from_segment(p1: &Vec3<T>, p2: &Vec3<T>) -> Self {
        AnchoredPluckerVec {
            ray: PluckerVec::from_segment(p1, p2),
            p: *p1,
        }
    }

    pub fn translate(&mut self, dx: &Vec3<T>) {
        self.ray.translate(dx);
        self.p += *dx;
    }

    pub fn u(&self) -> &Vec3<T> {
        &self.ray.u
    }

    pub fn v(&self) -> &Vec3<T> {
        &self.ray.v
    }

    pub fn dot(&self, other: &PluckerVec<T>, flip: bool) -> T {
        self.ray.dot(other, flip)
    }

    pub fn sign_dot(&self, other: &PluckerVec<T>, flip: bool) -> (T, Sign) {
        self.ray.sign_dot(other, flip)
    }

    /// Point `p + t * u` along the ray.
    pub fn point_at(&self, t: T) -> Vec3<T> {
        self.p + self.ray.u * t
    }
}
