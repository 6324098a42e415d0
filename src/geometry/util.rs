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

use crate::{geometry::vector::Vec3, numeric::Scalar};

/// Minimum magnitude a ray direction component needs before
/// [`Tetra::distance`](crate::geometry::tetra::Tetra::distance) solves along
/// that axis.
pub const AXIS_EPS: f64 = 1e-6;

/// How the distance solver picks the coordinate axis it divides by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisSelection {
    /// First of x, y, z whose direction component exceeds `eps` in
    /// magnitude. Falls back to z when none does.
    FirstPastThreshold { eps: f64 },
    /// Axis with the largest direction component.
    MaxMagnitude,
}

impl Default for AxisSelection {
    fn default() -> Self {
        AxisSelection::FirstPastThreshold { eps: AXIS_EPS }
    }
}

impl AxisSelection {
    /// Chosen axis, or `None` when the policy has a threshold and no
    /// component clears it.
    pub fn select<T: Scalar>(&self, dir: &Vec3<T>) -> Option<usize> {
        match *self {
            AxisSelection::FirstPastThreshold { eps } => {
                let eps = T::lit(eps);
                (0..3).find(|&i| dir[i] > eps || dir[i] < -eps)
            }
            AxisSelection::MaxMagnitude => {
                let mut best = 0;
                for i in 1..3 {
                    if dir[i].abs() > dir[best].abs() {
                        best = i;
                    }
                }
                Some(best)
            }
        }
    }
}

/// Point at the barycentric combination of `a`, `b`, `c` with unscaled
/// weights `w`.
pub fn barycentric_point<T: Scalar>(w: &[T; 3], a: &Vec3<T>, b: &Vec3<T>, c: &Vec3<T>) -> Vec3<T> {
    let sum = w[0] + w[1] + w[2];
    (*a * w[0] + *b * w[1] + *c * w[2]) * (T::one() / sum)
}
