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

//! Platis & Theoharis ray-tetrahedron crossing.
//!
//! For an oriented tetrahedron, a ray passes through a face exactly when
//! its side products with the face's three edges share one sign; the sign
//! tells entry from exit, and the magnitudes are the unscaled barycentric
//! weights of the hit point.

use tracing::trace;

use crate::{
    geometry::{
        plucker::{AnchoredPluckerVec, PluckerVec},
        plucker_tetra::PluckerTetra,
        tables::{EDGE_COUNT, FACE_COUNT},
        tetra::{Orientation, Tetra, TetraFaceBary},
    },
    kernel::predicates::Sign,
    numeric::Scalar,
};

/// Faces through which a ray enters and leaves a tetrahedron.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing<T: Scalar = f32> {
    pub enter: TetraFaceBary<T>,
    pub exit: TetraFaceBary<T>,
}

impl<T: Scalar> PluckerTetra<T> {
    /// Finds the entry and exit faces of the line carrying `ray`.
    ///
    /// `orientation` is the one the source tetrahedron was oriented with.
    /// Faces with any zero side product (the line grazes an edge or vertex)
    /// are never reported; in that case the result may be `None` even
    /// though the line touches the tetrahedron.
    pub fn crossing(&self, ray: &PluckerVec<T>, orientation: Orientation) -> Option<Crossing<T>> {
        // One product per physical edge; faces only re-sign them.
        let raw: [T; EDGE_COUNT] = std::array::from_fn(|i| ray.dot(&self.0[i], true));

        let enter_sign = orientation.volume_sign();
        let mut enter = None;
        let mut exit = None;

        for face in 0..FACE_COUNT {
            let mut w = [T::zero(); 3];
            let mut signs = [Sign::Zero; 3];
            for e in 0..3 {
                let (idx, flip) = PluckerTetra::<T>::edge_idx(face, e);
                let dot = if flip { raw[idx] } else { -raw[idx] };
                w[e] = dot;
                signs[e] = Sign::of(dot);
            }

            if signs.iter().any(|s| s.is_zero()) {
                trace!("crossing: face {} has a zero side product", face);
                continue;
            }
            if signs[0] != signs[1] || signs[1] != signs[2] {
                continue;
            }

            let bary = TetraFaceBary {
                w: w.map(|x| x.abs()),
                face,
            };
            let slot = if signs[0] == enter_sign {
                &mut enter
            } else {
                &mut exit
            };
            if slot.is_none() {
                *slot = Some(bary);
            }
        }

        Some(Crossing {
            enter: enter?,
            exit: exit?,
        })
    }
}

impl<T: Scalar> Tetra<T> {
    /// Parametric distances `(t_enter, t_exit)` along `ray` at which it
    /// enters and leaves this tetrahedron. `plucker` must be built from
    /// `self` after orienting it with `orientation`.
    pub fn crossing_span(
        &self,
        plucker: &PluckerTetra<T>,
        ray: &AnchoredPluckerVec<T>,
        orientation: Orientation,
    ) -> Option<(T, T)> {
        let crossing = plucker.crossing(&ray.ray, orientation)?;
        Some((
            self.distance(ray, &crossing.enter),
            self.distance(ray, &crossing.exit),
        ))
    }
}
