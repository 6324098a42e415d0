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
    geometry::{
        plucker::PluckerVec,
        tables::{
            EDGE_COUNT, EDGE_ENDS, EDGE_STARTS, EDGES_SHARE_FACE, FACE_EDGE_FLIPS, FACE_EDGES,
        },
        tetra::Tetra,
        vector::Vec3,
    },
    numeric::Scalar,
};

/// A tetrahedron represented by the Plücker vectors of its edges, as used
/// by Platis & Theoharis's intersection test.
///
/// Edges are stored in the order `{0-1, 0-2, 0-3, 1-2, 1-3, 2-3}`, each
/// pointing from its lower to its higher vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PluckerTetra<T: Scalar = f32>(pub [PluckerVec<T>; 6]);

impl<T: Scalar> PluckerTetra<T> {
    pub fn new(t: &Tetra<T>) -> Self {
        let v = &t.0;
        PluckerTetra(std::array::from_fn(|i| {
            PluckerVec::from_segment(&v[EDGE_STARTS[i]], &v[EDGE_ENDS[i]])
        }))
    }

    pub fn translate(&mut self, dx: &Vec3<T>) {
        for edge in self.0.iter_mut() {
            edge.translate(dx);
        }
    }

    pub fn edge(&self, i: usize) -> &PluckerVec<T> {
        &self.0[i]
    }

    /// Index of the edge bounding `face` at within-face position `edge`,
    /// and whether it must be flipped when testing against that face.
    ///
    /// Panics if `face >= 4` or `edge >= 3`.
    pub fn edge_idx(face: usize, edge: usize) -> (usize, bool) {
        (FACE_EDGES[face][edge], FACE_EDGE_FLIPS[face][edge])
    }

    pub fn try_edge_idx(face: usize, edge: usize) -> GeomResult<(usize, bool)> {
        let edges = FACE_EDGES
            .get(face)
            .ok_or(GeomError::FaceOutOfRange(face))?;
        let idx = *edges.get(edge).ok_or(GeomError::EdgeOutOfRange(edge))?;
        Ok((idx, FACE_EDGE_FLIPS[face][edge]))
    }

    /// Tetrahedron vertex indices at the start and end of edge `i`.
    pub fn tetra_vertices(i: usize) -> (usize, usize) {
        (EDGE_STARTS[i], EDGE_ENDS[i])
    }

    pub fn try_tetra_vertices(i: usize) -> GeomResult<(usize, usize)> {
        if i >= EDGE_COUNT {
            return Err(GeomError::EdgeOutOfRange(i));
        }
        Ok(Self::tetra_vertices(i))
    }

    /// Whether edges `a` and `b` lie on a common face.
    pub fn edges_share_face(a: usize, b: usize) -> bool {
        EDGES_SHARE_FACE[a][b]
    }
}

impl<T: Scalar> From<&Tetra<T>> for PluckerTetra<T> {
    fn from(t: &Tetra<T>) -> Self {
        PluckerTetra::new(t)
    }
}
