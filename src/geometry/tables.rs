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

//! Combinatorial structure of a tetrahedron.
//!
//! Face `f` is the triangle made of the three vertices other than `f`:
//!
//! ```text
//! F0(V3, V2, V1)
//! F1(V2, V3, V0)
//! F2(V1, V0, V3)
//! F3(V0, V1, V2)
//! ```
//!
//! The six physical edges are stored in the order
//! `{0-1, 0-2, 0-3, 1-2, 1-3, 2-3}`. Within a face, edge `i` is the edge
//! opposite within-face vertex `i`, traversed in the face's winding.

/// Number of vertices in a tetrahedron.
pub const VERTEX_COUNT: usize = 4;
/// Number of faces in a tetrahedron.
pub const FACE_COUNT: usize = 4;
/// Number of edges in a tetrahedron.
pub const EDGE_COUNT: usize = 6;

/// `FACE_VERTICES[face][vertex]` is the tetrahedron vertex index.
pub const FACE_VERTICES: [[usize; 3]; FACE_COUNT] = [[3, 2, 1], [2, 3, 0], [1, 0, 3], [0, 1, 2]];

/// `FACE_EDGES[face][edge]` is the physical edge bounding that face.
pub const FACE_EDGES: [[usize; 3]; FACE_COUNT] = [
    [3, 4, 5], // 2-1, 1-3, 3-2
    [2, 1, 5], // 3-0, 0-2, 2-3
    [2, 4, 0], // 0-3, 3-1, 1-0
    [3, 1, 0], // 1-2, 2-0, 0-1
];

/// Whether the face traverses the physical edge against its stored
/// start-to-end direction.
pub const FACE_EDGE_FLIPS: [[bool; 3]; FACE_COUNT] = [
    [true, false, true],
    [true, false, false],
    [false, true, true],
    [false, true, false],
];

/// `EDGES_SHARE_FACE[a][b]` is true when edges `a` and `b` bound a common
/// face. Opposite edges (and an edge with itself) are false.
pub const EDGES_SHARE_FACE: [[bool; EDGE_COUNT]; EDGE_COUNT] = [
    [false, true, true, true, true, false],
    [true, false, true, true, false, true],
    [true, true, false, false, true, true],
    [true, true, false, false, true, true],
    [true, false, true, true, false, true],
    [false, true, true, true, true, false],
];

/// Start vertex of each physical edge.
pub const EDGE_STARTS: [usize; EDGE_COUNT] = [0, 0, 0, 1, 1, 2];
/// End vertex of each physical edge.
pub const EDGE_ENDS: [usize; EDGE_COUNT] = [1, 2, 3, 2, 3, 3];
