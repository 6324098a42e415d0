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

use thiserror::Error;

pub type GeomResult<T> = Result<T, GeomError>;

/// Validation failures for the checked constructors and table lookups.
///
/// The geometric operations themselves are total and never produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    #[error("face index {0} is out of range (expected 0..4)")]
    FaceOutOfRange(usize),

    #[error("edge index {0} is out of range")]
    EdgeOutOfRange(usize),

    #[error("vertex index {0} is out of range")]
    VertexOutOfRange(usize),

    #[error("expected {expected} vertices, found {found}")]
    VertexCount { expected: usize, found: usize },

    #[error("orientation must be +1 or -1, got {0}")]
    InvalidOrientation(i8),

    #[error("ray direction has no component above the axis threshold")]
    DegenerateDirection,

    #[error("sphere radius must be a non-negative number")]
    NegativeRadius,
}
