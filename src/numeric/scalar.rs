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

use num_traits::{Float, FromPrimitive, ToPrimitive};

use std::{fmt::Debug, ops::AddAssign};

/// Floating-point coordinate type accepted by every geometric primitive.
///
/// Snapshot coordinates are stored as `f32`; `f64` is supported for
/// callers that need the extra headroom when working far from the origin.
pub trait Scalar:
    Float + FromPrimitive + ToPrimitive + AddAssign + Debug + Default + Send + Sync + 'static
{
    /// Converts an `f64` literal into `Self`.
    ///
    /// Every literal used by the kernel is representable in `f32`, so the
    /// conversion cannot fail for the supported types.
    fn lit(v: f64) -> Self {
        Self::from_f64(v).unwrap_or_else(Self::nan)
    }
}

impl Scalar for f32 {}
impl Scalar for f64 {}
