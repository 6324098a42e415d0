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

//! Exact sign predicates over float inputs.
//!
//! Every finite float is a dyadic rational, so converting coordinates to
//! `rug::Rational` loses nothing and the products below carry no rounding.

use rug::Rational;

use crate::{
    geometry::{plucker::PluckerVec, vector::Vec3},
    kernel::predicates::Sign,
    numeric::Scalar,
};

fn to_rational<T: Scalar>(x: T) -> Option<Rational> {
    Rational::from_f64(x.to_f64()?)
}

fn to_rationals<T: Scalar>(v: &Vec3<T>) -> Option<[Rational; 3]> {
    Some([to_rational(v[0])?, to_rational(v[1])?, to_rational(v[2])?])
}

fn diff(a: &[Rational; 3], b: &[Rational; 3]) -> [Rational; 3] {
    std::array::from_fn(|i| {
        let mut r = a[i].clone();
        r -= &b[i];
        r
    })
}

fn dot(a: &[Rational; 3], b: &[Rational; 3]) -> Rational {
    let mut sum = Rational::new();
    for i in 0..3 {
        let mut term = a[i].clone();
        term *= &b[i];
        sum += &term;
    }
    sum
}

fn cross(a: &[Rational; 3], b: &[Rational; 3]) -> [Rational; 3] {
    let component = |i: usize, j: usize| {
        let mut lhs = a[i].clone();
        lhs *= &b[j];
        let mut rhs = a[j].clone();
        rhs *= &b[i];
        lhs -= &rhs;
        lhs
    };
    [component(1, 2), component(2, 0), component(0, 1)]
}

/// Exact sign of [`orient3d`](crate::kernel::orientation::orient3d).
///
/// Returns `None` if any coordinate is NaN or infinite.
pub fn orient3d_sign<T: Scalar>(
    a: &Vec3<T>,
    b: &Vec3<T>,
    c: &Vec3<T>,
    d: &Vec3<T>,
) -> Option<Sign> {
    let a = to_rationals(a)?;
    let ab = diff(&to_rationals(b)?, &a);
    let ac = diff(&to_rationals(c)?, &a);
    let ad = diff(&to_rationals(d)?, &a);
    Some(dot(&cross(&ab, &ac), &ad).cmp0().into())
}

/// Exact sign of [`PluckerVec::dot`] with the same flip convention.
pub fn plucker_side_sign<T: Scalar>(
    p1: &PluckerVec<T>,
    p2: &PluckerVec<T>,
    flip: bool,
) -> Option<Sign> {
    let mut sum = dot(&to_rationals(&p1.u)?, &to_rationals(&p2.v)?);
    sum += &dot(&to_rationals(&p1.v)?, &to_rationals(&p2.u)?);
    let sign = Sign::from(sum.cmp0());
    Some(if flip { sign } else { sign.flipped() })
}
