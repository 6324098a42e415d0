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

use rand::Rng;
use tracing::{debug, trace};

use crate::{
    error::{GeomError, GeomResult},
    geometry::{
        plucker::AnchoredPluckerVec,
        sphere::Sphere,
        tables::{FACE_COUNT, FACE_VERTICES, VERTEX_COUNT},
        util::AxisSelection,
        vector::Vec3,
    },
    kernel::{exact, orientation::orient3d, predicates::Sign},
    numeric::Scalar,
};

/// Requested winding of a tetrahedron's faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Orientation {
    Outward = 1,
    Inward = -1,
}

impl Orientation {
    pub fn from_sign(dir: i8) -> GeomResult<Orientation> {
        match dir {
            1 => Ok(Orientation::Outward),
            -1 => Ok(Orientation::Inward),
            _ => Err(GeomError::InvalidOrientation(dir)),
        }
    }

    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Sign the scalar triple product has once a tetrahedron is oriented
    /// this way.
    pub fn volume_sign(self) -> Sign {
        match self {
            Orientation::Outward => Sign::Positive,
            Orientation::Inward => Sign::Negative,
        }
    }
}

/// A tetrahedron given by four ordered vertices.
///
/// Face ordering is:
/// F0(V3, V2, V1)
/// F1(V2, V3, V0)
/// F2(V1, V0, V3)
/// F3(V0, V1, V2)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tetra<T: Scalar = f32>(pub [Vec3<T>; 4]);

/// Unscaled barycentric weights of a point on one face of a tetrahedron.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TetraFaceBary<T: Scalar = f32> {
    pub(crate) w: [T; 3],
    pub(crate) face: usize,
}

impl<T: Scalar> TetraFaceBary<T> {
    pub fn new(w: [T; 3], face: usize) -> GeomResult<Self> {
        if face >= FACE_COUNT {
            return Err(GeomError::FaceOutOfRange(face));
        }
        Ok(TetraFaceBary { w, face })
    }

    pub fn weights(&self) -> &[T; 3] {
        &self.w
    }

    pub fn face(&self) -> usize {
        self.face
    }
}

impl<T: Scalar> Tetra<T> {
    pub fn new(v0: Vec3<T>, v1: Vec3<T>, v2: Vec3<T>, v3: Vec3<T>) -> Self {
        Tetra([v0, v1, v2, v3])
    }

    /// Index into the vertex array of within-face vertex `vertex` of `face`.
    ///
    /// Panics if `face >= 4` or `vertex >= 3`.
    pub fn vertex_idx(face: usize, vertex: usize) -> usize {
        FACE_VERTICES[face][vertex]
    }

    pub fn try_vertex_idx(face: usize, vertex: usize) -> GeomResult<usize> {
        let verts = FACE_VERTICES
            .get(face)
            .ok_or(GeomError::FaceOutOfRange(face))?;
        verts
            .get(vertex)
            .copied()
            .ok_or(GeomError::VertexOutOfRange(vertex))
    }

    pub fn vertices(&self) -> &[Vec3<T>; 4] {
        &self.0
    }

    /// The three vertices of `face`, in face order.
    pub fn face(&self, face: usize) -> [Vec3<T>; 3] {
        FACE_VERTICES[face].map(|i| self.0[i])
    }

    /// Scalar triple product `(V1-V0) x (V2-V0) . (V3-V0)`.
    pub fn signed_volume(&self) -> T {
        let [a, b, c, d] = &self.0;
        orient3d(a, b, c, d)
    }

    pub fn volume(&self) -> T {
        self.signed_volume().abs() / T::lit(6.0)
    }

    /// Arranges the vertices so all faces point outward for
    /// `Orientation::Outward` and inward for `Orientation::Inward`.
    ///
    /// A zero-volume tetrahedron is left untouched, and so is one whose
    /// volume cannot be signed (non-finite vertices, or a product that
    /// overflows to NaN).
    pub fn orient(&mut self, dir: Orientation) {
        if !self.is_finite() {
            debug!("orient: non-finite vertex, leaving order unchanged");
            return;
        }
        let vol = self.signed_volume();
        if vol.is_nan() {
            debug!("orient: volume is NaN, leaving order unchanged");
            return;
        }
        self.swap_if_opposed(Sign::of(vol), dir);
    }

    /// Same as [`orient`](Self::orient), but with the volume sign computed
    /// exactly. Non-finite vertices leave the tetrahedron untouched.
    pub fn orient_exact(&mut self, dir: Orientation) {
        let [a, b, c, d] = &self.0;
        match exact::orient3d_sign(a, b, c, d) {
            Some(vol) => self.swap_if_opposed(vol, dir),
            None => debug!("orient_exact: non-finite vertex, leaving order unchanged"),
        }
    }

    fn swap_if_opposed(&mut self, vol: Sign, dir: Orientation) {
        if vol.is_zero() {
            debug!("orient: zero-volume tetrahedron, leaving order unchanged");
        } else if vol != dir.volume_sign() {
            trace!("orient: swapping vertices 0 and 1");
            self.0.swap(0, 1);
        }
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(Vec3::is_finite)
    }

    pub fn translate(&mut self, dx: &Vec3<T>) {
        for v in self.0.iter_mut() {
            *v += *dx;
        }
    }

    pub fn centroid(&self) -> Vec3<T> {
        let [a, b, c, d] = self.0;
        (a + b + c + d) * T::lit(0.25)
    }

    /// Sphere centered on the centroid that reaches the farthest vertex.
    ///
    /// Encloses the tetrahedron, but is not the minimal bounding sphere.
    pub fn bounding_sphere(&self) -> Sphere<T> {
        let center = self.centroid();
        let max_r_sqr = self
            .0
            .iter()
            .map(|v| (center - *v).norm_squared())
            .fold(T::zero(), T::max);
        Sphere::new(center, max_r_sqr.sqrt())
    }

    /// Parametric distance `t` at which `ray.p + t * ray.u` reaches the
    /// point on face `bary.face` with weights `bary.w`.
    ///
    /// Solves along the first axis whose direction component clears
    /// [`AXIS_EPS`](crate::geometry::util::AXIS_EPS). If no axis does, the
    /// division is unchecked and the result may be infinite or NaN.
    pub fn distance(&self, ray: &AnchoredPluckerVec<T>, bary: &TetraFaceBary<T>) -> T {
        self.distance_with(ray, bary, AxisSelection::default())
    }

    pub fn distance_with(
        &self,
        ray: &AnchoredPluckerVec<T>,
        bary: &TetraFaceBary<T>,
        selection: AxisSelection,
    ) -> T {
        let dim = match selection.select(ray.u()) {
            Some(dim) if ray.u()[dim] != T::zero() => dim,
            picked => {
                debug!("distance: no usable direction axis in {:?}", ray.u());
                picked.unwrap_or(2)
            }
        };
        self.solve_axis(ray, bary, dim)
    }

    /// Like [`distance`](Self::distance), but refuses rays whose direction
    /// has no component past the threshold.
    pub fn try_distance(
        &self,
        ray: &AnchoredPluckerVec<T>,
        bary: &TetraFaceBary<T>,
    ) -> GeomResult<T> {
        self.try_distance_with(ray, bary, AxisSelection::default())
    }

    /// Checked [`distance_with`](Self::distance_with). Fails when the
    /// policy finds no axis, or the axis it picks has a zero component.
    pub fn try_distance_with(
        &self,
        ray: &AnchoredPluckerVec<T>,
        bary: &TetraFaceBary<T>,
        selection: AxisSelection,
    ) -> GeomResult<T> {
        match selection.select(ray.u()) {
            Some(dim) if ray.u()[dim] != T::zero() => Ok(self.solve_axis(ray, bary, dim)),
            _ => Err(GeomError::DegenerateDirection),
        }
    }

    fn solve_axis(&self, ray: &AnchoredPluckerVec<T>, bary: &TetraFaceBary<T>, dim: usize) -> T {
        let sum = bary.w[0] + bary.w[1] + bary.w[2];
        let [u0, u1, u2] = bary.w.map(|w| w / sum);
        let [p0, p1, p2] = self.face(bary.face).map(|v| v[dim]);
        (u0 * p0 + u1 * p1 + u2 * p2 - ray.p[dim]) / ray.u()[dim]
    }

    /// Draws a point uniformly from the interior.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3<T> {
        let mut s: f64 = rng.random();
        let mut t: f64 = rng.random();
        let mut u: f64 = rng.random();

        // Fold the unit cube into the corner simplex s + t + u <= 1.
        if s + t > 1.0 {
            s = 1.0 - s;
            t = 1.0 - t;
        }
        if t + u > 1.0 {
            let tmp = u;
            u = 1.0 - s - t;
            t = 1.0 - tmp;
        } else if s + t + u > 1.0 {
            let tmp = u;
            u = s + t + u - 1.0;
            s = 1.0 - t - tmp;
        }

        let [a, b, c, d] = self.0;
        let w0 = 1.0 - s - t - u;
        a * T::lit(w0) + b * T::lit(s) + c * T::lit(t) + d * T::lit(u)
    }
}

impl<T: Scalar> TryFrom<&[Vec3<T>]> for Tetra<T> {
    type Error = GeomError;

    fn try_from(vs: &[Vec3<T>]) -> GeomResult<Self> {
        if vs.len() != VERTEX_COUNT {
            return Err(GeomError::VertexCount {
                expected: VERTEX_COUNT,
                found: vs.len(),
            });
        }
        Ok(Tetra([vs[0], vs[1], vs[2], vs[3]]))
    }
}

impl<T: Scalar> From<[Vec3<T>; 4]> for Tetra<T> {
    fn from(vs: [Vec3<T>; 4]) -> Self {
        Tetra(vs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    fn unit_corner() -> Tetra<f32> {
        Tetra::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn orientation_from_sign() {
        assert_eq!(Orientation::from_sign(1), Ok(Orientation::Outward));
        assert_eq!(Orientation::from_sign(-1), Ok(Orientation::Inward));
        assert_eq!(
            Orientation::from_sign(0),
            Err(GeomError::InvalidOrientation(0))
        );
        assert_eq!(Orientation::Inward.as_i8(), -1);
    }

    #[test]
    fn outward_keeps_positive_volume() {
        let mut t = unit_corner();
        t.orient(Orientation::Outward);
        assert_eq!(t, unit_corner());
        assert!(t.signed_volume() > 0.0);
    }

    #[test]
    fn inward_swaps_first_two_vertices() {
        let mut t = unit_corner();
        t.orient(Orientation::Inward);
        assert_eq!(t.0[0], unit_corner().0[1]);
        assert_eq!(t.0[1], unit_corner().0[0]);
        assert!(t.signed_volume() < 0.0);
    }

    #[test]
    fn flat_tetra_is_left_alone() {
        let mut t = Tetra::new(
            Vec3::new(0.0f32, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        );
        let before = t;
        t.orient(Orientation::Outward);
        assert_eq!(t, before);
        t.orient(Orientation::Inward);
        assert_eq!(t, before);
        t.orient_exact(Orientation::Inward);
        assert_eq!(t, before);
    }

    #[test]
    fn exact_orient_matches_float_orient() {
        let mut a = unit_corner();
        let mut b = unit_corner();
        a.orient(Orientation::Inward);
        b.orient_exact(Orientation::Inward);
        assert_eq!(a, b);
    }

    #[test]
    fn vertex_lookup() {
        assert_eq!(Tetra::<f32>::vertex_idx(0, 0), 3);
        assert_eq!(Tetra::<f32>::vertex_idx(2, 1), 0);
        assert_eq!(Tetra::<f32>::try_vertex_idx(3, 2), Ok(2));
        assert_eq!(
            Tetra::<f32>::try_vertex_idx(4, 0),
            Err(GeomError::FaceOutOfRange(4))
        );
        assert_eq!(
            Tetra::<f32>::try_vertex_idx(1, 3),
            Err(GeomError::VertexOutOfRange(3))
        );
    }

    #[test]
    fn bounding_sphere_of_unit_corner() {
        let s = unit_corner().bounding_sphere();
        assert_relative_eq!(s.x, 0.25);
        assert_relative_eq!(s.y, 0.25);
        assert_relative_eq!(s.z, 0.25);
        // Farthest vertex is (1, 0, 0), not the origin.
        assert_relative_eq!(s.r, 0.8291562, epsilon = 1e-6);
        assert!(s.r > s.center().distance_to(&Vec3::zero()));
    }

    #[test]
    fn volume_of_unit_corner() {
        assert_relative_eq!(unit_corner().volume(), 1.0 / 6.0, epsilon = 1e-7);
    }

    #[test]
    fn translate_moves_every_vertex() {
        let mut t = unit_corner();
        t.translate(&Vec3::new(1.0, -2.0, 0.5));
        assert_eq!(t.0[0], Vec3::new(1.0, -2.0, 0.5));
        assert_eq!(t.0[3], Vec3::new(1.0, -2.0, 1.5));
    }

    #[test]
    fn try_from_slice_checks_length() {
        let vs = unit_corner().0;
        assert_eq!(Tetra::try_from(&vs[..]), Ok(unit_corner()));
        assert_eq!(
            Tetra::try_from(&vs[..3]),
            Err(GeomError::VertexCount {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn distance_to_face_point() {
        let t = unit_corner();
        // Straight up the z axis through (0.1, 0.1, 0) on face 3.
        let ray = AnchoredPluckerVec::new(&Vec3::new(0.1, 0.1, -1.0), &Vec3::new(0.0, 0.0, 1.0));
        let bary = TetraFaceBary::new([0.8, 0.1, 0.1], 3).unwrap();
        assert_relative_eq!(t.distance(&ray, &bary), 1.0, epsilon = 1e-6);

        // Unscaled weights give the same answer.
        let scaled = TetraFaceBary::new([8.0, 1.0, 1.0], 3).unwrap();
        assert_relative_eq!(t.distance(&ray, &scaled), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn distance_skips_near_zero_axes() {
        let t = unit_corner();
        // Direction has a sub-threshold x component; the solver uses z.
        let ray = AnchoredPluckerVec {
            ray: crate::geometry::plucker::PluckerVec::new(
                &Vec3::new(0.1, 0.1, -1.0),
                &Vec3::new(1e-7, 0.0, 1.0),
            ),
            p: Vec3::new(0.1, 0.1, -1.0),
        };
        let bary = TetraFaceBary::new([0.8, 0.1, 0.1], 3).unwrap();
        assert_relative_eq!(t.distance(&ray, &bary), 1.0, epsilon = 1e-6);
        assert_relative_eq!(
            t.distance_with(&ray, &bary, AxisSelection::MaxMagnitude),
            1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn try_distance_rejects_zero_direction() {
        let t = unit_corner();
        let ray = AnchoredPluckerVec::new(&Vec3::new(0.1, 0.1, -1.0), &Vec3::zero());
        let bary = TetraFaceBary::new([1.0, 1.0, 1.0], 0).unwrap();
        assert_eq!(
            t.try_distance(&ray, &bary),
            Err(GeomError::DegenerateDirection)
        );
        assert!(!t.distance(&ray, &bary).is_finite());
    }

    #[test]
    fn checked_distance_rejects_zero_direction_for_every_policy() {
        let t = unit_corner();
        let ray = AnchoredPluckerVec::new(&Vec3::new(0.1, 0.1, -1.0), &Vec3::zero());
        let bary = TetraFaceBary::new([1.0, 1.0, 1.0], 3).unwrap();
        for selection in [AxisSelection::default(), AxisSelection::MaxMagnitude] {
            assert_eq!(
                t.try_distance_with(&ray, &bary, selection),
                Err(GeomError::DegenerateDirection)
            );
        }

        let up = AnchoredPluckerVec::new(&Vec3::new(0.1, 0.1, -1.0), &Vec3::new(0.0, 0.0, 1.0));
        let d = t.try_distance_with(&up, &bary, AxisSelection::MaxMagnitude);
        assert_relative_eq!(d.unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn distance_normalizes_weights_before_summing() {
        let t = Tetra::new(
            Vec3::new(0.0f32, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.3, 0.7, 0.9),
        );
        let ray = AnchoredPluckerVec::new(&Vec3::new(0.2, 0.2, -1.0), &Vec3::new(0.0, 0.0, 1.0));
        let w = [3.0e-3f32, 7.0e-3, 1.1e-2];
        let bary = TetraFaceBary::new(w, 0).unwrap();

        let sum = w[0] + w[1] + w[2];
        let [p0, p1, p2] = t.face(0).map(|v| v.z());
        let expected = (w[0] / sum) * p0 + (w[1] / sum) * p1 + (w[2] / sum) * p2 + 1.0;
        assert_eq!(t.distance(&ray, &bary), expected);
    }

    #[test]
    fn non_finite_tetra_is_left_alone() {
        let mut t = unit_corner();
        t.0[2] = Vec3::new(f32::NAN, 1.0, 0.0);
        assert!(!t.is_finite());
        let before = t.0.map(|v| v.0.map(f32::to_bits));
        t.orient(Orientation::Inward);
        t.orient_exact(Orientation::Inward);
        assert_eq!(t.0.map(|v| v.0.map(f32::to_bits)), before);

        // Finite vertices whose volume overflows to NaN are not swapped either.
        let big = f32::MAX;
        let mut huge = Tetra::new(
            Vec3::new(-big, -big, -big),
            Vec3::new(big, -big, -big),
            Vec3::new(-big, big, -big),
            Vec3::new(-big, -big, big),
        );
        assert!(huge.is_finite());
        assert!(huge.signed_volume().is_nan());
        let before = huge;
        huge.orient(Orientation::Inward);
        assert_eq!(huge, before);
    }

    #[test]
    fn bary_checks_face() {
        assert_eq!(
            TetraFaceBary::new([1.0f32, 1.0, 1.0], 4),
            Err(GeomError::FaceOutOfRange(4))
        );
        let b = TetraFaceBary::new([1.0f32, 2.0, 3.0], 1).unwrap();
        assert_eq!(b.face(), 1);
        assert_eq!(b.weights(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn random_points_lie_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let t = Tetra::new(
            Vec3::new(0.0f64, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        for _ in 0..1000 {
            let p = t.random_point(&mut rng);
            assert!(p.x() >= -1e-12 && p.y() >= -1e-12 && p.z() >= -1e-12);
            assert!(p.x() + p.y() + p.z() <= 1.0 + 1e-12);
        }
    }
}
