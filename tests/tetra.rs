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

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tessgeom::geometry::tables::{EDGE_COUNT, FACE_COUNT};
use tessgeom::geometry::{Orientation, PluckerTetra, Tetra, Vec3};

fn random_tetra(rng: &mut StdRng) -> Tetra<f64> {
    Tetra(std::array::from_fn(|_| {
        Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        )
    }))
}

#[test]
fn regular_corner_tetra_scenario() {
    let mut t = Tetra::new(
        Vec3::new(0.0f32, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    );
    t.orient(Orientation::Outward);
    assert!(t.signed_volume() > 0.0);

    let sphere = t.bounding_sphere();
    assert_relative_eq!(sphere.x, 0.25);
    assert_relative_eq!(sphere.y, 0.25);
    assert_relative_eq!(sphere.z, 0.25);
    // Centroid-to-origin is 0.4330, but the radius reaches the farthest
    // vertex, (1, 0, 0), at sqrt(0.6875).
    assert_relative_eq!(
        sphere.center().distance_to(&Vec3::zero()),
        0.4330,
        epsilon = 1e-4
    );
    assert_relative_eq!(sphere.r, 0.8292, epsilon = 1e-4);
    for v in t.vertices() {
        assert!(sphere.center().distance_to(v) <= sphere.r);
    }
}

#[test]
fn orient_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let mut t = random_tetra(&mut rng);
        t.orient(Orientation::Outward);
        let once = t;
        t.orient(Orientation::Outward);
        assert_eq!(t, once);
    }
}

#[test]
fn reorienting_inward_swaps_first_two_vertices() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..200 {
        let mut t = random_tetra(&mut rng);
        t.orient(Orientation::Outward);
        let outward = t;
        t.orient(Orientation::Inward);
        assert_eq!(t.0[0], outward.0[1]);
        assert_eq!(t.0[1], outward.0[0]);
        assert_eq!(t.0[2], outward.0[2]);
        assert_eq!(t.0[3], outward.0[3]);
    }
}

#[test]
fn oriented_volume_has_requested_sign() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..200 {
        let mut t = random_tetra(&mut rng);
        t.orient(Orientation::Outward);
        assert!(t.signed_volume() > 0.0);
        t.orient_exact(Orientation::Inward);
        assert!(t.signed_volume() < 0.0);
    }
}

#[test]
fn bounding_sphere_contains_vertices() {
    let mut rng = StdRng::seed_from_u64(14);
    for _ in 0..500 {
        let t = random_tetra(&mut rng);
        let s = t.bounding_sphere();
        for v in t.vertices() {
            assert!(s.center().distance_to(v) <= s.r + 1e-12);
        }
    }
}

#[test]
fn translation_moves_bounding_sphere() {
    let mut rng = StdRng::seed_from_u64(15);
    let mut t = random_tetra(&mut rng);
    let before = t.bounding_sphere();
    let dx = Vec3::new(4.0, -3.0, 12.0);
    t.translate(&dx);
    let after = t.bounding_sphere();
    assert_relative_eq!(after.x, before.x + 4.0, epsilon = 1e-12);
    assert_relative_eq!(after.y, before.y - 3.0, epsilon = 1e-12);
    assert_relative_eq!(after.z, before.z + 12.0, epsilon = 1e-12);
    assert_relative_eq!(after.r, before.r, epsilon = 1e-9);
}

#[test]
fn edge_endpoints_lie_on_their_face() {
    for face in 0..FACE_COUNT {
        let face_verts: [usize; 3] = std::array::from_fn(|v| Tetra::<f32>::vertex_idx(face, v));
        for e in 0..3 {
            let (edge, _) = PluckerTetra::<f32>::edge_idx(face, e);
            let (start, end) = PluckerTetra::<f32>::tetra_vertices(edge);
            assert!(face_verts.contains(&start), "face {face} edge {e}");
            assert!(face_verts.contains(&end), "face {face} edge {e}");
        }
    }
}

#[test]
fn every_edge_bounds_exactly_two_faces() {
    for edge in 0..EDGE_COUNT {
        let count = (0..FACE_COUNT)
            .filter(|&f| (0..3).any(|e| PluckerTetra::<f32>::edge_idx(f, e).0 == edge))
            .count();
        assert_eq!(count, 2, "edge {edge}");
    }
}

#[test]
fn shared_edges_are_traversed_in_opposite_directions() {
    // Consistent winding: the two faces on an edge use it with opposite flips.
    for edge in 0..EDGE_COUNT {
        let flips: Vec<bool> = (0..FACE_COUNT)
            .flat_map(|f| (0..3).map(move |e| PluckerTetra::<f32>::edge_idx(f, e)))
            .filter(|&(idx, _)| idx == edge)
            .map(|(_, flip)| flip)
            .collect();
        assert_eq!(flips.len(), 2);
        assert_ne!(flips[0], flips[1], "edge {edge}");
    }
}
