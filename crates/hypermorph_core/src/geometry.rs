//! Morphing tesseract geometry
//!
//! The tesseract is drawn as two nested cubes with corresponding corners
//! joined: 16 vertices and a fixed edge table. Only the vertex positions move
//! from frame to frame; the topology never changes.
//!
//! At rest (`k1 = k2 = x = 0`) even indices are corners of the outer cube
//! (half-extent `a`) and odd indices are corners of the inner cube
//! (half-extent `b`). Vertex `2i + 1` is the inner twin of vertex `2i`, and
//! vertices `i` and `i + 8` mirror each other across the `x = 0` plane:
//!
//! ```text
//!  index  rest position       moves to (k1 = k2 = 1)
//!  0 2 4 6     (+a, ±a, ±a)   (+b, ±b, ±b)   outer front contracts inward
//!  1 3 5 7     (+b, ±b, ±b)   (-b, ±b, ±b)   inner front folds across x
//!  8 10 12 14  (-a, ±a, ±a)   (+a, ±a, ±a)   outer back slides forward
//!  9 11 13 15  (-b, ±b, ±b)   (-a, ±a, ±a)   inner back expands outward
//! ```
//!
//! The end pose is the rest pose with the roles of the two cubes swapped,
//! which is what makes the cycle read as the hypercube turning through
//! itself.

use hypermorph_math::{transit, transit_with_offset, Vec3};

use crate::params::MorphParameters;

/// Number of vertices in the morphing tesseract
pub const VERTEX_COUNT: usize = 16;

/// Number of edges drawn per frame
pub const EDGE_COUNT: usize = 34;

/// Edge table (unordered vertex index pairs)
///
/// The first 32 entries are the tesseract's edges: every pair of indices
/// differing in exactly one bit. Bit 0 joins a corner to its twin in the
/// other cube, bits 1-3 run along the cubes' own edges.
///
/// The final two entries are extra lines that are not edges of the
/// tesseract figure: each draws a diagonal across one of the outer cube's
/// z-faces. They fill the two remaining slots without repeating a pair or
/// joining a vertex to itself.
pub const EDGES: [[u16; 2]; EDGE_COUNT] = [
    [0, 1], [0, 2], [0, 4], [0, 8],
    [1, 3], [1, 5], [1, 9],
    [2, 3], [2, 6], [2, 10],
    [3, 7], [3, 11],
    [4, 5], [4, 6], [4, 12],
    [5, 7], [5, 13],
    [6, 7], [6, 14],
    [7, 15],
    [8, 9], [8, 10], [8, 12],
    [9, 11], [9, 13],
    [10, 11], [10, 14],
    [11, 15],
    [12, 13], [12, 14],
    [13, 15],
    [14, 15],
    [0, 12], [2, 14],
];

/// Number of line-list endpoints per frame
pub const LINE_VERTEX_COUNT: usize = EDGE_COUNT * 2;

/// Compute the 16 object-space vertices for one frame
///
/// # Arguments
/// * `params` - Coefficients from [`derive_parameters`](crate::derive_parameters)
/// * `a` - Outer cube half-extent
/// * `b` - Inner cube half-extent
pub fn build_vertices(params: MorphParameters, a: f64, b: f64) -> [Vec3; VERTEX_COUNT] {
    let MorphParameters { k1, k2, x } = params;

    // Outer front corners contract along all axes
    let contract = |from: f64, to: f64| transit(from, to, k1);
    // Inner corners fold across x, starting from the slid face
    let fold_x = |from: f64, to: f64| transit_with_offset(from, to, k2, x);
    // Inner back corners grow in y and z while folding
    let grow = |from: f64, to: f64| transit(from, to, k2);

    [
        // A0 -> B0
        Vec3::from_f64(contract(a, b), contract(a, b), contract(a, b)),
        // B0 -> B4
        Vec3::from_f64(fold_x(b, -b), b, b),
        // A1 -> B1
        Vec3::from_f64(contract(a, b), contract(a, b), contract(-a, -b)),
        // B1 -> B5
        Vec3::from_f64(fold_x(b, -b), b, -b),
        // A2 -> B2
        Vec3::from_f64(contract(a, b), contract(-a, -b), contract(a, b)),
        // B2 -> B6
        Vec3::from_f64(fold_x(b, -b), -b, b),
        // A3 -> B3
        Vec3::from_f64(contract(a, b), contract(-a, -b), contract(-a, -b)),
        // B3 -> B7
        Vec3::from_f64(fold_x(b, -b), -b, -b),
        // A4 -> A0
        Vec3::from_f64(contract(-a, a), a, a),
        // B4 -> A4
        Vec3::from_f64(fold_x(-b, -a), grow(b, a), grow(b, a)),
        // A5 -> A1
        Vec3::from_f64(contract(-a, a), a, -a),
        // B5 -> A5
        Vec3::from_f64(fold_x(-b, -a), grow(b, a), grow(-b, -a)),
        // A6 -> A2
        Vec3::from_f64(contract(-a, a), -a, a),
        // B6 -> A6
        Vec3::from_f64(fold_x(-b, -a), grow(-b, -a), grow(b, a)),
        // A7 -> A3
        Vec3::from_f64(contract(-a, a), -a, -a),
        // B7 -> A7
        Vec3::from_f64(fold_x(-b, -a), grow(-b, -a), grow(-b, -a)),
    ]
}

/// Expand the edge table into line-list endpoints
///
/// Entry `2e` and `2e + 1` are the two ends of `EDGES[e]`.
pub fn line_list(vertices: &[Vec3; VERTEX_COUNT]) -> [Vec3; LINE_VERTEX_COUNT] {
    let mut lines = [Vec3::ZERO; LINE_VERTEX_COUNT];
    for (i, [from, to]) in EDGES.iter().enumerate() {
        lines[2 * i] = vertices[*from as usize];
        lines[2 * i + 1] = vertices[*to as usize];
    }
    lines
}
