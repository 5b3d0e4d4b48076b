//! Hypercube wireframe geometry
//!
//! A cube has 8 vertices and 12 edges; a tesseract has 16 vertices and 32
//! edges. Both are built by doubling: start from the 4-cycle of a square,
//! then for every further axis copy everything built so far onto the other
//! side of that axis and bridge each vertex to its copy.
//!
//! The last doubling step splits the edge list into three color bands: the
//! base sub-cube, its offset copy, and the bridges between them.

use std::ops::Range;

use crate::Vector;

/// An edge between two vertices, by index into the vertex list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub indices: [usize; 2],
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { indices: [a, b] }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.indices[0]
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.indices[1]
    }
}

/// The three contiguous color groups of the edge list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBand {
    /// The base sub-cube
    Primary,
    /// The sub-cube offset along the highest axis
    Secondary,
    /// Edges connecting the two sub-cubes
    Bridge,
}

impl EdgeBand {
    /// All bands in drawing order
    pub const ALL: [EdgeBand; 3] = [EdgeBand::Primary, EdgeBand::Secondary, EdgeBand::Bridge];
}

/// (x, y) signs of the base square, walked as a 4-cycle
const SQUARE: [[f64; 2]; 4] = [[1.0, -1.0], [1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0]];

/// Canonical ±1 vertices of an N-cube in their fixed enumeration order
///
/// Vertex `i` takes (x, y) from the square at `i % 4`; every further axis `k`
/// is `+1` while bit `k` of `i` is clear and `-1` once it is set.
pub fn init_vertices<const N: usize>() -> Vec<Vector<N>> {
    assert!(N >= 2, "a hypercube needs at least two axes");

    (0..1usize << N)
        .map(|i| {
            let mut coords = [0.0; N];
            coords[0] = SQUARE[i & 3][0];
            coords[1] = SQUARE[i & 3][1];
            for (k, c) in coords.iter_mut().enumerate().skip(2) {
                *c = if (i >> k) & 1 == 0 { 1.0 } else { -1.0 };
            }
            Vector::from_array(coords)
        })
        .collect()
}

/// Edge list of an n-cube, built by doubling the square's 4-cycle
pub fn init_edges(dimensions: usize) -> Vec<Edge> {
    assert!(dimensions >= 2, "a hypercube needs at least two axes");

    let mut edges: Vec<Edge> = (0..4).map(|i| Edge::new(i, (i + 1) % 4)).collect();

    for axis in 2..dimensions {
        let offset = 1usize << axis;
        let copy: Vec<Edge> = edges
            .iter()
            .map(|e| Edge::new(e.start() + offset, e.end() + offset))
            .collect();
        edges.extend(copy);
        edges.extend((0..offset).map(|i| Edge::new(i, i + offset)));
    }

    edges
}

/// Index ranges of the color bands in [`init_edges`]'s output
///
/// For a square (no doubling step) everything is primary.
pub fn edge_bands(dimensions: usize) -> [Range<usize>; 3] {
    let total = edge_count(dimensions);
    if dimensions <= 2 {
        return [0..total, total..total, total..total];
    }

    let sub_cube = edge_count(dimensions - 1);
    [0..sub_cube, sub_cube..2 * sub_cube, 2 * sub_cube..total]
}

/// Number of edges of an n-cube: `n * 2^(n-1)`
pub const fn edge_count(dimensions: usize) -> usize {
    dimensions * (1 << (dimensions - 1))
}

/// Number of vertices of an n-cube: `2^n`
pub const fn vertex_count(dimensions: usize) -> usize {
    1 << dimensions
}

/// Canonical wireframe of an N-dimensional cube
#[derive(Clone, Debug, PartialEq)]
pub struct Hypercube<const N: usize> {
    vertices: Vec<Vector<N>>,
    edges: Vec<Edge>,
    bands: [Range<usize>; 3],
}

impl<const N: usize> Hypercube<N> {
    pub fn new() -> Self {
        Self {
            vertices: init_vertices::<N>(),
            edges: init_edges(N),
            bands: edge_bands(N),
        }
    }

    /// Canonical (unrotated) vertices
    #[inline]
    pub fn vertices(&self) -> &[Vector<N>] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges of one color band
    pub fn band(&self, band: EdgeBand) -> &[Edge] {
        let range = match band {
            EdgeBand::Primary => &self.bands[0],
            EdgeBand::Secondary => &self.bands[1],
            EdgeBand::Bridge => &self.bands[2],
        };
        &self.edges[range.clone()]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<const N: usize> Default for Hypercube<N> {
    fn default() -> Self {
        Self::new()
    }
}
