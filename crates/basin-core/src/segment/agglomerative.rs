use tracing::debug;

use super::disjoint::DisjointForest;
use crate::error::{BasinError, Result};
use crate::raster::Raster;

/// An undirected pixel-adjacency edge, weighted by channel-space distance.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
    pub weight: f32,
}

/// Segment a raster by bottom-up region merging over a minimum spanning
/// forest of the 4-connected pixel graph.
///
/// Edges are processed in non-decreasing weight order; two components merge
/// when the candidate weight does not exceed
/// `min(max_internal + k / size)` of either side, so small components accept
/// weaker similarity and the bar tightens as they grow. The returned label of
/// pixel `i` is the canonical root index of its component.
///
/// A raster with no pixels yields an empty label vector.
pub fn segment(raster: &Raster, k: f32) -> Result<Vec<u32>> {
    if !k.is_finite() || k <= 0.0 {
        return Err(BasinError::InvalidScale(k));
    }
    let total = raster.pixel_count();
    if total == 0 {
        return Ok(Vec::new());
    }

    let mut edges = build_grid_edges(raster);
    // Stable sort keeps construction order on equal weights, so repeated runs
    // produce identical labels.
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut forest = DisjointForest::new(total);
    let mut merges = 0usize;
    for edge in &edges {
        let ru = forest.find(edge.a as usize);
        let rv = forest.find(edge.b as usize);
        if ru == rv {
            continue;
        }

        let tau_u = k / forest.size_of(ru) as f32;
        let tau_v = k / forest.size_of(rv) as f32;
        let m_int =
            (forest.max_internal_of(ru) + tau_u).min(forest.max_internal_of(rv) + tau_v);

        if edge.weight <= m_int {
            forest.union(ru, rv, edge.weight);
            merges += 1;
        }
    }
    debug!(
        edges = edges.len(),
        merges,
        components = total - merges,
        "agglomerative merge pass done"
    );

    Ok((0..total).map(|i| forest.find(i) as u32).collect())
}

/// Build the 4-connected grid edge list: every pixel links to its right and
/// lower neighbor (when in bounds), weighted by Euclidean distance in raw
/// channel space. No duplicates, no self-loops.
pub fn build_grid_edges(raster: &Raster) -> Vec<Edge> {
    let w = raster.width();
    let h = raster.height();
    let mut edges = Vec::with_capacity(2 * w * h);

    for row in 0..h {
        for col in 0..w {
            let i = raster.index(row, col);
            if col + 1 < w {
                let right = raster.index(row, col + 1);
                edges.push(Edge {
                    a: i as u32,
                    b: right as u32,
                    weight: raster.channel_distance(i, right),
                });
            }
            if row + 1 < h {
                let down = raster.index(row + 1, col);
                edges.push(Edge {
                    a: i as u32,
                    b: down as u32,
                    weight: raster.channel_distance(i, down),
                });
            }
        }
    }

    edges
}
