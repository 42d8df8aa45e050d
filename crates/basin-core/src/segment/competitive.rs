use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use tracing::debug;

use super::cost::EdgeCost;
use crate::raster::Raster;

/// Sentinel label for pixels no seed has reached.
pub const UNLABELED: u32 = 0;

/// Seed pixels: linear index to positive label. The BTreeMap gives
/// deterministic iteration; inserting an index twice keeps the last write.
pub type SeedMap = BTreeMap<usize, u32>;

/// Pixel neighborhood used when expanding from seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Connectivity {
    Four,
    Eight,
}

/// Buffers produced by a competitive run. All three have one entry per pixel.
pub struct CompetitiveResult {
    /// Winning seed label, `UNLABELED` where no seed reached.
    pub labels: Vec<u32>,
    /// Best path cost from the nearest seed, `+inf` where unreached.
    pub costs: Vec<f32>,
    /// Predecessor pixel on the best path, `None` at seeds and unreached pixels.
    pub parents: Vec<Option<u32>>,
}

/// Heap entry; duplicates are pushed instead of decrease-key and stale ones
/// discarded on pop.
struct QueueEntry {
    cost: f32,
    seq: u64,
    index: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    // Reversed so BinaryHeap pops the cheapest entry; equal costs pop in
    // insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Multi-source shortest-path labeling: each pixel is won by the seed that
/// reaches it at the lowest accumulated edge cost, partitioning the image
/// into basins around the seeds.
pub struct CompetitiveSegmenter<'a> {
    raster: &'a Raster,
    seeds: SeedMap,
    connectivity: Connectivity,
}

impl<'a> CompetitiveSegmenter<'a> {
    /// Borrow `raster` for the lifetime of the segmenter. Seeds outside the
    /// image and seeds carrying the reserved `UNLABELED` label are skipped
    /// silently at run time.
    pub fn new(raster: &'a Raster, seeds: SeedMap, connectivity: Connectivity) -> Self {
        Self {
            raster,
            seeds,
            connectivity,
        }
    }

    /// Flood the image from every seed at once.
    ///
    /// Classic Dijkstra with unconditional relaxation: a neighbor is updated
    /// whenever the new path is strictly cheaper, regardless of its current
    /// label. Edge costs are non-negative by the `EdgeCost` contract, so on
    /// first extraction with a matching cost the pixel's cost and label are
    /// final.
    ///
    /// Tie-break: entries with equal cost pop in insertion order, so seeds
    /// expand one ring per generation across zero-cost plateaus and a pixel
    /// equidistant from two seeds goes to the seed whose wavefront enqueued
    /// it first (seeds start in ascending pixel-index order).
    pub fn run(&self, edge_cost: &dyn EdgeCost) -> CompetitiveResult {
        let total = self.raster.pixel_count();
        let mut labels = vec![UNLABELED; total];
        let mut costs = vec![f32::INFINITY; total];
        let mut parents: Vec<Option<u32>> = vec![None; total];

        let mut queue = BinaryHeap::new();
        let mut seq = 0u64;
        for (&index, &label) in &self.seeds {
            if index >= total || label == UNLABELED {
                continue;
            }
            labels[index] = label;
            costs[index] = 0.0;
            queue.push(QueueEntry {
                cost: 0.0,
                seq,
                index,
            });
            seq += 1;
        }

        let mut neighbors = Vec::with_capacity(8);
        while let Some(entry) = queue.pop() {
            let u = entry.index;
            if entry.cost > costs[u] {
                continue; // stale duplicate, a cheaper path already won
            }

            self.neighbors_of(u, &mut neighbors);
            for &v in &neighbors {
                let step = edge_cost.cost(u, v);
                if !step.is_finite() {
                    continue; // no edge
                }
                let c_new = costs[u] + step;
                if c_new < costs[v] {
                    costs[v] = c_new;
                    labels[v] = labels[u];
                    parents[v] = Some(u as u32);
                    queue.push(QueueEntry {
                        cost: c_new,
                        seq,
                        index: v,
                    });
                    seq += 1;
                }
            }
        }
        debug!(pixels = total, pushes = seq, "competitive labeling done");

        CompetitiveResult {
            labels,
            costs,
            parents,
        }
    }

    /// In-bounds neighbors of `pos`: up, left, right, down, plus the four
    /// diagonals under eight-connectivity. Out-of-grid neighbors are omitted.
    fn neighbors_of(&self, pos: usize, out: &mut Vec<usize>) {
        out.clear();
        let w = self.raster.width();
        let h = self.raster.height();
        let x = pos % w;
        let y = pos / w;
        let diagonal = self.connectivity == Connectivity::Eight;

        if y > 0 {
            out.push(pos - w);
            if diagonal {
                if x > 0 {
                    out.push(pos - w - 1);
                }
                if x < w - 1 {
                    out.push(pos - w + 1);
                }
            }
        }
        if x > 0 {
            out.push(pos - 1);
        }
        if x < w - 1 {
            out.push(pos + 1);
        }
        if y < h - 1 {
            out.push(pos + w);
            if diagonal {
                if x > 0 {
                    out.push(pos + w - 1);
                }
                if x < w - 1 {
                    out.push(pos + w + 1);
                }
            }
        }
    }
}
