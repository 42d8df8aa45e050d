pub mod agglomerative;
pub mod competitive;
pub mod cost;
pub mod disjoint;

pub use competitive::{CompetitiveResult, CompetitiveSegmenter, Connectivity, SeedMap, UNLABELED};
pub use cost::{EdgeCost, EuclideanCost, UniformCost};
