// Mind aggregator trait: the seam between absorption weights and
// whatever builds a collector's mind.
//
// Only the input side is pinned down: one deterministic weight per
// collected post, in collection order. Coherence, diversity and graph
// layout are left to implementations.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::WeightedNeuron;

/// A node in the mind graph, shaped like the cached graph rows the
/// visualizer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindNode {
    pub id: String,
    /// "own" for the collector's posts, "absorbed" for collected ones
    pub kind: String,
    pub pos: [f32; 3],
    pub size: f32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MindGraph {
    pub nodes: Vec<MindNode>,
    pub edges: Vec<MindEdge>,
}

/// The aggregate state of one collector's mind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindAggregate {
    pub coherence: f64,
    pub diversity: f64,
    pub graph: MindGraph,
}

/// No-op aggregator used when no real aggregation backend is wired in.
/// Errors if called, so nobody mistakes placeholder numbers for real ones.
pub struct NoopAggregator;

impl MindAggregator for NoopAggregator {
    fn aggregate(&self, _weighted: &[WeightedNeuron]) -> Result<MindAggregate> {
        anyhow::bail!("NoopAggregator has no aggregation algorithm: plug in a MindAggregator")
    }
}

/// Combines per-item absorption weights into a mind aggregate.
///
/// Implementations must be deterministic for a given input so a mind can
/// be recomputed from scratch and land on the same state.
pub trait MindAggregator: Send + Sync {
    fn aggregate(&self, weighted: &[WeightedNeuron]) -> Result<MindAggregate>;
}
