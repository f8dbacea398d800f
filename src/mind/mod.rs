// Mind: a collector's acquisitions, weighted for aggregation.

pub mod traits;

use serde::{Deserialize, Serialize};

use crate::edition::{classify_edition, Edition};
use crate::error::Result;

pub use traits::{MindAggregate, MindAggregator, MindEdge, MindGraph, MindNode, NoopAggregator};

/// One collected post as stored: the two fields weighting depends on.
///
/// Field names follow the mint payload (`editionType`, `editions`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedItem {
    pub edition_type: String,
    #[serde(default)]
    pub editions: Option<i64>,
}

impl CollectedItem {
    pub fn classify(&self) -> Result<Edition> {
        classify_edition(&self.edition_type, self.editions)
    }
}

/// A collected edition paired with the weight it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedNeuron {
    pub edition: Edition,
    pub weight: f64,
}

/// Attach an absorption weight to every collected edition, keeping order.
pub fn weigh_collection(editions: &[Edition]) -> Vec<WeightedNeuron> {
    editions
        .iter()
        .map(|edition| WeightedNeuron {
            edition: *edition,
            weight: edition.absorption_weight(),
        })
        .collect()
}

/// Classify stored items and weigh them. Fails on the first invalid item.
pub fn weigh_items(items: &[CollectedItem]) -> Result<Vec<WeightedNeuron>> {
    let editions = items
        .iter()
        .map(CollectedItem::classify)
        .collect::<Result<Vec<_>>>()?;
    Ok(weigh_collection(&editions))
}
