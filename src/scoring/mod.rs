// Scoring: pure weighting functions over minted editions.

pub mod absorption;
