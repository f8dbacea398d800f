pub mod absorption;
pub mod prices;
pub mod react;
