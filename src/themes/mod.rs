// Theme extraction — phrase mining, scoring, clustering, and set comparison.

pub mod cluster;
pub mod compare;
pub mod extract;
pub mod model;
pub mod score;
