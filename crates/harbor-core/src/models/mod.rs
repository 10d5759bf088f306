pub mod assessment;
pub mod placement;
