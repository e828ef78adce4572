pub mod analysis;
pub mod outcome;
