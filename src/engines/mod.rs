pub mod mating;
pub mod reporting;
