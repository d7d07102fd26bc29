pub mod compile;
pub mod getids;
