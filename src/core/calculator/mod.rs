pub mod gaps;
pub mod normalizer;
pub mod ranking;
pub mod travel;
