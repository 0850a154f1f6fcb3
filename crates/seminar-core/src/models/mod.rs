pub mod category;
pub mod dataset;
pub mod raw;
