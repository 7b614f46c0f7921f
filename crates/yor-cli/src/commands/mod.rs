pub mod report;
pub mod tags;
