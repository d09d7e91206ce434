pub mod company;
pub mod data_entry;
pub mod stats;
