pub mod report;
pub mod shc;
