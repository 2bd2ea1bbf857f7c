pub mod build;
pub mod spec;
pub mod write;
