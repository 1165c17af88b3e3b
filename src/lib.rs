// Public library interface for PopView-rs
// The binaries and any embedding UI go through these modules

pub mod cli;
pub mod data;
pub mod layout;
pub mod render;
