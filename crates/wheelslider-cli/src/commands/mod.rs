pub mod config;
pub mod lattice;
pub mod run;
pub mod snap;
pub mod themes;
