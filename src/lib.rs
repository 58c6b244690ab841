pub mod api;
pub mod arsenal;
pub mod ball;
pub mod config;
pub mod context;
pub mod error;
pub mod explain;
pub mod inventory;
pub mod lanes;
pub mod quadrant;
pub mod scorer;
// cmd and reports belong to the binary (main.rs).
