pub mod airfoil;
pub mod buffers;
pub mod config;
pub mod errors;
pub mod serialize;
