pub mod types;
pub mod graph;
pub mod error;
pub mod shape;
pub mod decomposition;
pub mod resolve;
pub mod assemble;
pub mod analyzer;
