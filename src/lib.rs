pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod identify;
pub mod io;
pub mod pipelines;
pub mod roman;
pub mod segment;
