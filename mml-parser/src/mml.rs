//! Main module for MML library functionality

pub mod ast;
pub mod building;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod mmlc;
pub mod parsing;
pub mod stats;
pub mod testing;
pub mod validation;
