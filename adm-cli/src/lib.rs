//! A library part of command line interface: reads arguments into core models and writes results.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use adm_core as core;

pub mod extensions;
