//! Contains extensions used by command line subcommands.

pub mod arithmetic;
pub mod tour;
