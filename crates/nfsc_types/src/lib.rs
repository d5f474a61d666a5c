//! Protocol data model shared by the `nfsc` crates.

pub mod nfs3;
