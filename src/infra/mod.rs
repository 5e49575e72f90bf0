//! Low-level infrastructure shared by the protocol layer.
pub mod codec;
