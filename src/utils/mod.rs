//! Internal text helpers shared by the cipher and validation layers.

pub(crate) mod text;
