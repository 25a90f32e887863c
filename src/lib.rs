#![doc = include_str!("../README.md")]

pub use fieldwire_pack as pack;
pub use fieldwire_reflect as reflect;
