pub mod fruit;

pub use fruit::*;
