mod color;
mod range;

pub use color::*;
pub use range::*;
