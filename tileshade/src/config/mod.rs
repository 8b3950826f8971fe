mod style;

pub use style::*;
