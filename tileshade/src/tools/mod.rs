pub mod bounds;
pub mod decode;
pub mod render;
