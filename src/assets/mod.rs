pub mod decode;
pub mod normalize;
