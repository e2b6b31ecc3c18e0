pub mod normalize;
pub mod quantize;
