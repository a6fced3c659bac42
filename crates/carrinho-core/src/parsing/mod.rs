pub mod normalize;
pub mod price;
