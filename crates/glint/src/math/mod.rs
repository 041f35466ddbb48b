pub mod float;
pub mod quaternion;
pub mod utils;
pub mod vec;
