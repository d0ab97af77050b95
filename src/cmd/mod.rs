pub mod analyze;
pub mod decode;
