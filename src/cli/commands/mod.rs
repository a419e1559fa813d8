pub mod analyse;
pub mod validate;
