pub mod use_brand;
pub mod use_portal;
