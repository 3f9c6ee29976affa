pub mod compat;
pub mod error;
pub mod icons;
