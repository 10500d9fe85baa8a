pub mod field;
pub mod construction_error;
pub mod channel;
pub mod blending_information;
mod validation;
