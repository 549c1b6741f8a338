//! Form rendering module
//!
//! - `field_renderer`: text input, checkbox and inline error widgets
//! - `signup_form`: the password and terms form

mod field_renderer;
mod signup_form;

pub use signup_form::draw;
