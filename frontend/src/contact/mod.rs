pub mod controller;
pub mod error;
pub mod fields;
pub mod form;
pub mod relay;
pub mod status;

pub use form::ContactForm;
