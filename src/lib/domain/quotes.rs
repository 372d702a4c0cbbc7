//! Quote request domain

pub mod emails;
pub mod errors;
pub mod form;
pub mod request;
pub mod service;
