//! medibot-classifier
//!
//! Client for the external skin-image classifier service. The service is
//! opaque: we upload an image and get back a JSON envelope with either a
//! prediction or an error message.

pub mod client;
pub mod error;
pub mod response;
pub mod upload;
