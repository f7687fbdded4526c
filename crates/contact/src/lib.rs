mod client;
mod error;
mod form;
mod handler;
mod submission;

pub use client::HttpSubmitter;
pub use error::*;
pub use form::*;
pub use handler::*;
pub use submission::*;
