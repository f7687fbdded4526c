pub mod contact;
mod config;
mod resend;
mod service;
mod smtp;

pub use config::*;
pub use resend::ResendMailer;
pub use service::*;
pub use smtp::SmtpMailer;
