mod contact;
mod server;

pub use contact::contact;
pub use server::serve;
