pub mod command;
mod session;

pub use session::{Outcome, Session};
