pub mod session;

pub use session::{SessionStartOptions, pause, start, stop};
