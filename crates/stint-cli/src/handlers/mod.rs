pub mod serve;
pub mod session;
pub mod status;
pub mod watch;
