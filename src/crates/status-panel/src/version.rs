//! Version information

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_INFO: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " - ",
    env!("CARGO_PKG_AUTHORS")
);
