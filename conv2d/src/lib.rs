mod conv;
mod kernel;
mod pad;

pub use conv::{convolve, single_conv};
pub use kernel::Kernel;
pub use pad::pad;
