mod relay;
mod transport;

pub use relay::*;
pub use transport::*;
