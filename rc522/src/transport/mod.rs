// rc522/src/transport/mod.rs

#[cfg(feature = "hal")]
pub mod hal;
pub mod mock;
#[cfg(feature = "rppal")]
pub mod rppal;
pub mod traits;

#[cfg(feature = "hal")]
pub use hal::HalTransport;
pub use mock::{CardReply, MockTransport, PinEvent};
#[cfg(feature = "rppal")]
pub use self::rppal::RppalTransport;
pub use traits::Transport;
