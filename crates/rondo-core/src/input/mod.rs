//! Input abstraction layer.

mod mock;

pub use mock::MockInput;

/// Logical actions consumed by the carousel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Next,
    Prev,
    Goto(u16),
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
