//! Frame-scoped containers.

mod growing;

pub use growing::GrowingBuffer;
