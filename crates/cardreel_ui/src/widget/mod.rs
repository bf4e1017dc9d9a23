//! Card placeholders: the fixed pool of visual slots the carousel moves.

mod placeholder;
mod pool;

pub use placeholder::Placeholder;
pub use pool::PlaceholderPool;
