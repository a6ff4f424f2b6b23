pub mod attendance;
pub mod docs;

pub use attendance::*;
pub use docs::*;
