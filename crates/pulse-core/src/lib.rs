pub mod adapter;
pub mod error;
pub mod regime;
pub mod score;
pub mod signal;
pub mod theme;
pub mod types;

pub use adapter::*;
pub use error::*;
pub use regime::*;
pub use score::*;
pub use signal::*;
pub use theme::*;
pub use types::*;
