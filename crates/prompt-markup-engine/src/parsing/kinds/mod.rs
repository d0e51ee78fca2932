pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{ListKind, ListMarker};
pub use paragraph::Paragraph;
