pub mod colors;
pub mod labels;

pub use colors::{Color, Palette};
pub use labels::{label_for, LabelLine, LabelTier};
