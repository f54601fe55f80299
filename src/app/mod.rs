pub mod mission;
pub mod render;

pub use mission::Mission;
