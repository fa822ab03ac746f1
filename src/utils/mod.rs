pub mod clock;
pub mod colors;
pub mod id;
