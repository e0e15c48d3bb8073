pub mod bands;
pub mod play;
