pub mod config;
pub mod legend;
pub mod materials;
pub mod palette;
