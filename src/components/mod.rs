pub mod inspector;
pub mod palette;
pub mod scanner;
pub mod schematic;
pub mod toolbar;
