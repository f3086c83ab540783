pub mod plugin;
pub mod preload;
pub mod slots;
pub mod tracking;
