pub(crate) mod driver;
pub(crate) mod frame;
pub(crate) mod layer;
pub mod palette;
pub(crate) mod presets;
