pub(crate) mod height;
pub(crate) mod lissajous;
pub(crate) mod pulse;
