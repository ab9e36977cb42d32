pub(crate) mod bonds;
pub(crate) mod grid;
