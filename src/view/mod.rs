pub(crate) mod input;
pub(crate) mod scene;
pub(crate) mod state;
pub(crate) mod viewport;
