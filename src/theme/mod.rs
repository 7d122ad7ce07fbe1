pub(crate) mod preset;
pub(crate) mod registry;
