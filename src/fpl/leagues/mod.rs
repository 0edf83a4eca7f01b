pub(crate) mod aggregate;
pub(crate) mod standings;
