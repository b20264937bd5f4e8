//! Cart Handlers

pub(crate) mod add;
pub(crate) mod delete;
mod fields;
pub(crate) mod get;
pub(crate) mod update;
