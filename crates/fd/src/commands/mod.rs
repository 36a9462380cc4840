//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod copy;
pub(crate) mod serve;

pub(crate) use check::CheckArgs;
pub(crate) use copy::CopyArgs;
pub(crate) use serve::ServeArgs;
