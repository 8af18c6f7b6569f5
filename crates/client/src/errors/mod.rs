//! Error conversions from transport and decoder crates.

pub(crate) mod conversions;

pub(crate) use conversions::IntoQlError;
