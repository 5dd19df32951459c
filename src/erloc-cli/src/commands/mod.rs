//! Command handlers

pub mod code;
pub mod configure;
pub mod convert;
