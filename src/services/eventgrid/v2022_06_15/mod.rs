//! Event Grid, API version 2022-06-15.

pub mod topics;
