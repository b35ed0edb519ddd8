//! Compute, API version 2021-11-01.

pub mod virtual_machines;
