//! Healthcare APIs, API version 2022-12-01.

pub mod services;
