//! Storage, API version 2023-01-01.

pub mod storage_accounts;
