//! Azure Event Grid (`Microsoft.EventGrid`).

pub mod v2022_06_15;
