//! Azure API for FHIR (`Microsoft.HealthcareApis`).

pub mod v2022_12_01;
