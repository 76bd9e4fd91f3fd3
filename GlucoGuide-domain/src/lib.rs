// GlucoGuide Domain
// This crate contains the assessment data model and derivation logic for the GlucoGuide client

// Domain entities
pub mod entities;

// Services that implement derivation logic
pub mod services;
