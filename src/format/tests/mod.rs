//! Unit tests for the outfit serialization boundary.
//!
//! These verify record production, validation, and the round-trip back
//! into a composition.
