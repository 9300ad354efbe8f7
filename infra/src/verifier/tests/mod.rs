//! Unit tests for the verifier module
