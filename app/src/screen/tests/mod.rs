//! Unit tests for the screen binding layer
