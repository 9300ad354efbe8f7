//! Unit tests for the delivery module

#[cfg(test)]
pub mod console_tests;
#[cfg(test)]
pub mod resend_adapter_tests;
