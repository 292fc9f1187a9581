// Utils module - Utility functions

pub mod retry;
