//! Wire-format tests for the schema records.

mod interop;
mod records;
