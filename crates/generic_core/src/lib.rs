//! Runtime value adapter for writing one algorithm that works across arbitrary value types.

/// Value model, shape classification, indirection, and slice/struct operations.
pub mod reflect;
