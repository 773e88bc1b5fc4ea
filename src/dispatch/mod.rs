// ============================================================================
// Dispatch Module
// Multi-argument overload resolution over the closed operand set
// ============================================================================
//
// This module provides:
// - Value / Kind: the operand enum and its runtime tag
// - Overloaded: ordered alternatives keyed by argument kinds, plus a default
//
// Resolution is exact and order-sensitive. The first registered alternative
// whose signature matches wins; unmatched calls fall back to the default or
// fail with UnmatchedArguments.

mod registry;
mod value;

pub use registry::{Handler, Overloaded, Overloader, Signature};
pub use value::{Kind, Value};
