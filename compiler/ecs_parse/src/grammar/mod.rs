//! Grammar productions.
//!
//! Every production starts with the cursor on its first token and leaves
//! it on its last, so the caller advances past the construct itself.

mod collections;
mod control;
mod expr;
mod stmt;
