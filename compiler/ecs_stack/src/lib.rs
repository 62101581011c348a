//! Stack growth for the recursive descent parser and tree-walking evaluator.
//!
//! Both front-end and evaluator recurse once per nesting level of the source
//! program, so a deeply nested expression or a deeply recursive user function
//! maps directly onto native stack depth. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] moves the program onto a fresh stack segment
//! when the current one runs low instead of aborting the process.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than `RED_ZONE` bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Nested {
        Leaf(i64),
        Neg(Box<Nested>),
    }

    fn build(depth: usize) -> Nested {
        let mut node = Nested::Leaf(1);
        for _ in 0..depth {
            node = Nested::Neg(Box::new(node));
        }
        node
    }

    fn eval(node: &Nested) -> i64 {
        ensure_sufficient_stack(|| match node {
            Nested::Leaf(v) => *v,
            Nested::Neg(inner) => -eval(inner),
        })
    }

    #[test]
    fn shallow_tree_evaluates() {
        assert_eq!(eval(&build(3)), -1);
    }

    #[test]
    fn deep_tree_does_not_overflow() {
        let tree = build(200_000);
        assert_eq!(eval(&tree), 1);
        // Iterative teardown so the drop glue does not recurse.
        let mut node = tree;
        while let Nested::Neg(inner) = node {
            node = *inner;
        }
    }

    #[test]
    fn passes_through_results() {
        let out: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
        assert_eq!(out, Err("boom".to_string()));
    }
}
