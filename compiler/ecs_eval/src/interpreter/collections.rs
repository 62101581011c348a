//! Array and hash literals, and indexing.

use ecs_ir::{ArrayLiteral, HashLiteral};

use super::Evaluator;
use crate::{
    ControlAction, Environment, EvalError, EvalResult, HashKey, HashObject, HashPair, HashRef,
    Value,
};

impl Evaluator {
    pub(super) fn eval_array_literal(
        &self,
        lit: &ArrayLiteral,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        let elements = self.eval_expressions(&lit.elements, env, context)?;
        Ok(Value::array(elements))
    }

    /// Evaluate pairs in source order; later duplicates replace earlier ones.
    pub(super) fn build_hash(
        &self,
        lit: &HashLiteral,
        env: &Environment,
        context: &HashRef,
    ) -> Result<HashRef, ControlAction> {
        let mut hash = HashObject::new();
        for (key_expr, value_expr) in &lit.pairs {
            let key = self.eval_expression(key_expr, env, context)?;
            let Some(hash_key) = HashKey::from_value(&key) else {
                return Err(EvalError::UnusableHashKey(key.type_name()).into());
            };
            let value = self.eval_expression(value_expr, env, context)?;
            hash.insert_keyed(hash_key, HashPair::new(key, value));
        }
        Ok(HashRef::new(hash))
    }
}

/// `left[index]`. Out-of-range positions and missing keys yield `null`.
pub(super) fn eval_index(left: &Value, index: &Value) -> Result<Value, EvalError> {
    match (left, index) {
        (Value::Array(items), Value::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .unwrap_or(Value::Null)),
        (Value::Hash(hash), _) => {
            let key = HashKey::from_value(index)
                .ok_or(EvalError::UnusableHashKey(index.type_name()))?;
            Ok(hash
                .borrow()
                .get(&key)
                .map_or(Value::Null, |pair| pair.value.clone()))
        }
        _ => Err(EvalError::IndexNotSupported(left.type_name())),
    }
}
