// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for order expressions (`<field>:<direction>`).

use wf_core::OrderExpression;

use crate::error::{Error, Result};

/// Order applied when none is given on the command line.
pub const DEFAULT_ORDER: &str = "name:desc";

/// Parse a batch of order expressions, preserving input order.
pub fn parse_orders<S: AsRef<str>>(exprs: &[S]) -> Result<Vec<OrderExpression>> {
    exprs.iter().map(|expr| parse_order(expr.as_ref())).collect()
}

/// Parse a single `field:direction` expression.
///
/// Only `asc` sorts ascending. Every other direction, including typos,
/// sorts descending. The field name is not checked.
///
/// # Errors
///
/// Returns [`Error::InvalidOrderExpression`] unless the expression has
/// exactly one `:`.
pub fn parse_order(expr: &str) -> Result<OrderExpression> {
    let segments: Vec<&str> = expr.split(':').collect();
    let [field, direction] = segments.as_slice() else {
        return Err(Error::InvalidOrderExpression(expr.to_string()));
    };

    let ascending = match *direction {
        "asc" => true,
        "desc" => false,
        other => {
            tracing::warn!(direction = other, "unknown order direction, sorting descending");
            false
        }
    };
    tracing::debug!(field, ascending, "parsed order expression");

    Ok(OrderExpression {
        field: field.to_string(),
        ascending,
    })
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
