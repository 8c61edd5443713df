//! Expression synthesis: the shortest path that selects one given node.

use std::collections::HashSet;

use tracing::debug;
use treepath_core::{Node, Root};

use crate::eval::evaluate;
use crate::pattern::quote;
use crate::{Error, Result};

/// Shortest expression that selects exactly `target` among `root`'s children.
///
/// Tries the quoted node name first, then appends `&param=value` for each
/// candidate parameter with a non-empty value, in the given order, until the
/// expression resolves to `target` alone.
pub fn find_best_expression<N: Node, S: AsRef<str>>(
    root: &Root<N>,
    target: &N,
    candidate_params: &[S],
) -> Result<String> {
    if !root.children().contains(target) {
        return Err(Error::NotAChild(target.node_name()));
    }

    let mut expr = quote(&target.node_name());
    if selects_only(root, &expr, target)? {
        return Ok(expr);
    }

    for param in candidate_params {
        let param = param.as_ref();
        let value = target.parameter(param);
        if value.is_empty() {
            continue;
        }

        expr.push('&');
        expr.push_str(param);
        expr.push('=');
        expr.push_str(&quote(&value));
        if selects_only(root, &expr, target)? {
            debug!(%expr, "disambiguated by parameters");
            return Ok(expr);
        }
    }

    Err(Error::Disambiguation)
}

/// Expression leading from `root` down to `target` through its ancestors.
///
/// Each step is the best expression of one ancestor relative to its parent,
/// so the joined path resolves to `target` alone.
pub fn find_best_path<N: Node, S: AsRef<str>>(
    root: &Root<N>,
    target: &N,
    candidate_params: &[S],
) -> Result<String> {
    let top_level = root.children();
    let mut chain = vec![target.clone()];
    let mut seen = HashSet::from([target.clone()]);

    while let Some(node) = chain.last()
        && !top_level.contains(node)
    {
        match node.parent() {
            Some(Root::Node(parent)) if seen.insert(parent.clone()) => chain.push(parent),
            _ => return Err(Error::NotAChild(target.node_name())),
        }
    }

    let mut steps = Vec::with_capacity(chain.len());
    let mut parent = root.clone();
    for node in chain.into_iter().rev() {
        steps.push(find_best_expression(&parent, &node, candidate_params)?);
        parent = Root::Node(node);
    }

    Ok(steps.join("|"))
}

fn selects_only<N: Node>(root: &Root<N>, expr: &str, target: &N) -> Result<bool> {
    let found = evaluate(expr, [root.clone()])?;
    Ok(found.len() == 1 && found[0] == *target)
}

#[cfg(test)]
#[path = "synth_tests.rs"]
mod synth_tests;
