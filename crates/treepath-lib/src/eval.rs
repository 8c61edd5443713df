//! Path evaluator.
//!
//! A path is a `|`-separated list of segments applied left to right to a
//! frontier of roots. Line breaks separate independent alternatives whose
//! results are concatenated. The filter right after `**` keeps each node once,
//! even when it is a child of several frontier entries.
//!
//! | Segment        | Effect                                                    |
//! |----------------|-----------------------------------------------------------|
//! | `**`           | frontier plus all descendants, each node once             |
//! | `..`           | parent of every root                                      |
//! | `.#min..max`   | slice of the frontier (1-based, negative counts from end) |
//! | `.!name`       | stable sort by parameter (`.!!name` descending)           |
//! | `.`, `.&k=v`   | filter the roots themselves                               |
//! | `name&k=v...`  | children whose name and parameters match                  |

use std::collections::HashSet;

use tracing::{debug, trace};
use treepath_core::{Node, Root};

use crate::pattern::{self, Pattern, unquote};
use crate::{Error, Result};

/// Default number of nodes descendant expansion may visit per evaluation.
pub const DEFAULT_FUEL: u32 = 1_000_000;

/// Path evaluator with its resource limits.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    fuel: Option<u32>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            fuel: Some(DEFAULT_FUEL),
        }
    }
}

/// Evaluate `path` against `roots` with the default limits.
pub fn evaluate<N: Node>(
    path: &str,
    roots: impl IntoIterator<Item = Root<N>>,
) -> Result<Vec<N>> {
    Evaluator::default().evaluate(path, roots)
}

/// Evaluate `path` from `root`, expecting at most one result.
pub fn evaluate_single<N: Node>(root: Root<N>, path: &str, kind: &str) -> Result<Option<N>> {
    Evaluator::default().evaluate_single(root, path, kind)
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit on nodes visited by descendant expansion; `None` disables the limit.
    pub fn with_fuel(mut self, limit: Option<u32>) -> Self {
        self.fuel = limit;
        self
    }

    pub fn evaluate<N: Node>(
        &self,
        path: &str,
        roots: impl IntoIterator<Item = Root<N>>,
    ) -> Result<Vec<N>> {
        let roots: Vec<Root<N>> = roots.into_iter().collect();
        let mut fuel = Fuel(self.fuel);
        debug!(path, roots = roots.len(), "evaluating path");

        let found = if path.contains(['\n', '\r']) {
            let mut found = Vec::new();
            for line in path.split(['\n', '\r']).filter(|line| !line.is_empty()) {
                found.extend(evaluate_line(line, roots.clone(), &mut fuel)?);
            }
            found
        } else {
            evaluate_line(path, roots, &mut fuel)?
        };

        debug!(path, found = found.len(), "path evaluated");
        Ok(found)
    }

    /// Evaluate `path` from `root`; more than one result is an error naming `kind`.
    pub fn evaluate_single<N: Node>(
        &self,
        root: Root<N>,
        path: &str,
        kind: &str,
    ) -> Result<Option<N>> {
        let mut found = self.evaluate(path, [root])?;
        match found.len() {
            0 | 1 => Ok(found.pop()),
            count => Err(Error::Ambiguous {
                kind: kind.to_string(),
                path: path.to_string(),
                count,
            }),
        }
    }
}

/// Remaining descendant-expansion budget.
struct Fuel(Option<u32>);

impl Fuel {
    fn consume(&mut self) -> Result<()> {
        match &mut self.0 {
            Some(0) => Err(Error::ExecFuelExhausted),
            Some(remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

fn evaluate_line<N: Node>(
    line: &str,
    mut frontier: Vec<Root<N>>,
    fuel: &mut Fuel,
) -> Result<Vec<N>> {
    let mut path = line.to_string();
    // Set right after `**|`: the next filter keeps each node once.
    let mut expanded = false;

    loop {
        trace!(segment = %path, frontier = frontier.len(), "next segment");

        if path == "**" || path == ".." {
            path.push_str("|.");
        }

        if let Some(rest) = path.strip_prefix("**|") {
            frontier = descendants(frontier, fuel)?;
            expanded = true;
            path = rest.to_string();
        } else if let Some(rest) = path.strip_prefix("..|") {
            frontier = frontier.iter().filter_map(Root::parent).collect();
            expanded = false;
            path = rest.to_string();
        } else if let Some(body) = path.strip_prefix(".#") {
            let (bounds, rest) = split_operator(body);
            let (min, max) = parse_bounds(&path, bounds)?;
            frontier = select(frontier, min, max);
            expanded = false;
            path = rest.to_string();
        } else if let Some(body) = path.strip_prefix(".!") {
            let (key, rest) = split_operator(body);
            frontier = sort(frontier, key);
            expanded = false;
            path = rest.to_string();
        } else if path == "." || path.starts_with(".|") || path.starts_with(".&") {
            frontier = frontier.into_iter().map(Root::into_singleton).collect();
            path = format!("*{}", &path[1..]);
        } else {
            let segment = Segment::parse(&path)?;
            let mut seen = HashSet::new();
            let matched: Vec<N> = frontier
                .iter()
                .flat_map(Root::children)
                .filter(|node| segment.matches(node))
                .filter(|node| !expanded || seen.insert(node.clone()))
                .collect();
            expanded = false;

            match segment.rest {
                Some(rest) => {
                    frontier = matched.into_iter().map(Root::Node).collect();
                    path = path[rest..].to_string();
                }
                None => return Ok(matched),
            }
        }
    }
}

/// Split an operator body at the first `|`; a missing remainder means `.`.
fn split_operator(body: &str) -> (&str, &str) {
    body.split_once('|').unwrap_or((body, "."))
}

/// Roots and every node below them in pre-order, each node at most once.
fn descendants<N: Node>(roots: Vec<Root<N>>, fuel: &mut Fuel) -> Result<Vec<Root<N>>> {
    let mut visited = HashSet::new();
    let mut expanded = Vec::new();
    let mut stack = Vec::new();

    for root in roots {
        match root {
            Root::Node(node) => stack.push(node),
            Root::Detached(children) => {
                stack.extend(children.iter().rev().cloned());
                expanded.push(Root::Detached(children));
            }
        }

        while let Some(node) = stack.pop() {
            if !visited.insert(node.clone()) {
                continue;
            }
            fuel.consume()?;
            stack.extend(node.children().into_iter().rev());
            expanded.push(Root::Node(node));
        }
    }

    Ok(expanded)
}

fn parse_bounds(path: &str, bounds: &str) -> Result<(i64, i64)> {
    let parse = |text: &str| {
        text.parse::<i64>()
            .map_err(|_| Error::syntax(path, 2, format!("malformed index `{bounds}`")))
    };
    match bounds.split_once("..") {
        Some((min, max)) => Ok((parse(min)?, parse(max)?)),
        None => {
            let index = parse(bounds)?;
            Ok((index, index))
        }
    }
}

/// Keep `items[min..=max]` after resolving 1-based, negative and open bounds.
fn select<T>(items: Vec<T>, min: i64, max: i64) -> Vec<T> {
    let count = items.len() as i64;
    if count == 0 {
        return items;
    }

    let resolve = |bound: i64, is_max: bool| match bound {
        b if b < 0 => b + count,
        0 if is_max => count - 1,
        0 => 0,
        b => b - 1,
    };
    let (mut lo, mut hi) = (resolve(min, false), resolve(max, true));
    if hi < lo {
        std::mem::swap(&mut lo, &mut hi);
    }
    let lo = lo.clamp(0, count - 1) as usize;
    let hi = hi.clamp(0, count - 1) as usize;

    items.into_iter().skip(lo).take(hi - lo + 1).collect()
}

fn sort<N: Node>(roots: Vec<Root<N>>, key: &str) -> Vec<Root<N>> {
    let (descending, param) = match key.strip_prefix('!') {
        Some(param) => (true, param),
        None => (false, key),
    };

    let mut keyed: Vec<(String, Root<N>)> = roots
        .into_iter()
        .map(|root| {
            let sort_key = match root.as_node() {
                Some(node) if param.is_empty() => node.node_name(),
                Some(node) => node.parameter(param),
                None => String::new(),
            };
            (sort_key, root)
        })
        .collect();

    if descending {
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }
    keyed.into_iter().map(|(_, root)| root).collect()
}

/// One clause of a filter segment.
#[derive(Debug)]
struct Clause {
    /// Parameter to test; `None` tests the node name.
    param: Option<String>,
    pattern: Pattern,
}

/// A filter segment: AND-combined clauses plus where the next segment starts.
#[derive(Debug)]
struct Segment {
    clauses: Vec<Clause>,
    rest: Option<usize>,
}

impl Segment {
    /// Parse `name&param=value&...` up to the next unescaped `|`.
    ///
    /// The leading name pattern is always present, so a segment that starts
    /// with `&` only matches nodes with an empty name.
    fn parse(path: &str) -> Result<Self> {
        let name = pattern::compile(path, 0, false)?;
        let mut clauses = vec![Clause {
            param: None,
            pattern: name.pattern,
        }];
        let mut pos = name.rest;

        loop {
            match path.as_bytes().get(pos) {
                Some(b'&') => {
                    let key = pattern::compile(path, pos + 1, true)?;
                    if path.as_bytes().get(key.rest) != Some(&b'=') {
                        return Err(Error::syntax(path, key.rest, "missing equals sign"));
                    }
                    let value = pattern::compile(path, key.rest + 1, false)?;
                    clauses.push(Clause {
                        param: Some(unquote(&key.text)),
                        pattern: value.pattern,
                    });
                    pos = value.rest;
                }
                Some(b'|') => {
                    return Ok(Self {
                        clauses,
                        rest: Some(pos + 1),
                    });
                }
                _ => return Ok(Self { clauses, rest: None }),
            }
        }
    }

    fn matches<N: Node>(&self, node: &N) -> bool {
        self.clauses.iter().all(|clause| {
            let value = match &clause.param {
                None => node.node_name(),
                Some(param) => node.parameter(param),
            };
            clause.pattern.is_match(&value)
        })
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
