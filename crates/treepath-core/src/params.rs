use crate::Node;

/// All parameter names of a node, including virtual flag names.
///
/// A parameter whose name ends in `_` holds a space-separated list of flags.
/// Each flag becomes an extra name `name + flag` that providers resolve on
/// their own (e.g. `style_` = `"VISIBLE CHILD"` adds `style_VISIBLE` and
/// `style_CHILD`).
pub fn all_parameter_names<N: Node>(node: &N) -> Vec<String> {
    let mut names = node.parameter_names();
    let mut flags = Vec::new();

    for name in names.iter().filter(|n| n.ends_with('_')) {
        let value = node.parameter(name);
        flags.extend(
            value
                .split(' ')
                .filter(|flag| !flag.is_empty())
                .map(|flag| format!("{name}{flag}")),
        );
    }

    names.extend(flags);
    names
}
