/// Licenses whose terms require reproducing a notice on redistribution.
///
/// Matched exactly and case-sensitively against detected identifiers.
pub const ATTRIBUTION_REQUIRED_LICENSES: [&str; 5] = [
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "BSD-4-Clause",
    "MIT",
];

/// Whether a single identifier is on the attribution allow-list.
pub fn requires_attribution(id: &str) -> bool {
    ATTRIBUTION_REQUIRED_LICENSES.contains(&id)
}

/// Flatten an SPDX expression into its license operands.
///
/// This is a token split, not a parse: parentheses are dropped and the
/// `OR`, `AND` and `WITH` operators are discarded, so `(MIT AND Apache-2.0)`
/// and `MIT OR Apache-2.0` both yield `MIT` and `Apache-2.0`. Exception
/// identifiers following `WITH` come through as operands too.
pub fn flatten_expression(expr: &str) -> Vec<String> {
    expr.replace(['(', ')'], "")
        .replace(" OR ", " ")
        .replace(" AND ", " ")
        .replace(" WITH ", " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
