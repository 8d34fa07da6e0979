//! Declared parameter lists of common data-frame methods.
//!
//! Used by [`super::TabularObject::describe_parameters`] when the host has no
//! richer introspection. Parameters are listed in declaration order, without the
//! receiver.

const SIGNATURES: &[(&str, &[&str])] = &[
    (
        "groupby",
        &["by", "axis", "level", "as_index", "sort", "group_keys", "observed", "dropna"],
    ),
    (
        "sort_values",
        &["by", "axis", "ascending", "inplace", "kind", "na_position", "ignore_index", "key"],
    ),
    ("drop_duplicates", &["subset", "keep", "inplace", "ignore_index"]),
    ("duplicated", &["subset", "keep"]),
    ("dropna", &["axis", "how", "thresh", "subset", "inplace", "ignore_index"]),
    ("drop", &["labels", "axis", "index", "columns", "level", "inplace", "errors"]),
    ("pivot", &["columns", "index", "values"]),
    (
        "pivot_table",
        &[
            "values",
            "index",
            "columns",
            "aggfunc",
            "fill_value",
            "margins",
            "dropna",
            "margins_name",
            "observed",
            "sort",
        ],
    ),
    ("set_index", &["keys", "drop", "append", "inplace", "verify_integrity"]),
    (
        "merge",
        &[
            "right",
            "how",
            "on",
            "left_on",
            "right_on",
            "left_index",
            "right_index",
            "sort",
            "suffixes",
            "copy",
            "indicator",
            "validate",
        ],
    ),
    ("join", &["other", "on", "how", "lsuffix", "rsuffix", "sort", "validate"]),
    (
        "melt",
        &["id_vars", "value_vars", "var_name", "value_name", "col_level", "ignore_index"],
    ),
    ("head", &["n"]),
    ("tail", &["n"]),
];

/// Parameter names of `method`, or `None` for an unknown method.
pub fn parameters_of(method: &str) -> Option<Vec<String>> {
    SIGNATURES
        .iter()
        .find(|(name, _)| *name == method)
        .map(|(_, parameters)| parameters.iter().map(|p| p.to_string()).collect())
}
