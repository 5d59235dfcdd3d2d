//! SQL text generation.
//!
//! Every builder keeps column order exactly as given. Callers bind parameters
//! in that same order, so nothing here may sort, dedupe, or otherwise reorder.
//! Table and column names come from schema descriptors and are trusted.

/// Point lookup template: `{0}` is the table, `{1}` the id column.
pub const GET_SQL: &str = "select * from {0} where {1} = ?";

/// Replace `{0}`, `{1}`, ... in `template` with the matching entry of `args`.
///
/// Placeholders with no matching argument are left as-is.
pub fn fill_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// `select * from {table} where {id_column} = ?`
pub fn build_point_lookup(table: &str, id_column: &str) -> String {
    fill_template(GET_SQL, &[table, id_column])
}

/// `insert into {table} ({c1}, {c2}, ...) values (?,?,...)`
pub fn build_batch_insert<S: AsRef<str>>(table: &str, columns: &[S]) -> String {
    let cols: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();
    let placeholders = vec!["?"; columns.len()];
    format!(
        "insert into {} ({}) values ({})",
        table,
        cols.join(", "),
        placeholders.join(",")
    )
}

/// `update {table} set {c1} = ?, {c2} = ?, ... where {id_column} = ?`
///
/// The id placeholder is always the last one. With no columns to set, the
/// statement assigns the id column to itself (`set id = id`), a valid no-op
/// that still binds only the id.
pub fn build_batch_update<S: AsRef<str>>(table: &str, columns: &[S], id_column: &str) -> String {
    let assignments: Vec<String> = if columns.is_empty() {
        vec![format!("{id_column} = {id_column}")]
    } else {
        columns
            .iter()
            .map(|c| format!("{} = ?", c.as_ref()))
            .collect()
    };
    format!(
        "update {} set {} where {} = ?",
        table,
        assignments.join(", "),
        id_column
    )
}

/// Count `?` placeholders in generated SQL.
pub fn placeholder_count(sql: &str) -> usize {
    sql.matches('?').count()
}
