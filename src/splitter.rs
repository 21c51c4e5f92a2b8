//! Splits a raw SQL document into individual statements.
//!
//! Line-oriented and deliberately naive: a semicolon at the end of a line
//! terminates a statement, full-line comments and blank lines are dropped,
//! and semicolons inside string literals or block comments are NOT
//! recognized. Good enough for our setup scripts, which keep one statement
//! per `;`-terminated block.

/// Splits `sql` into an ordered list of statements.
///
/// A line is skipped entirely when its trimmed form is empty or starts with
/// `--`. Accumulated lines are emitted as one statement (joined with `\n`)
/// each time a line ends with `;` after trailing whitespace is ignored. A
/// trailing statement without a terminating `;` is still emitted.
pub fn split_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in sql.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }

        current.push(line);

        if line.trim_end().ends_with(';') {
            statements.push(current.join("\n"));
            current.clear();
        }
    }

    if !current.is_empty() {
        statements.push(current.join("\n"));
    }

    statements.retain(|statement| !is_comment_only(statement));
    statements
}

/// True when every line of `statement` is blank or a `--` comment.
fn is_comment_only(statement: &str) -> bool {
    statement.lines().all(|line| {
        let trimmed = line.trim();
        trimmed.is_empty() || trimmed.starts_with("--")
    })
}
