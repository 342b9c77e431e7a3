//! Builds parameterized SELECT, INSERT, DELETE text against `<schema>.card_data`.
//!
//! The schema name is fixed at startup from configuration; everything else in
//! the statements is static. Values are always bound positionally ($n), never
//! interpolated.

/// Column order used by every statement. INSERT binds follow this order.
pub const COLUMNS: [&str; 13] = [
    "id",
    "client_id",
    "card_brand",
    "card_type",
    "card_number",
    "expires",
    "cvv",
    "has_chip",
    "num_cards_issued",
    "credit_limit",
    "acct_open_date",
    "year_pin_last_changed",
    "card_on_dark_web",
];

const TABLE: &str = "card_data";

/// Quote identifier for PostgreSQL (safe: schema comes from config, the rest
/// is static).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Fully qualified table name, e.g. `"dbo"."card_data"`.
fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(TABLE))
}

fn column_list() -> String {
    COLUMNS
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT of all 13 columns with no predicate; row order is left to the
/// database.
pub fn select_all(schema: &str) -> String {
    format!("SELECT {} FROM {}", column_list(), qualified_table(schema))
}

/// `select_all` narrowed to one card type; caller binds the type as $1.
pub fn select_by_card_type(schema: &str) -> String {
    format!("{} WHERE {} = $1", select_all(schema), quoted("card_type"))
}

/// INSERT binding all 13 columns positionally in `COLUMNS` order.
pub fn insert(schema: &str) -> String {
    let placeholders = (1..=COLUMNS.len())
        .map(|n| format!("${}", n))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        qualified_table(schema),
        column_list(),
        placeholders
    )
}

/// DELETE by primary key; caller binds the id as $1.
pub fn delete_by_id(schema: &str) -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1",
        qualified_table(schema),
        quoted("id")
    )
}
