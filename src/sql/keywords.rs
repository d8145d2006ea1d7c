// Both tables are lower-case; the matcher lower-cases the source before comparing.

pub static KEYWORDS: &[&str] = &[
    "select", "from", "as", "table", "create", "insert", "into", "values", "int", "text",
];

pub static SYMBOLS: &[&str] = &[";", "*", ",", "(", ")"];
