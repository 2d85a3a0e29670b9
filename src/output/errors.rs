pub fn make_errors<I>(errors: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let mut out = String::from("\n=== START ERRORS ===\n");
    for err in errors {
        out.push_str(&format!("{:#}\n", err));
    }
    out.push_str("=== END ERRORS ===\n");
    out
}

pub fn print_errors<I>(errors: I)
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    eprint!("{}", make_errors(errors));
}
