use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated cuisine tags (e.g. "italian,mexican")
    #[arg(short, long, default_value = "")]
    pub cuisines: String,

    /// Comma-separated dietary preference tags (e.g. "Vegetarian,Dairy Free")
    #[arg(short, long, default_value = "")]
    pub diets: String,

    /// Path to a JSON pantry file (array of pantry items)
    #[arg(short, long)]
    pub pantry_file: Option<String>,

    /// Seed the pantry with a simulated receipt scan
    #[arg(long)]
    pub scan_receipt: bool,

    /// Also generate a 7-day meal plan
    #[arg(long)]
    pub week_plan: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Splits a comma-separated CLI value into trimmed, non-empty tags.
pub fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("italian, mexican"), vec!["italian", "mexican"]);
        assert_eq!(split_tags(""), Vec::<String>::new());
        assert_eq!(split_tags("Vegetarian,,"), vec!["Vegetarian"]);
    }
}
