use clap::{Parser, Subcommand};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Command-line client for the product catalog API", long_about = None)]
pub struct Cli {
    /// API root URL
    #[arg(long, global = true, env = "BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Check API health
    Health,

    /// Create a product
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// List all products
    List,

    /// Get a product by id
    Get {
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },

    /// Replace every field of a product
    Update {
        #[arg(long, allow_negative_numbers = true)]
        id: i64,

        #[arg(long)]
        name: String,

        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Delete a product by id
    Delete {
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_typed_flags() {
        let cli = Cli::try_parse_from([
            "catalog",
            "--base-url",
            "http://example.test",
            "update",
            "--id",
            "3",
            "--name",
            "Gadget",
            "--price",
            "5",
            "--quantity",
            "-1",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://example.test");
        assert_eq!(
            cli.command,
            Commands::Update {
                id: 3,
                name: "Gadget".to_string(),
                price: 5.0,
                quantity: -1,
            }
        );
    }

    #[test]
    fn test_base_url_is_global() {
        let cli = Cli::try_parse_from(["catalog", "list", "--base-url", "http://h:1"]).unwrap();
        assert_eq!(cli.base_url, "http://h:1");
    }

    #[test]
    fn test_rejects_missing_and_mistyped_flags() {
        let missing_quantity = ["catalog", "create", "--name", "x", "--price", "1"];
        assert!(Cli::try_parse_from(missing_quantity).is_err());

        assert!(Cli::try_parse_from(["catalog", "get", "--id", "abc"]).is_err());

        let fractional = [
            "catalog", "create", "--name", "x", "--price", "1", "--quantity", "1.5",
        ];
        assert!(Cli::try_parse_from(fractional).is_err());
    }
}
