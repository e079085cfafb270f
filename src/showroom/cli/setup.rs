use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "showroom", bin_name = "showroom", version)]
#[command(about = "Furniture catalog and admin console", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, optionally for one category
    #[command(alias = "ls")]
    List {
        /// Only products in this category (e.g. home, office)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the categories present in the catalog
    Categories,

    /// Show one product
    #[command(alias = "v")]
    View {
        /// Product id (e.g. h3)
        id: String,
    },

    /// Show what a storefront route displays
    Route {
        /// Route path (e.g. /office-furniture, /product/h3)
        path: String,
    },

    /// Update fields of a product (admin only)
    #[command(alias = "u")]
    Update(UpdateArgs),

    /// Get or set configuration
    Config {
        /// Configuration key (admin-password, strict-updates, currency-symbol)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Product id to update
    pub id: String,

    #[arg(long)]
    pub code: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Price in whole currency units
    #[arg(long)]
    pub price: Option<u64>,

    #[arg(long)]
    pub image_folder: Option<String>,

    #[arg(long)]
    pub image_name: Option<String>,

    /// Admin password (falls back to $SHOWROOM_ADMIN_PASSWORD)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Fail if no product has this id
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_category() {
        let cli = Cli::try_parse_from(["showroom", "ls", "-c", "office"]).unwrap();
        match cli.command {
            Some(Commands::List { category }) => assert_eq!(category.as_deref(), Some("office")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_update() {
        let cli = Cli::try_parse_from([
            "showroom",
            "update",
            "h3",
            "--price",
            "30000",
            "--image-folder",
            "home",
            "-p",
            "pw",
            "--strict",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Update(args)) => {
                assert_eq!(args.id, "h3");
                assert_eq!(args.price, Some(30000));
                assert_eq!(args.image_folder.as_deref(), Some("home"));
                assert_eq!(args.password.as_deref(), Some("pw"));
                assert!(args.strict);
                assert!(args.title.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(Cli::try_parse_from(["showroom", "update", "h3", "--price", "-5"]).is_err());
    }
}
