use colored::Colorize;
use showroom::api::{CmdMessage, MessageLevel};
use showroom::config::ShowroomConfig;
use showroom::model::{format_price, Category, CurrencyFormat, Product};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 36;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_heading(heading: &str) {
    println!("{}\n", heading.bold());
}

pub(super) fn render_product_list(products: &[Product], currency: &CurrencyFormat) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let id_width = products.iter().map(|p| p.id.width()).max().unwrap_or(0);
    let mut out = String::new();
    for product in products {
        let title = truncate_to_width(&product.title, TITLE_WIDTH);
        let padding = TITLE_WIDTH.saturating_sub(title.width());
        out.push_str(&format!(
            "{}  {}{}  {}  {}\n",
            format!("{:<id_width$}", product.id).yellow(),
            title,
            " ".repeat(padding),
            format!("{:<8}", product.category).dimmed(),
            format_price(product.price, currency),
        ));
    }
    out
}

pub(super) fn render_product(product: &Product, currency: &CurrencyFormat) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("{} Furniture", product.category).to_uppercase().dimmed()
    ));
    out.push_str(&format!("{}\n", product.title.bold()));
    out.push_str(&format!("{}\n\n", format_price(product.price, currency).green()));
    out.push_str(&format!("{}\n\n", product.description));
    out.push_str(&format!("{:<8}{}\n", "Id:", product.id));
    out.push_str(&format!("{:<8}{}\n", "Code:", product.code));
    out.push_str(&format!("{:<8}{}\n", "Image:", product.image_path()));
    out
}

pub(super) fn render_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories.\n".to_string();
    }
    categories.iter().map(|c| format!("{}\n", c)).collect()
}

pub(super) fn render_config(config: &ShowroomConfig) -> String {
    format!(
        "admin-password = {}\nstrict-updates = {}\ncurrency-symbol = {}\n",
        "*".repeat(config.admin_password.chars().count()),
        config.strict_updates,
        config.currency_symbol
    )
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
