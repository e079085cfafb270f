//! # CLI Layer
//!
//! This module is **one possible client** of the showroom library, standing in
//! for the storefront pages.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Each invocation is one session: `update` logs in with the given password
//! and then issues the mutation, both against the same `ShowroomApi`.

use super::render::{
    print_heading, print_messages, render_categories, render_config, render_product,
    render_product_list,
};
use super::setup::{Cli, Commands, UpdateArgs};
use clap::Parser;
use showroom::api::{CmdResult, ConfigAction};
use showroom::commands;
use showroom::error::Result;
use showroom::init::{data_dir, initialize, ShowroomContext};
use showroom::model::{Category, ProductUpdate};
use showroom::route::Route;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Fallback source for `update --password`.
const PASSWORD_ENV: &str = "SHOWROOM_ADMIN_PASSWORD";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let home = data_dir()?;

    // Config does not need the catalog
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&home, key.clone(), value.clone());
    }

    let mut ctx = initialize(&home)?;

    match cli.command {
        Some(Commands::List { category }) => handle_list(&ctx, category),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Route { path }) => handle_route(&ctx, &path),
        Some(Commands::Update(args)) => handle_update(&mut ctx, args),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "showroom=debug"
    } else {
        "showroom=warn"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_products(ctx: &ShowroomContext, result: &CmdResult) {
    if let Some(heading) = &result.heading {
        print_heading(heading);
    }
    print!(
        "{}",
        render_product_list(&result.products, &ctx.api.currency_format())
    );
    print_messages(&result.messages);
}

fn handle_list(ctx: &ShowroomContext, category: Option<String>) -> Result<()> {
    let result = match category {
        Some(category) => ctx.api.products_in_category(&category),
        None => ctx.api.list_products(),
    };
    print_products(ctx, &result);
    Ok(())
}

fn handle_categories(ctx: &ShowroomContext) -> Result<()> {
    let result = ctx.api.categories();
    print!("{}", render_categories(&result.categories));
    Ok(())
}

fn handle_view(ctx: &ShowroomContext, id: &str) -> Result<()> {
    let result = ctx.api.get_product(id);
    if let Some(product) = result.products.first() {
        print!("{}", render_product(product, &ctx.api.currency_format()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_route(ctx: &ShowroomContext, path: &str) -> Result<()> {
    let route = Route::parse(path);
    let result = ctx.api.resolve(&route);

    match route {
        Route::Product(_) => {
            if let Some(product) = result.products.first() {
                print!("{}", render_product(product, &ctx.api.currency_format()));
            }
            print_messages(&result.messages);
        }
        _ => print_products(ctx, &result),
    }
    Ok(())
}

fn handle_update(ctx: &mut ShowroomContext, args: UpdateArgs) -> Result<()> {
    let password = args
        .password
        .clone()
        .or_else(|| std::env::var(PASSWORD_ENV).ok());
    if let Some(password) = password {
        let login = ctx.api.login(&password);
        if !ctx.api.is_admin() {
            print_messages(&login.messages);
        }
    }

    let update = ProductUpdate {
        code: args.code,
        category: args.category.map(Category::new),
        title: args.title,
        description: args.description,
        price: args.price,
        image_folder: args.image_folder,
        image_name: args.image_name,
    };

    let result = ctx.api.update_product(&args.id, &update, args.strict)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(home: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = commands::config::run(home, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
