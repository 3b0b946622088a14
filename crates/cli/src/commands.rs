use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use alyomi_catalog::{CatalogSession, ProductCard, ProductId};
use alyomi_core::DomainError;
use alyomi_infra::{JsonFileSource, load_or_empty};

use crate::cli::{Cli, Command};

pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let source = JsonFileSource::new(&cli.snapshot);
    let products = load_or_empty(&source);
    let session = CatalogSession::new(products, cli.catalog_config())
        .context("invalid catalog configuration")?;

    if session.is_empty() {
        tracing::warn!(snapshot = %cli.snapshot.display(), "catalog is empty");
    }

    match &cli.command {
        Command::View { fragment } => print_json(out, &session.navigate_to(fragment)),
        Command::Categories => print_json(out, &session.categories()),
        Command::Card { id } => {
            let id: ProductId = id.parse().context("invalid product id")?;
            let product = session
                .product(&id)
                .ok_or_else(DomainError::not_found)
                .with_context(|| format!("product {id}"))?;
            print_json(out, &ProductCard::from_product(product))
        }
    }
}

fn print_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to encode output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}
