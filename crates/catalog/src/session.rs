//! Navigation pipeline over one catalog snapshot.
//!
//! The session owns the product collection handed over by the data source and
//! is passed explicitly to whoever handles navigation. It holds no mutable
//! state: every `navigate` call works on borrowed data and can run
//! concurrently with any other.

use chrono::{DateTime, Utc};
use serde::Serialize;

use alyomi_core::{DomainResult, Entity, ProductId};

use crate::config::CatalogConfig;
use crate::filter::{by_discount, categories, filter};
use crate::intent::{InfoPage, NavigationIntent, NavigationRequest, SpecialView};
use crate::pagination::{PageResult, paginate};
use crate::product::Product;
use crate::ranking::{Ranked, rank, rank_products};

/// Everything a renderer needs for one navigation event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum CatalogView<'a> {
    /// Top-ranked products; not paginated.
    Home { items: Vec<Ranked<'a>> },
    Listing(Listing<'a>),
    Detail {
        id: ProductId,
        product: Option<&'a Product>,
    },
    Info { page: InfoPage },
}

/// A paginated product listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<'a> {
    /// The listing's own intent, for building page links.
    pub intent: NavigationIntent,
    pub page: PageResult<&'a Product>,
    /// Category bar entries; only category and "all" listings carry one.
    pub categories: Option<Vec<&'a str>>,
}

impl Listing<'_> {
    /// Fragment for page `page` of this listing.
    pub fn page_fragment(&self, page: usize) -> String {
        self.intent.fragment(page)
    }
}

#[derive(Debug, Clone)]
pub struct CatalogSession {
    products: Vec<Product>,
    config: CatalogConfig,
    loaded_at: DateTime<Utc>,
}

impl CatalogSession {
    pub fn new(products: Vec<Product>, config: CatalogConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            products,
            config,
            loaded_at: Utc::now(),
        })
    }

    /// Override the load timestamp (snapshots restored from elsewhere, tests).
    pub fn with_loaded_at(mut self, loaded_at: DateTime<Utc>) -> Self {
        self.loaded_at = loaded_at;
        self
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn categories(&self) -> Vec<&str> {
        categories(&self.products)
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Parse `descriptor` and navigate to it.
    pub fn navigate_to(&self, descriptor: &str) -> CatalogView<'_> {
        self.navigate(&NavigationRequest::parse(descriptor))
    }

    /// Filter, order and paginate for one navigation event.
    pub fn navigate(&self, request: &NavigationRequest) -> CatalogView<'_> {
        let view = match &request.intent {
            NavigationIntent::Home => {
                let mut items = rank(&self.products);
                items.truncate(self.config.home_limit);
                CatalogView::Home { items }
            }
            NavigationIntent::Detail(id) => CatalogView::Detail {
                id: id.clone(),
                product: self.product(id),
            },
            NavigationIntent::Info(page) => CatalogView::Info { page: *page },
            NavigationIntent::Special(SpecialView::HotDeal) => {
                let mut deals = by_discount(&self.products);
                deals.truncate(self.config.hot_deal_limit);
                self.listing(&request.intent, &deals, request.page)
            }
            intent => {
                let ordered = rank_products(filter(&self.products, intent));
                self.listing(intent, &ordered, request.page)
            }
        };

        tracing::debug!(
            intent = ?request.intent,
            page = request.page,
            shown = view_len(&view),
            "navigation resolved"
        );
        view
    }

    fn listing<'a>(
        &'a self,
        intent: &NavigationIntent,
        ordered: &[&'a Product],
        page: usize,
    ) -> CatalogView<'a> {
        let categories = matches!(intent, NavigationIntent::Category(_) | NavigationIntent::All)
            .then(|| self.categories());

        CatalogView::Listing(Listing {
            intent: intent.clone(),
            page: paginate(ordered, page, self.config.page_size),
            categories,
        })
    }
}

fn view_len(view: &CatalogView<'_>) -> usize {
    match view {
        CatalogView::Home { items } => items.len(),
        CatalogView::Listing(listing) => listing.page.items.len(),
        CatalogView::Detail { product, .. } => usize::from(product.is_some()),
        CatalogView::Info { .. } => 0,
    }
}
