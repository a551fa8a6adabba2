//! Wine product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Wine type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WineType {
    /// Red wine.
    #[default]
    Red,
    /// White wine.
    White,
    /// Rosé.
    Rose,
    /// Sparkling wine.
    Sparkling,
    /// Dessert and fortified wine.
    Dessert,
}

impl WineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WineType::Red => "red",
            WineType::White => "white",
            WineType::Rose => "rose",
            WineType::Sparkling => "sparkling",
            WineType::Dessert => "dessert",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WineType::Red => "Rood",
            WineType::White => "Wit",
            WineType::Rose => "Ros\u{e9}",
            WineType::Sparkling => "Mousserend",
            WineType::Dessert => "Dessert",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(WineType::Red),
            "white" => Some(WineType::White),
            "rose" => Some(WineType::Rose),
            "sparkling" => Some(WineType::Sparkling),
            "dessert" => Some(WineType::Dessert),
            _ => None,
        }
    }
}

/// A wine in the catalog.
///
/// `in_stock` is treated as advisory: the commerce platform owns stock
/// correctness, the core only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Current price.
    pub price: Money,
    /// Original price before markdown, if on sale.
    pub original_price: Option<Money>,
    /// Image URLs.
    pub images: Vec<String>,
    /// Wine region (e.g., "Bordeaux").
    pub region: String,
    /// Wine type.
    pub wine_type: WineType,
    /// Whether the wine is currently purchasable.
    pub in_stock: bool,
    /// Units available, if known.
    pub stock_quantity: Option<u32>,
    /// Featured on the storefront.
    pub is_featured: bool,
    /// Average rating (0.0 - 5.0).
    pub rating: Option<f64>,
    /// Number of reviews behind the rating.
    pub review_count: Option<u32>,
}

impl Product {
    /// Create a new in-stock product with the given essentials.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        region: impl Into<String>,
        wine_type: WineType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            original_price: None,
            images: Vec::new(),
            region: region.into(),
            wine_type,
            in_stock: true,
            stock_quantity: None,
            is_featured: false,
            rating: None,
            review_count: None,
        }
    }

    /// Mark as featured.
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Set the pre-markdown price.
    pub fn with_original_price(mut self, price: Money) -> Self {
        self.original_price = Some(price);
        self
    }

    /// Set the rating and review count.
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = Some(rating);
        self.review_count = Some(review_count);
        self
    }

    /// Mark as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self.stock_quantity = Some(0);
        self
    }

    /// Check if the product is on sale (original price above current).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| orig.cents > self.price.cents)
            .unwrap_or(false)
    }

    /// Markdown percentage when on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|orig| {
            if orig.cents > self.price.cents {
                let savings = orig.cents - self.price.cents;
                Some((savings as f64 / orig.cents as f64) * 100.0)
            } else {
                None
            }
        })
    }
}

/// A read-only product list with stable iteration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    pub fn new(products: impl Into<Vec<Product>>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Look up a product by id.
    pub fn by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
