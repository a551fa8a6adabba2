//! Sample catalog data for tests and demos.

use crate::catalog::{Catalog, Product, WineType};
use crate::money::Money;

/// A small but varied catalog: multiple regions and wine types, a
/// discounted bottle, a featured bottle, and one that is out of stock.
pub fn catalog() -> Catalog {
    Catalog::new([
        Product::new(
            "wine-margaux",
            "Ch\u{e2}teau Margaux 2019",
            Money::from_cents(5995),
            "Bordeaux",
            WineType::Red,
        )
        .with_rating(4.8, 124)
        .featured(),
        Product::new(
            "wine-medoc",
            "M\u{e9}doc R\u{e9}serve 2020",
            Money::from_cents(1495),
            "Bordeaux",
            WineType::Red,
        )
        .with_rating(4.2, 67),
        Product::new(
            "wine-sancerre",
            "Sancerre Les Caillottes",
            Money::from_cents(1895),
            "Loire",
            WineType::White,
        )
        .with_original_price(Money::from_cents(2195))
        .with_rating(4.6, 88),
        Product::new(
            "wine-chablis",
            "Chablis Premier Cru",
            Money::from_cents(2450),
            "Bourgogne",
            WineType::White,
        )
        .with_rating(4.4, 51),
        Product::new(
            "wine-provence",
            "C\u{f4}tes de Provence Ros\u{e9}",
            Money::from_cents(1195),
            "Provence",
            WineType::Rose,
        )
        .featured()
        .with_rating(4.1, 203),
        Product::new(
            "wine-cava",
            "Cava Brut Nature",
            Money::from_cents(995),
            "Pened\u{e8}s",
            WineType::Sparkling,
        )
        .with_original_price(Money::from_cents(1250)),
        Product::new(
            "wine-porto",
            "Tawny Port 10 Years",
            Money::from_cents(2195),
            "Douro",
            WineType::Dessert,
        )
        .with_rating(4.7, 39),
        Product::new(
            "wine-barolo",
            "Barolo DOCG 2018",
            Money::from_cents(3495),
            "Piemonte",
            WineType::Red,
        )
        .featured()
        .with_rating(4.9, 312),
        Product::new(
            "wine-soldout",
            "Pouilly-Fum\u{e9} (uitverkocht)",
            Money::from_cents(1695),
            "Loire",
            WineType::White,
        )
        .out_of_stock(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 9);
        assert!(catalog.iter().any(|p| !p.in_stock));
        assert!(catalog.iter().any(|p| p.is_on_sale()));
        assert!(catalog.iter().any(|p| p.is_featured));
    }
}
