//! Product Catalog
//!
//! Loads the static product list and answers the list page's filters.

use std::str::FromStr;

use reqwest::Url;

use crate::config::{DATA_PATH, NEW_ARRIVALS};
use crate::error::{StoreError, StoreResult};
use crate::models::Product;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Recent,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Recent, SortOrder::PriceAsc, SortOrder::PriceDesc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Recent => "recent",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Recent => "최신순",
            SortOrder::PriceAsc => "낮은 가격순",
            SortOrder::PriceDesc => "높은 가격순",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" | "" => Ok(SortOrder::Recent),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            _ => Err(()),
        }
    }
}

/// Resolve the catalog path against the page URL
pub fn catalog_url(page_href: &str) -> StoreResult<Url> {
    Url::parse(page_href)
        .and_then(|base| base.join(DATA_PATH))
        .map_err(|e| StoreError::Url(format!("{} ({})", page_href, e)))
}

pub async fn fetch_products() -> StoreResult<Vec<Product>> {
    let href = web_sys::window()
        .ok_or_else(|| StoreError::Url("no window".to_string()))?
        .location()
        .href()
        .map_err(|_| StoreError::Url("location unavailable".to_string()))?;
    let url = catalog_url(&href)?;
    log::debug!("loading catalog from {}", url);
    let products: Vec<Product> = reqwest::get(url).await?.error_for_status()?.json().await?;
    log::info!("catalog loaded: {} products", products.len());
    Ok(products)
}

/// Category exact match, name substring match, then sort. Sorting is stable,
/// so equal prices keep catalog order.
pub fn filter_products(list: &[Product], search: &str, category: &str, sort: SortOrder) -> Vec<Product> {
    let search = search.trim();
    let mut filtered: Vec<Product> = list
        .iter()
        .filter(|p| category.is_empty() || p.category == category)
        .filter(|p| search.is_empty() || p.name.contains(search))
        .cloned()
        .collect();
    match sort {
        SortOrder::Recent => {}
        SortOrder::PriceAsc => filtered.sort_by_key(|p| p.price),
        SortOrder::PriceDesc => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    filtered
}

pub fn new_arrivals(list: &[Product]) -> Vec<Product> {
    list.iter().take(NEW_ARRIVALS).cloned().collect()
}

/// Distinct non-empty categories in catalog order
pub fn categories(list: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for p in list {
        if !p.category.is_empty() && !seen.contains(&p.category) {
            seen.push(p.category.clone());
        }
    }
    seen
}

pub fn find_product<'a>(list: &'a [Product], id: &str) -> Option<&'a Product> {
    list.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: u64, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category: category.to_string(),
            image: None,
            description: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "린넨 셔츠", 39000, "의류"),
            product("2", "머그컵", 12000, "주방"),
            product("3", "면 셔츠", 29000, "의류"),
            product("4", "도마", 12000, "주방"),
        ]
    }

    #[test]
    fn test_filter_by_category_and_search() {
        let list = catalog();
        let ids = |v: Vec<Product>| v.into_iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_products(&list, "", "의류", SortOrder::Recent)), vec!["1", "3"]);
        assert_eq!(ids(filter_products(&list, " 셔츠 ", "", SortOrder::Recent)), vec!["1", "3"]);
        assert_eq!(ids(filter_products(&list, "컵", "의류", SortOrder::Recent)), Vec::<String>::new());
    }

    #[test]
    fn test_sort_orders() {
        let list = catalog();
        let ids = |v: Vec<Product>| v.into_iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_products(&list, "", "", SortOrder::PriceAsc)), vec!["2", "4", "3", "1"]);
        assert_eq!(ids(filter_products(&list, "", "", SortOrder::PriceDesc)), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("price-desc".parse::<SortOrder>(), Ok(SortOrder::PriceDesc));
        assert_eq!("".parse::<SortOrder>(), Ok(SortOrder::Recent));
        assert!("cheapest".parse::<SortOrder>().is_err());
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
        }
    }

    #[test]
    fn test_new_arrivals_and_categories() {
        let list: Vec<Product> = (0..10).map(|i| product(&i.to_string(), "x", 1000, if i % 2 == 0 { "A" } else { "B" })).collect();
        assert_eq!(new_arrivals(&list).len(), NEW_ARRIVALS);
        assert_eq!(categories(&list), vec!["A", "B"]);
        assert_eq!(find_product(&list, "9").map(|p| p.id.as_str()), Some("9"));
    }

    #[test]
    fn test_catalog_url() {
        let url = catalog_url("https://shop.example.com/frontend/index.html#/cart").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/frontend/assets/data/products.json");
        assert!(matches!(catalog_url("not a url"), Err(StoreError::Url(_))));
    }
}
