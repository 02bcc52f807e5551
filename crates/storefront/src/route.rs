//! Hash Routes
//!
//! `#/`, `#/products`, `#/product/<id>`, `#/cart`, `#/checkout`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    Product(String),
    Cart,
    Checkout,
}

impl Route {
    /// Parse a location hash; unknown routes fall back to home
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let mut parts = path.splitn(2, '/');
        match (parts.next().unwrap_or(""), parts.next()) {
            ("products", None) => Route::Products,
            ("product", Some(id)) if !id.is_empty() => {
                Route::Product(percent_decode_str(id).decode_utf8_lossy().into_owned())
            }
            ("cart", None) => Route::Cart,
            ("checkout", None) => Route::Checkout,
            _ => Route::Home,
        }
    }

    pub fn hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Products => "#/products".to_string(),
            Route::Product(id) => format!("#/product/{}", utf8_percent_encode(id, NON_ALPHANUMERIC)),
            Route::Cart => "#/cart".to_string(),
            Route::Checkout => "#/checkout".to_string(),
        }
    }
}

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| Route::parse(&h))
        .unwrap_or(Route::Home)
}

pub fn navigate(route: &Route) {
    if let Some(win) = web_sys::window() {
        if win.location().set_hash(&route.hash()).is_err() {
            log::warn!("navigation to {:?} failed", route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/products"), Route::Products);
        assert_eq!(Route::parse("#/product/12"), Route::Product("12".to_string()));
        assert_eq!(Route::parse("#/cart"), Route::Cart);
        assert_eq!(Route::parse("#/checkout"), Route::Checkout);
        assert_eq!(Route::parse("#/product/"), Route::Home);
        assert_eq!(Route::parse("#/nowhere"), Route::Home);
    }

    #[test]
    fn test_product_ids_are_encoded() {
        let route = Route::Product("봄 셔츠/1".to_string());
        let hash = route.hash();
        assert!(!hash["#/product/".len()..].contains('/'));
        assert_eq!(Route::parse(&hash), route);
    }
}
