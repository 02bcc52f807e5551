//! Storefront Constants

/// Product catalog, relative to the page
pub const DATA_PATH: &str = "./assets/data/products.json";

/// Local-storage key of the cart
pub const CART_KEY: &str = "cart";

/// Shown for products without an image
pub const IMG_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1607301405390-0e2f9c322e99?q=80&w=1600&auto=format&fit=crop";

/// Subtotal (won) from which shipping is free
pub const FREE_SHIPPING_THRESHOLD: u64 = 50_000;
pub const SHIPPING_FEE: u64 = 3_000;

/// Products shown on the home page
pub const NEW_ARRIVALS: usize = 8;

/// Log level unless `STOREFRONT_LOG` is set at build time
pub fn log_level() -> log::LevelFilter {
    option_env!("STOREFRONT_LOG")
        .map(console_logger::parse_level)
        .unwrap_or(log::LevelFilter::Info)
}
