//! Storefront Pages

mod cart;
mod checkout;
mod home;
mod product_detail;
mod products;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
