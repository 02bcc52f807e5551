//! Top-level Pages
//!
//! One page per navigation tab.

mod calendar;
mod dashboard;
mod fridge;
mod my_page;

pub use calendar::CalendarPage;
pub use dashboard::DashboardPage;
pub use fridge::FridgePage;
pub use my_page::MyPage;
