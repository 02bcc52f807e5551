//! UI Components
//!
//! Reusable Leptos components.

mod navigation;
mod login_modal;
mod find_id_dialog;
mod reset_password_dialog;
mod edit_profile_dialog;
mod delete_account_dialog;
mod recipe_card;
mod recipe_detail_modal;
mod recommend_modal;
mod add_ingredient_modal;
mod faq_panel;
mod login_prompt;

pub use navigation::Navigation;
pub use login_modal::LoginModal;
pub use find_id_dialog::FindIdDialog;
pub use reset_password_dialog::ResetPasswordDialog;
pub use edit_profile_dialog::EditProfileDialog;
pub use delete_account_dialog::DeleteAccountDialog;
pub use recipe_card::RecipeCard;
pub use recipe_detail_modal::RecipeDetailModal;
pub use recommend_modal::RecommendModal;
pub use add_ingredient_modal::AddIngredientModal;
pub use faq_panel::FaqPanel;
pub use login_prompt::LoginPrompt;
