pub mod header;
pub mod login_form;
pub mod search_bar;
pub mod category_bar;
pub mod card_grid;
pub mod details_modal;
