pub mod connect_button;
pub mod result_card;
pub mod search_bar;
pub mod theme_toggle;
