pub mod cabin_card;
pub mod date_selector;
pub mod filter_bar;
pub mod reservation_card;
pub mod reservation_form;

pub use cabin_card::cabin_card;
pub use date_selector::{date_selector, range_query};
pub use filter_bar::filter_bar;
pub use reservation_card::reservation_card;
pub use reservation_form::reservation_form;
