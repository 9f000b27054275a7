pub mod account;
pub mod cabin;
pub mod cabins;
pub mod edit_reservation;
pub mod home;
pub mod login;
pub mod profile;
pub mod reservations;
pub mod thankyou;

pub use account::account_page;
pub use cabin::{cabin_page, CabinVm};
pub use cabins::cabins_page;
pub use edit_reservation::edit_reservation_page;
pub use home::home_page;
pub use login::login_page;
pub use profile::{profile_page, ProfileVm};
pub use reservations::{reservations_page, ReservationsVm};
pub use thankyou::thankyou_page;
