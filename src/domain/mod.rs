pub mod availability;
pub mod cabins;
pub mod projection;
pub mod reservation;
