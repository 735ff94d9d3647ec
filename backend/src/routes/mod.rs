pub mod category;
pub mod detail;
pub mod overview;
pub mod session;
