pub mod feed;
pub mod readme;
