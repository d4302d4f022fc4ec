pub mod day_6;
pub mod day_8;
pub mod day_10;
pub mod day_12;
pub mod day_13;
