pub mod audit;
pub mod origin;
