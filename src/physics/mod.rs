pub mod atmosphere;
pub mod dynamics;
pub mod energy;
pub mod normalization;
pub mod orbital;
