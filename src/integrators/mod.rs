pub mod rkf45;
