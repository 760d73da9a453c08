pub mod convert;
pub mod fluence;
pub mod lattice;
pub mod pulse;
pub mod spectrum;
pub mod trajectory;
