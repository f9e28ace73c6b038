pub mod calculation;
pub mod reference;
