pub mod session;
pub mod slots;
