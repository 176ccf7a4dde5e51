pub mod calc;
pub mod catalog;
pub mod configure;
pub mod session;
