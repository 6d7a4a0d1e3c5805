pub mod footer;
pub mod gradient_orb;
pub mod header;
pub mod ui;
