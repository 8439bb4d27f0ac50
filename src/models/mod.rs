pub mod menu;
pub mod pronote;
