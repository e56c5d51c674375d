pub mod theme;
pub mod wallet;
