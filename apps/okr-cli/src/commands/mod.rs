pub mod generate;
pub mod login;
pub mod objectives;
