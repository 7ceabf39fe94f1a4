pub mod generate;
pub mod output;
pub mod record;
