// Output module - Output formatting (JSON, Terminal)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    JSON,
    JSONPretty,
}

pub mod json;
pub mod terminal;

pub use terminal::InventoryFormatter;
