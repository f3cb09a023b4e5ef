//! IO utilities for loading the happiness dataset and its column descriptions.

pub mod column_descriptions;
pub mod happiness_csv;

pub use column_descriptions::read_column_descriptions;
pub use happiness_csv::{
    load_report_inputs, read_happiness_csv, read_happiness_csv_with_config, HappinessReaderConfig,
};
