//! Cell types: values, addresses, and ranges

mod address;
mod value;

pub use address::{CellAddress, CellRange};
pub use value::{CellValue, SharedString};
