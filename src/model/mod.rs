pub mod columns;
pub mod position;
pub mod table;
pub mod value;

pub use position::PositionCategory;
pub use table::{Column, Row, Table};
pub use value::{ColumnType, Value};
