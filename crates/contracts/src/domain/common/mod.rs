pub mod row_id;

pub use row_id::RowId;
