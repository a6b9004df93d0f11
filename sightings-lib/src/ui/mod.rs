//! Table row construction

pub mod primitives;
mod row;
mod table;

pub use row::{ROW_CELLS, build_row_for_id, build_row_for_observation};
pub use table::ObservationTable;
