//! Filter State Model: current search criteria and their translation into a
//! backend query.

pub mod model;
pub mod query;
pub mod state;

pub use model::FilterModel;
pub use query::{to_query_descriptor, Clause, Column, QueryDescriptor, SortClause, SortDirection};
pub use state::{FilterError, FilterKey, FilterPatch, FilterState, FilterValue};
