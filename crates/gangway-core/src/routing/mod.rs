//! Route table: ordered mapping from URL path patterns to page identifiers,
//! with nested children and optional access guards.

mod entry;
mod table;

pub use entry::{PageId, RouteEntry};
pub use table::{Redirect, Resolution, RouteMatch, RouteTable, RouteTableBuilder};
