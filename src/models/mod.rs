pub mod change;
pub mod page;
pub mod ship_result;

pub use change::{
    classify_element, parse_frontend_changes, parse_frontend_changes_value, ContentChange,
    ElementType, SavedChange,
};
pub use page::{NewPage, PageRecord, PageUpdate, Rendered};
pub use ship_result::{DuplicateSummary, PageSummary, ShipResult};
