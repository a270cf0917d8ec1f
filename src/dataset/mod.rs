pub mod session;
pub mod summary;
pub mod types;
pub mod view;

pub use session::Session;
pub use summary::aggregate;
pub use types::{Column, Dataset, DatasetMeta, EquipmentRecord, Summary};
pub use view::{DEFAULT_PAGE_SIZE, PageView, SortDirection, SortDirective, view};
