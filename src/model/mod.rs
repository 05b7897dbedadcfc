mod data_row;
mod iteration;
mod result;
mod work_item;

pub use data_row::DataRow;
pub use data_row::GenericResponse;
pub use iteration::TeamIterationAttributes;
pub use iteration::TeamSettingsIteration;
pub use result::Result;
pub use work_item::IterationWorkItems;
pub use work_item::WorkItem;
pub use work_item::WorkItemLink;
pub use work_item::WorkItemReference;
