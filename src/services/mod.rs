pub mod dynamic_form;
pub mod permission_data;

pub use dynamic_form::{DynamicFormMethod, DynamicFormService};
pub use permission_data::PermissionDataService;
