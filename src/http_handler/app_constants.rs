use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Severity of a user-facing notification.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, EnumIter, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MessageType {
    Success,
    Info,
    Warning,
    Error,
}

/// Mode a create/edit modal is opened in.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, EnumIter, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ModalType {
    Add,
    Edit,
}

/// Whether a record is in use. Displays as the label shown to end users.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, EnumIter, Display, IntoStaticStr)]
pub enum UsageStatus {
    #[strum(serialize = "Sử dụng")]
    InUse,
    #[strum(serialize = "Không sử dụng")]
    NotInUse,
}

/// Paging parameters accepted by the list endpoints, passed as a query object.
#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct PaginatorParams {
    pub page: u32,
    pub page_size: u32,
    pub page_number: u32,
}

/// Fetches everything in one page.
pub const DEFAULT_PAGINATION_OPTION: PaginatorParams =
    PaginatorParams { page: 1, page_size: 100_000, page_number: 1 };

impl Default for PaginatorParams {
    fn default() -> Self { DEFAULT_PAGINATION_OPTION }
}
