use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Closed set of REST resource families a `UrlModel` can serve.
///
/// The serialized form of each variant is the literal path prefix appended
/// to the server root.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, EnumIter, EnumCount, Display, IntoStaticStr)]
pub enum ApiPrefix {
    #[strum(serialize = "/auth")]
    Auth,
    #[strum(serialize = "/values/get")]
    ValuesGet,
    #[strum(serialize = "/users")]
    Users,
    #[strum(serialize = "/menus")]
    Menus,
    #[strum(serialize = "/roles")]
    Roles,
    #[strum(serialize = "/dynamic-form")]
    DynamicForm,
    #[strum(serialize = "/Categories")]
    Categories,
    #[strum(serialize = "/categories")]
    CategoriesLower,
    #[strum(serialize = "/CategoryDatas")]
    CategoryDatas,
    #[strum(serialize = "/categorydatas")]
    CategoryDatasLower,
    #[strum(serialize = "/CategoryColumns")]
    CategoryColumns,
    #[strum(serialize = "/assignment")]
    Assignment,
    #[strum(serialize = "/permissiondatas")]
    PermissionDatas,
    #[strum(serialize = "/permissiontask")]
    PermissionTask,
    #[strum(serialize = "/permission")]
    Permission,
    #[strum(serialize = "/permissiontaskselect")]
    PermissionTaskSelect,
}

impl ApiPrefix {
    /// The literal path segment, e.g. `"/users"`.
    pub fn path(self) -> &'static str { self.into() }

    /// Resolves a literal path against the prefix allow-list.
    pub fn from_path(path: &str) -> Option<Self> { Self::iter().find(|p| p.path() == path) }

    /// Strips this prefix from a route-table path, leaving the endpoint that a
    /// [`UrlModel`](super::url_model::UrlModel) built for this prefix appends.
    ///
    /// Returns `None` if `route` lives under another prefix.
    ///
    /// ```
    /// # use rest_injector::http_handler::api_constants::{ApiPrefix, permission_data};
    /// assert_eq!(ApiPrefix::PermissionDatas.relative(permission_data::CREATE_MULTIPLE), Some("createmulti"));
    /// assert_eq!(ApiPrefix::Users.relative(permission_data::CREATE_MULTIPLE), None);
    /// ```
    pub fn relative(self, route: &'static str) -> Option<&'static str> {
        let rest = route.strip_prefix(self.path())?;
        if rest.is_empty() {
            Some(rest)
        } else {
            rest.strip_prefix('/')
        }
    }
}

pub const LOGIN: &str = "/auth";
pub const TEST_AUTH: &str = "/values/get";
pub const USER_PERMISSION: &str = "/permission";

pub mod system {
    pub mod user {
        pub const CREATE: &str = "/users";
        pub const GET: &str = "/users";
        pub const GET_BY_ID: &str = "/users";
        pub const GET_BY_UNIT: &str = "/users/get-list-don-vi";
        pub const GET_USERS_BY_UNIT: &str = "/users/get-user-don-vi";
    }

    pub mod menu {
        pub const GET: &str = "/menus";
        pub const GET_BY_ID: &str = "/menus";
        pub const CREATE: &str = "/menus";
        pub const UPDATE: &str = "/menus";
        pub const DELETE: &str = "/menus";
    }

    pub mod role {
        pub const GET: &str = "/roles";
        pub const GET_BY_ID: &str = "/roles";
        pub const CREATE: &str = "/roles";
        pub const UPDATE: &str = "/roles";
        pub const DELETE: &str = "/roles";
    }
}

pub mod dynamic_form {
    pub const GET: &str = "/dynamic-form";
    pub const GET_BY_ID: &str = "/dynamic-form/";
    pub const CREATE: &str = "/dynamic-form";
    pub const UPDATE: &str = "/dynamic-form/";
    pub const DELETE: &str = "/dynamic-form/";
    pub const GET_BY_CONDITION: &str = "/dynamic-form/get-by-condition/";
    pub const EXPORT_SURVEY_WORD: &str = "/dynamic-form/export-word-phieukhaosat/";
    pub const EXPORT_SURVEY_PDF: &str = "/dynamic-form/export-pdf-phieukhaosat/";
}

pub mod categories {
    pub mod dynamic_category {
        pub const CATEGORY_CRUD: &str = "/Categories";
        pub const CATEGORY_DATA_CLONE: &str = "/CategoryDatas/clone-tree";
        pub const GET_BY_CODE: &str = "/Categories/get-by-code";
        pub const GET_DATA_SELECT: &str = "/Categories/get-data-select";
        pub const GET_ALL: &str = "/Categories/GetAll";

        pub const CATEGORY_COLUMN_CRUD: &str = "/CategoryColumns";
        pub const GET_COLUMN_BY_CATEGORY: &str = "/CategoryColumns/get-by-category";

        pub const CATEGORY_DATA_CRUD: &str = "/CategoryDatas";
        pub const GET_DATA_BY_CATEGORY: &str = "/CategoryDatas/get-by-category";
        pub const GET_CATEGORY_SELECT: &str = "/CategoryDatas/get-category-select";
        pub const GET_CATEGORY_TREE_BY_CODE: &str = "/CategoryDatas/get-data-tree";
        pub const GET_DATA_BY_CATEGORY_DATA: &str = "/categorydatas/get-by-category-data";
        /// Survey points ("điểm khảo sát").
        pub const CATEGORY_DATA_AT_RESEARCH_POINT: &str = "/categorydatas/get-data-tree-diemkhaosat";

        pub const DUP_CATEGORY_CRUD: &str = "/categories";
    }
}

pub mod assignment {
    pub const GET: &str = "/assignment";
    pub const CREATE: &str = "/assignment";
    pub const UPDATE: &str = "/assignment";
    pub const DELETE: &str = "/assignment";
    pub const GET_BY_ID: &str = "/assignment";
}

pub mod permission_data {
    pub const GET: &str = "/permissiondatas";
    pub const GET_DATA_TREE: &str = "/permissiondatas/get-data-tree";
    pub const CREATE: &str = "/permissiondatas";
    pub const CREATE_MULTIPLE: &str = "/permissiondatas/createmulti";
    pub const GET_USER_WITH_PERMISSION: &str = "/permissiondatas";
}

pub mod permission_task {
    pub const GET: &str = "/permissiontask";
    pub const GET_DATA_BY_RECORD: &str = "/permissiontask/get-data-by-record";
    pub const CREATE: &str = "/permissiontask";
}

pub mod business_selection {
    use std::fmt::Display;

    pub const PUT_FORM_CHILDREN: &str = "/permissiontask";

    pub fn get_parent(record_id: impl Display, loai: impl Display) -> String {
        format!("/permissiontask/{record_id}/get-method-tree/{loai}")
    }

    pub fn get_children(
        record_id: impl Display,
        form_code: impl Display,
        loai: impl Display,
    ) -> String {
        format!("/permissiontask/{record_id}/get-dynamic-field-by-loai/{form_code}/{loai}")
    }
}
