pub mod camps;
pub mod talks;
