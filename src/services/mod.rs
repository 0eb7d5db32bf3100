pub mod album_sync;
pub mod albums;
pub mod artists;
pub mod awards;
pub mod storage;

use std::fmt::Debug;

/// Collapse a backend result for page rendering: errors are logged and read
/// as "nothing there".
pub(crate) fn soft_fail<T: Default, E: Debug>(operation: &str, result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(operation, "Backend query failed: {:?}", e);
            T::default()
        }
    }
}
