//! Generic identity passthrough

/// Return `id` unchanged, whatever its type
pub fn get_id<T>(id: T) -> T {
    id
}
