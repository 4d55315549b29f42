/// Marker trait for state snapshots.
///
/// `Default` is the initial snapshot; it lets owners move the current value
/// out with `std::mem::take` before handing it to a reducer.
pub trait UiState: Clone + PartialEq + Default + 'static {}
