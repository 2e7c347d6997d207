//! Error types for [`OrderedMap`](crate::ordered::OrderedMap) operations.
//!
//! Only one operation can fail on its own: folding an empty map without a
//! seed. Failures raised by caller-supplied closures are never wrapped; see
//! [`OrderedMap::try_fold`](crate::ordered::OrderedMap::try_fold).

/// Represents an operation that is not defined for the container's
/// current state.
///
/// # Examples
///
/// ```rust
/// use extended_map::error::InvalidOperationError;
///
/// let error = InvalidOperationError {
///     type_name: "OrderedMap",
///     method_name: "reduce",
///     reason: "cannot reduce empty container without a seed",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "OrderedMap::reduce: cannot reduce empty container without a seed"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{type_name}::{method_name}: {reason}")]
pub struct InvalidOperationError {
    /// The name of the container type.
    pub type_name: &'static str,
    /// The name of the method that was called.
    pub method_name: &'static str,
    /// Why the call is not defined.
    pub reason: &'static str,
}

/// Errors produced by [`OrderedMap`](crate::ordered::OrderedMap).
///
/// # Examples
///
/// ```rust
/// use extended_map::error::OrderedMapError;
/// use extended_map::ordered::OrderedMap;
///
/// let empty: OrderedMap<&str, i32> = OrderedMap::new();
/// let result = empty.reduce(|accumulator, value| accumulator + value);
/// assert!(matches!(result, Err(OrderedMapError::InvalidOperation(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderedMapError {
    /// The operation is not defined for the map's current state.
    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperationError),
}

impl OrderedMapError {
    pub(crate) const fn empty_reduce() -> Self {
        Self::InvalidOperation(InvalidOperationError {
            type_name: "OrderedMap",
            method_name: "reduce",
            reason: "cannot reduce empty container without a seed",
        })
    }
}
