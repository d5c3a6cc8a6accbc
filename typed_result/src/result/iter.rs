//! Collecting many results into one.

use super::TypedResult;

/// Collects success payloads into `C`, stopping at the first failure.
///
/// The first failure is returned unchanged and the rest of the iterator is
/// not consumed.
///
/// ```
/// use typed_result::{NotFound, TypedResult};
///
/// let all: TypedResult<Vec<u8>> = [TypedResult::success(1_u8), TypedResult::success(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all, TypedResult::success(vec![1, 2]));
///
/// let first_miss: TypedResult<Vec<u8>> = [
///     TypedResult::success(1_u8),
///     TypedResult::failure(NotFound::new("no 2")),
///     TypedResult::failure(NotFound::new("no 3")),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(first_miss.message(), Some("no 2"));
/// ```
impl<T, F, C> FromIterator<TypedResult<T, F>> for TypedResult<C, F>
where
    C: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = TypedResult<T, F>>,
    {
        iter.into_iter()
            .map(Result::from)
            .collect::<Result<C, F>>()
            .into()
    }
}
