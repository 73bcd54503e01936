use crate::Source;

/// Shared trimming loop for `View::normalized_to`, `Stream::normalized`, and
/// `ExchangeInt::succinct`
pub(crate) fn normalized_count<S: Source>(source: &S, floor: usize) -> usize {
    let fill = source.fill();
    let mut count = source.count();
    while count > floor {
        if source.get(count - 1) != fill {
            break
        }
        count -= 1;
    }
    count
}
