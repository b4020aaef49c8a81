//! Static HTML pages.
//!
//! Each page type renders its entries to fragments, orders them newest
//! first, and wraps them in the shared [`page::PageTemplate`].

pub mod diary;
pub mod markdown;
pub mod page;
pub mod review;
pub mod transcript;

/// Sort newest first by a date key.
///
/// The sort is stable, so entries with equal dates keep their input order.
/// String dates compare lexicographically, which is correct for zero-padded
/// ISO dates.
pub fn sort_newest_first<T, K: Ord>(items: &mut [T], date: impl Fn(&T) -> K) {
    items.sort_by(|a, b| date(b).cmp(&date(a)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_newest_first() {
        let mut dates = vec!["2024-01-01", "2024-03-01", "2024-02-01"];
        sort_newest_first(&mut dates, |d| *d);
        assert_eq!(dates, ["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut items = vec![("2024-01-01", 'a'), ("2024-01-01", 'b'), ("", 'c')];
        sort_newest_first(&mut items, |(d, _)| *d);
        let order: Vec<_> = items.iter().map(|(_, c)| *c).collect();
        assert_eq!(order, ['a', 'b', 'c']);
    }
}
