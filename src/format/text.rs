use std::fmt::Display;

/// Joins values with `","` (or `", "` when `space` is set), trimming any
/// trailing whitespace.
///
/// Values are not escaped: an element whose text contains the separator
/// produces ambiguous output.
pub fn join_numeric<I>(items: I, space: bool) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let sep = if space { ", " } else { "," };
    let joined = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(sep);
    joined.trim_end().to_owned()
}

/// Renders a flat `[w0, h0, w1, h1, ...]` anchor list as `"w0,h0, w1,h1"`.
///
/// Pair `i` is elements `2i` and `2i + 1`. A trailing odd element has no
/// partner and is dropped.
pub fn format_anchor_pairs(anchors: &[u32]) -> String {
    anchors
        .chunks_exact(2)
        .map(|pair| format!("{},{}", pair[0], pair[1]))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Shortest round-trip text for a real value, always keeping a fractional
/// part (`1.0` stays `"1.0"`, `0.1` stays `"0.1"`).
pub fn real(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_space() {
        assert_eq!(join_numeric([1, 2, 3], false), "1,2,3");
    }

    #[test]
    fn joins_with_space() {
        assert_eq!(join_numeric([1, 2, 3], true), "1, 2, 3");
    }

    #[test]
    fn join_of_nothing_is_empty() {
        assert_eq!(join_numeric(Vec::<u32>::new(), true), "");
    }

    #[test]
    fn join_trims_trailing_whitespace() {
        assert_eq!(join_numeric(["a", "b "], false), "a,b");
    }

    #[test]
    fn anchors_render_as_pairs() {
        assert_eq!(format_anchor_pairs(&[10, 13, 16, 30, 33, 23]), "10,13, 16,30, 33,23");
    }

    #[test]
    fn odd_anchor_count_drops_last_element() {
        let anchors = [10, 13, 16, 30, 33, 23, 30, 61, 62];
        assert_eq!(format_anchor_pairs(&anchors), "10,13, 16,30, 33,23, 30,61");
    }

    #[test]
    fn two_pairs_are_both_kept() {
        assert_eq!(format_anchor_pairs(&[1, 2, 3, 4]), "1,2, 3,4");
    }

    #[test]
    fn reals_keep_a_fraction() {
        assert_eq!(real(1.0), "1.0");
        assert_eq!(real(0.1), "0.1");
        assert_eq!(real(0.0005), "0.0005");
        assert_eq!(real(1.5), "1.5");
    }
}
