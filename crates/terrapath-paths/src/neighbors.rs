use terrapath_core::Point;

/// The four allowed moves, in expansion order: down, up, right, left.
pub(crate) const DIRS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal (4-way) neighbors of a grid point, filtered by a
/// predicate, reusing one small buffer across calls.
pub(crate) struct Neighbors {
    buf: Vec<Point>,
}

impl Neighbors {
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub(crate) fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in DIRS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_keeps_expansion_order() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::new(5, 5), |_| true).to_vec();
        assert_eq!(
            got,
            vec![
                Point::new(5, 6),
                Point::new(5, 4),
                Point::new(6, 5),
                Point::new(4, 5),
            ]
        );
    }

    #[test]
    fn cardinal_filters() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::ZERO, |p| p.x >= 0 && p.y >= 0);
        assert_eq!(got, &[Point::new(0, 1), Point::new(1, 0)]);
    }
}
