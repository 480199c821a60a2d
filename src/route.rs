//! Routes and cyclic tour cost.

use crate::distance::DistanceMatrix;

/// A tour: a permutation of city indices. Position 0 is the fixed start.
pub type Route = Vec<usize>;

/// Cyclic length of `route` under `matrix`, including the closing edge
/// back to `route[0]`.
#[inline]
pub fn route_cost(route: &[usize], matrix: &DistanceMatrix) -> f64 {
    let Some(&first) = route.first() else {
        return 0.0;
    };
    let open: f64 = route
        .windows(2)
        .map(|w| matrix.get(w[0], w[1]))
        .sum();
    open + matrix.get(route[route.len() - 1], first)
}

/// The identity tour `0, 1, ..., n-1`.
pub fn identity_route(n: usize) -> Route {
    (0..n).collect()
}

/// Whether `route` visits each of `0..n` exactly once.
pub fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in route {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::City;

    fn square_matrix() -> DistanceMatrix {
        DistanceMatrix::euclidean(&[
            City::new(0.0, 0.0),
            City::new(0.0, 1.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
        ])
    }

    #[test]
    fn test_square_perimeter() {
        let m = square_matrix();
        assert_eq!(route_cost(&[0, 1, 2, 3], &m), 4.0);
    }

    #[test]
    fn test_crossed_tour_is_longer() {
        let m = square_matrix();
        let crossed = route_cost(&[0, 2, 1, 3], &m);
        assert!((crossed - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_two_city_round_trip() {
        let m = DistanceMatrix::euclidean(&[City::new(0.0, 0.0), City::new(3.0, 4.0)]);
        assert_eq!(route_cost(&[0, 1], &m), 10.0);
    }

    #[test]
    fn test_empty_route() {
        let m = square_matrix();
        assert_eq!(route_cost(&[], &m), 0.0);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&identity_route(5), 5));
        assert!(is_permutation(&[0, 3, 1, 2], 4));
        assert!(!is_permutation(&[0, 1, 1, 2], 4));
        assert!(!is_permutation(&[0, 1, 4], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }
}
