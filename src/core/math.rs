/// Two-integer sum with Rust's default fixed-width signed semantics.
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_fixed_operands() {
        assert_eq!(add(10, 20), 30);
    }

    #[test]
    fn test_add_is_commutative() {
        for (a, b) in [(10, 20), (-5, 7), (0, 0), (i32::MAX, 0)] {
            assert_eq!(add(a, b), add(b, a));
            assert_eq!(add(a, b), a + b);
        }
    }
}
