//! Base-N midpoint arithmetic on digit arrays.
//!
//! A key is read as a big-endian fraction in base `radix`: digit `i` has weight
//! `radix^-(i+1)`. The midpoint of two keys is computed in three steps:
//! - **Addition**: Long addition with both operands aligned at the radix point.
//! - **Halving**: Long division by two, most significant digit first.
//! - **Normalization**: Trailing zeros are dropped and the carry shift is undone.
//!
//! The main entry point is [`midpoint`].

/// Adds two fractions.
///
/// The shorter operand is padded with zero digits on the right. A carry out of the
/// most significant position is prepended as a new digit, and the returned shift is
/// the number of digits the sum moved up (0 or 1).
pub(crate) fn add(a: &[u8], b: &[u8], radix: u32) -> (Vec<u8>, usize) {
    let len = a.len().max(b.len());
    let mut sum = vec![0u8; len];
    let mut carry = 0u32;

    for i in (0..len).rev() {
        let total = digit_at(a, i) + digit_at(b, i) + carry;
        sum[i] = (total % radix) as u8;
        carry = total / radix;
    }

    if carry > 0 {
        sum.insert(0, carry as u8);
        return (sum, 1);
    }
    (sum, 0)
}

/// Divides a fraction by two.
///
/// An odd final remainder is emitted as one extra trailing digit, `radix / 2`
/// (exact for even radixes, rounded down for odd ones).
pub(crate) fn halve(digits: &[u8], radix: u32) -> Vec<u8> {
    let mut quotient = Vec::with_capacity(digits.len() + 1);
    let mut remainder = 0u32;

    for &digit in digits {
        let value = remainder * radix + digit as u32;
        quotient.push((value / 2) as u8);
        remainder = value % 2;
    }

    if remainder > 0 {
        quotient.push((remainder * radix / 2) as u8);
    }
    quotient
}

/// Returns the digits of `(a + b) / 2`.
///
/// The result carries no trailing zero digits. It is empty only when both inputs
/// are zero.
pub(crate) fn midpoint(a: &[u8], b: &[u8], radix: u32) -> Vec<u8> {
    let (sum, shift) = add(a, b, radix);
    let mut quotient = halve(&sum, radix);

    // Trailing zeros add no magnitude.
    while quotient.last() == Some(&0) {
        quotient.pop();
    }

    // The carry digit of the sum always halves to a leading zero.
    let shift = shift.min(quotient.len());
    quotient.drain(..shift);
    quotient
}

#[inline(always)]
fn digit_at(digits: &[u8], index: usize) -> u32 {
    digits.get(index).copied().unwrap_or(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_without_carry() {
        assert_eq!(add(&[1, 2], &[3], 10), (vec![4, 2], 0));
        assert_eq!(add(&[0], &[63], 64), (vec![63], 0));
    }

    #[test]
    fn test_add_pads_on_the_right() {
        // 0.31 32 + 0.63 in base 64
        assert_eq!(add(&[31, 32], &[63], 64), (vec![1, 30, 32], 1));
    }

    #[test]
    fn test_add_carries_through_every_digit() {
        assert_eq!(add(&[9, 9, 9], &[0, 0, 1], 10), (vec![1, 0, 0, 0], 1));
    }

    #[test]
    fn test_halve_even_and_odd() {
        assert_eq!(halve(&[8], 10), vec![4]);
        assert_eq!(halve(&[63], 64), vec![31, 32]);
        assert_eq!(halve(&[1, 4], 11), vec![0, 7, 5]);
    }

    #[test]
    fn test_halve_odd_radix_rounds_extra_digit_down() {
        // 0.1 in base 3 halved: remainder 1 becomes 3 / 2 = 1.
        assert_eq!(halve(&[1], 3), vec![0, 1]);
    }

    #[test]
    fn test_midpoint_examples() {
        // base 64: "UV" and "jF" meet at "bN"
        assert_eq!(midpoint(&[31, 32], &[47, 16], 64), vec![39, 24]);
        // base 11: "4" and "64" meet at "514"
        assert_eq!(midpoint(&[5], &[7, 5], 11), vec![6, 2, 5]);
    }

    #[test]
    fn test_midpoint_strips_trailing_zeros() {
        assert_eq!(midpoint(&[2, 0], &[4, 0, 0], 10), vec![3]);
    }

    #[test]
    fn test_midpoint_of_zeros_is_empty() {
        assert!(midpoint(&[0], &[0, 0], 10).is_empty());
    }
}
