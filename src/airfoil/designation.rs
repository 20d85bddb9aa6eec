use crate::airfoil::generate::Naca4Digit;
use crate::errors::InvalidDesignation;
use std::str::FromStr;

/// Decodes a NACA 4 series designation such as "2412" into its generator parameters. The string
/// must consist of exactly four decimal digits; surrounding whitespace is not trimmed.
///
/// The decoded values are not range checked, so "0099" yields a 99% thick foil.
pub fn parse(designation: &str) -> Result<Naca4Digit, InvalidDesignation> {
    let chars: Vec<char> = designation.chars().collect();
    if chars.len() != 4 {
        return Err(InvalidDesignation::WrongLength { found: chars.len() });
    }

    let mut digits = [0u32; 4];
    for (index, c) in chars.iter().enumerate() {
        digits[index] = c
            .to_digit(10)
            .ok_or(InvalidDesignation::NotADigit { index, found: *c })?;
    }

    let m = f64::from(digits[0]) / 100.0;
    let p = f64::from(digits[1]) / 10.0;
    let t = f64::from(digits[2] * 10 + digits[3]) / 100.0;

    Ok(Naca4Digit::new(m, p, t))
}

impl FromStr for Naca4Digit {
    type Err = InvalidDesignation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case("2412", 0.02, 0.4, 0.12)]
    #[test_case("0012", 0.0, 0.0, 0.12)]
    #[test_case("4415", 0.04, 0.4, 0.15)]
    #[test_case("0099", 0.0, 0.0, 0.99)]
    #[test_case("9999", 0.09, 0.9, 0.99)]
    #[test_case("0000", 0.0, 0.0, 0.0)]
    fn test_decode(designation: &str, m: f64, p: f64, t: f64) {
        let naca = parse(designation).unwrap();
        assert_relative_eq!(m, naca.max_camber(), epsilon = 1e-12);
        assert_relative_eq!(p, naca.max_camber_chord(), epsilon = 1e-12);
        assert_relative_eq!(t, naca.t_max(), epsilon = 1e-12);
    }

    #[test_case("12"; "too short")]
    #[test_case("12a3"; "letter among digits")]
    #[test_case("abcd"; "all letters")]
    #[test_case(""; "empty")]
    #[test_case("12345"; "too long")]
    #[test_case(" 2412"; "leading space")]
    #[test_case("2412 "; "trailing space")]
    #[test_case("24.2"; "decimal point")]
    #[test_case("-412"; "sign")]
    fn test_rejected(designation: &str) {
        assert!(parse(designation).is_err());
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(
            InvalidDesignation::WrongLength { found: 5 },
            parse("12345").unwrap_err()
        );
        assert_eq!(
            InvalidDesignation::WrongLength { found: 0 },
            parse("").unwrap_err()
        );
        assert_eq!(
            InvalidDesignation::NotADigit {
                index: 2,
                found: 'a'
            },
            parse("12a3").unwrap_err()
        );
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert_eq!(
            InvalidDesignation::NotADigit {
                index: 0,
                found: '٢'
            },
            parse("٢412").unwrap_err()
        );
    }

    #[test]
    fn test_from_str() {
        let naca: Naca4Digit = "2412".parse().unwrap();
        assert_eq!(parse("2412").unwrap(), naca);
        assert_eq!("NACA 2412", naca.to_string());
        assert!("24x2".parse::<Naca4Digit>().is_err());
    }
}
