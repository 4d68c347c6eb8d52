//! Display formatting for amounts
//!
//! USD renders with two fraction digits, Riel as a whole number with
//! thousands grouping (the convention for KHR denominations).

pub fn usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn riel(amount: f64) -> String {
    format!("៛{}", group_thousands(amount.round() as i64))
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_has_two_decimals() {
        assert_eq!(usd(100.0), "$100.00");
        assert_eq!(usd(272.5), "$272.50");
        assert_eq!(usd(0.0), "$0.00");
    }

    #[test]
    fn riel_groups_thousands() {
        assert_eq!(riel(25000.0), "៛25,000");
        assert_eq!(riel(370300.0), "៛370,300");
        assert_eq!(riel(1500000.0), "៛1,500,000");
        assert_eq!(riel(500.0), "៛500");
        assert_eq!(riel(0.0), "៛0");
    }

    #[test]
    fn riel_rounds_fractions() {
        assert_eq!(riel(999.6), "៛1,000");
    }
}
