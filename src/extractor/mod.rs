//! Currency amount extraction
//!
//! Pulls USD and Cambodian Riel amounts out of free-form chat messages.
//! Two pattern tiers: bank-notification phrasing ("$272.50 paid by ...",
//! "Received 110,000 KHR") is checked first and wins outright for its
//! currency, then generic symbol/word patterns ($100, 100$, 100 USD,
//! ៛25,000, 25000 riel, ...) are scanned. When several generic candidates
//! match the same currency the largest one is kept — duplicate patterns
//! often hit the same literal amount, so summing would double count.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    // Bank transaction notifications. These messages carry extra numerals
    // (references, balances, fees); the phrase-anchored amount is the one
    // that matters.
    static ref USD_PAID_BY: Regex =
        Regex::new(r#"(?i)"?\$([0-9,]+(?:\.[0-9]{1,2})?)"?\s+paid\s+by"#).unwrap();
    static ref RIEL_PAID_BY: Regex =
        Regex::new(r#"(?i)"?៛([0-9,]+(?:\.[0-9]{1,2})?)"?\s+paid\s+by"#).unwrap();
    static ref RIEL_RECEIVED: Regex =
        Regex::new(r"(?i)received\s+([0-9,]+(?:\.[0-9]{1,2})?)\s+khr").unwrap();

    // Generic amount patterns: symbol-prefixed, symbol-suffixed,
    // word-suffixed, word-prefixed.
    static ref USD_PATTERNS: Vec<Regex> = [
        r"\$([0-9,]+(?:\.[0-9]{1,2})?)",
        r"([0-9,]+(?:\.[0-9]{1,2})?)\$",
        r"(?i)([0-9,]+(?:\.[0-9]{1,2})?)\s*(?:usd|dollars?)",
        r"(?i)usd\s*([0-9,]+(?:\.[0-9]{1,2})?)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();

    static ref RIEL_PATTERNS: Vec<Regex> = [
        r"៛([0-9,]+(?:\.[0-9]{1,2})?)",
        r"([0-9,]+(?:\.[0-9]{1,2})?)៛",
        r"(?i)([0-9,]+(?:\.[0-9]{1,2})?)\s*(?:khr|riels?)",
        r"(?i)(?:khr|riel)\s*([0-9,]+(?:\.[0-9]{1,2})?)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// Extract USD and Riel amounts from a message.
///
/// Returns `(usd, riel)`, each `0.0` when nothing was found. Total over any
/// input: a numeral that fails to parse is dropped, never reported. The two
/// currency passes are independent; a message can yield both, one or
/// neither.
pub fn extract_amounts(text: &str) -> (f64, f64) {
    let text = text.trim();
    if text.is_empty() {
        return (0.0, 0.0);
    }

    let usd = extract_usd(text);
    let riel = extract_riel(text);

    if usd > 0.0 || riel > 0.0 {
        debug!("Extracted amounts - USD: {:.2}, KHR: {:.2}", usd, riel);
    }

    (usd, riel)
}

fn extract_usd(text: &str) -> f64 {
    if let Some(caps) = USD_PAID_BY.captures(text) {
        if let Some(amount) = parse_candidate(&caps[1]) {
            debug!("Detected bank USD transaction: ${:.2}", amount);
            return amount;
        }
    }

    largest_match(text, &USD_PATTERNS)
}

fn extract_riel(text: &str) -> f64 {
    for anchored in [&*RIEL_PAID_BY, &*RIEL_RECEIVED] {
        if let Some(caps) = anchored.captures(text) {
            if let Some(amount) = parse_candidate(&caps[1]) {
                debug!("Detected bank KHR transaction: ៛{:.0}", amount);
                return amount;
            }
        }
    }

    largest_match(text, &RIEL_PATTERNS)
}

/// Scan every generic pattern and keep the largest candidate.
fn largest_match(text: &str, patterns: &[Regex]) -> f64 {
    let mut best = 0.0f64;
    for pattern in patterns {
        for caps in pattern.captures_iter(text) {
            if let Some(amount) = parse_candidate(&caps[1]) {
                best = best.max(amount);
            }
        }
    }
    best
}

/// Normalize a matched numeral: strip grouping commas, parse base-10.
/// Unparseable or non-positive values are discarded.
fn parse_candidate(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    let amount: f64 = cleaned.parse().ok()?;
    if amount > 0.0 && amount.is_finite() {
        Some(amount)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_input() {
        assert_eq!(extract_amounts(""), (0.0, 0.0));
        assert_eq!(extract_amounts("   \n\t  "), (0.0, 0.0));
    }

    #[test]
    fn plain_text_without_amounts() {
        assert_eq!(extract_amounts("see you at lunch tomorrow"), (0.0, 0.0));
    }

    #[test]
    fn currency_word_without_digits() {
        assert_eq!(
            extract_amounts("I'll pay in dollars, or maybe riel"),
            (0.0, 0.0)
        );
    }

    #[test]
    fn usd_symbol_prefixed() {
        assert_eq!(extract_amounts("$100"), (100.0, 0.0));
        assert_eq!(extract_amounts("paid $1,200.25 for rent"), (1200.25, 0.0));
    }

    #[test]
    fn usd_symbol_suffixed() {
        assert_eq!(extract_amounts("100$"), (100.0, 0.0));
        assert_eq!(extract_amounts("sent him 50.25$ yesterday"), (50.25, 0.0));
    }

    #[test]
    fn usd_word_forms() {
        assert_eq!(extract_amounts("100 USD"), (100.0, 0.0));
        assert_eq!(extract_amounts("USD 100"), (100.0, 0.0));
        assert_eq!(extract_amounts("100 dollars"), (100.0, 0.0));
        assert_eq!(extract_amounts("1 dollar"), (1.0, 0.0));
    }

    #[test]
    fn usd_word_case_insensitive() {
        assert_eq!(extract_amounts("100 USD"), extract_amounts("100 usd"));
        assert_eq!(extract_amounts("100 Usd"), (100.0, 0.0));
        assert_eq!(extract_amounts("usd 75"), (75.0, 0.0));
    }

    #[test]
    fn riel_symbol_forms() {
        assert_eq!(extract_amounts("៛25,000"), (0.0, 25000.0));
        assert_eq!(extract_amounts("25000៛"), (0.0, 25000.0));
    }

    #[test]
    fn riel_word_forms() {
        assert_eq!(extract_amounts("25000 KHR"), (0.0, 25000.0));
        assert_eq!(extract_amounts("25,000 riel"), (0.0, 25000.0));
        assert_eq!(extract_amounts("riel 25000"), (0.0, 25000.0));
        assert_eq!(extract_amounts("khr 10000"), (0.0, 10000.0));
    }

    #[test]
    fn both_currencies_in_one_message() {
        assert_eq!(extract_amounts("$50 ៛10000"), (50.0, 10000.0));
    }

    #[test]
    fn currency_passes_are_independent() {
        let (usd, riel) = extract_amounts("got ៛50,000 from dara");
        assert_eq!(usd, 0.0);
        assert_eq!(riel, 50000.0);

        let (usd, riel) = extract_amounts("lunch was $12.50");
        assert_eq!(usd, 12.5);
        assert_eq!(riel, 0.0);
    }

    #[test]
    fn bank_usd_notification_wins() {
        let text = "\"$272.50\" paid by SOK CHAN (*123) on Aug 24, 2026. \
                    Txn ID: 987654321. Balance: $1,024.88";
        assert_eq!(extract_amounts(text), (272.5, 0.0));
    }

    #[test]
    fn bank_usd_beats_larger_generic_amount() {
        // The anchored value wins even when a bigger numeral appears
        // elsewhere in the same message.
        let text = "$20.00 paid by VICHEA, previous balance $500";
        assert_eq!(extract_amounts(text), (20.0, 0.0));
    }

    #[test]
    fn bank_riel_paid_by() {
        let text = "\"៛370,300\" paid by CHANTHY (*881). Ref 112233";
        assert_eq!(extract_amounts(text), (0.0, 370300.0));
    }

    #[test]
    fn quoted_bank_amount_beats_balance_numeral() {
        // Bank apps quote the paid amount; the trailing balance is bigger
        // but must not win.
        let text = "\"៛370,300\" paid by CHANTHY (*881). Balance: ៛500,000";
        assert_eq!(extract_amounts(text), (0.0, 370300.0));

        let text = "\"$15.00\" paid by RATHA. Balance: $980.25";
        assert_eq!(extract_amounts(text), (15.0, 0.0));
    }

    #[test]
    fn bank_riel_received() {
        let text = "Received 110,000 KHR from 012 345 678, Trx. ID: 55667788";
        assert_eq!(extract_amounts(text), (0.0, 110000.0));
    }

    #[test]
    fn multiple_generic_amounts_take_maximum_not_sum() {
        assert_eq!(extract_amounts("$50 and $100"), (100.0, 0.0));
        assert_eq!(extract_amounts("៛5,000 then ៛20,000"), (0.0, 20000.0));
    }

    #[test]
    fn overlapping_patterns_do_not_double_count() {
        assert_eq!(extract_amounts("that's 100$ total"), (100.0, 0.0));
    }

    #[test]
    fn zero_amounts_are_ignored() {
        assert_eq!(extract_amounts("$0"), (0.0, 0.0));
        assert_eq!(extract_amounts("$0 and $25"), (25.0, 0.0));
    }

    #[test]
    fn malformed_grouping_is_comma_stripped() {
        // Best-effort normalization: "1,2" parses as 12.
        assert_eq!(extract_amounts("1,2$"), (12.0, 0.0));
    }

    #[test]
    fn grouped_thousands_with_fraction() {
        assert_eq!(extract_amounts("invoice came to $12,345.67"), (12345.67, 0.0));
    }

    #[test]
    fn idempotent_over_identical_input() {
        let text = "paid $35 and ៛8,000 at the market";
        assert_eq!(extract_amounts(text), extract_amounts(text));
        assert_eq!(extract_amounts(text), (35.0, 8000.0));
    }
}
