//! # Output Rendering
//!
//! Turns a computed split into the three output shapes:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  text  - the human Results block                                        │
//! │  json  - one record, money as exact 2-decimal strings                   │
//! │  csv   - one header + one row, list fields joined with ';'              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Money renders with a fixed `$` in text mode and as bare `D.CC` strings in
//! the machine-readable modes. Display strings never feed back into the
//! calculation pipeline.

use serde::Serialize;
use tipsplit_core::{Money, SplitRequest, SplitResult};

/// Bare exact 2-decimal rendering ("113.22") for the export record.
pub fn money_string(amount: Money) -> String {
    format!("{}.{:02}", amount.dollars(), amount.cents_part())
}

// =============================================================================
// Text
// =============================================================================

/// Renders the human-readable Results block.
pub fn render_text(request: &SplitRequest, result: &SplitResult) -> String {
    let before_tip = request.subtotal_before_tax + request.tax_amount;

    let mut lines = vec![
        "--- Results ---".to_string(),
        format!("Subtotal (pre-tax): {}", request.subtotal_before_tax),
        format!("Tax: {}", request.tax_amount),
        format!("Total before tip: {before_tip}"),
        format!(
            "Tip ({} at {}%): {}",
            request.tip_basis.label(),
            request.tip_percent,
            result.tip
        ),
        format!("Total with tip: {}", result.grand_total),
        format!(
            "Breakdown: {} + {} + {} = {}",
            request.subtotal_before_tax, request.tax_amount, result.tip, result.grand_total
        ),
    ];

    if let [sole] = result.per_person.as_slice() {
        lines.push(format!("Each person pays: {sole}"));
    } else {
        let shares = result
            .per_person
            .iter()
            .map(|share| share.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Each person pays: {shares}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

// =============================================================================
// Export Record
// =============================================================================

/// Flat record for the machine-readable output modes.
#[derive(Debug, Clone, Serialize)]
pub struct SplitRecord {
    pub tip_basis: &'static str,
    pub subtotal_before_tax: String,
    pub tax_amount: String,
    pub tip_percent: String,
    pub tip: String,
    pub grand_total: String,
    pub people: usize,
    pub weights: Vec<String>,
    pub per_person: Vec<String>,
    pub rounding_mode: &'static str,
    pub granularity: &'static str,
}

impl SplitRecord {
    pub fn new(request: &SplitRequest, result: &SplitResult) -> Self {
        SplitRecord {
            tip_basis: request.tip_basis.label(),
            subtotal_before_tax: money_string(request.subtotal_before_tax),
            tax_amount: money_string(request.tax_amount),
            tip_percent: request.tip_percent.to_string(),
            tip: money_string(result.tip),
            grand_total: money_string(result.grand_total),
            people: request.people(),
            weights: request
                .weights
                .iter()
                .map(|w| w.normalize().to_string())
                .collect(),
            per_person: result.per_person.iter().copied().map(money_string).collect(),
            rounding_mode: request.rounding_mode.as_str(),
            granularity: request.granularity.as_str(),
        }
    }
}

/// JSON record, pretty-printed.
pub fn render_json(record: &SplitRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

/// CSV with one header and one row. The list fields (weights, per-person
/// shares) are joined with ';' so the row stays flat.
pub fn render_csv(record: &SplitRecord) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "tip_basis",
        "subtotal_before_tax",
        "tax_amount",
        "tip_percent",
        "tip",
        "grand_total",
        "people",
        "weights",
        "per_person",
        "rounding_mode",
        "granularity",
    ])?;
    let people = record.people.to_string();
    let weights = record.weights.join(";");
    let per_person = record.per_person.join(";");
    writer.write_record([
        record.tip_basis,
        record.subtotal_before_tax.as_str(),
        record.tax_amount.as_str(),
        record.tip_percent.as_str(),
        record.tip.as_str(),
        record.grand_total.as_str(),
        people.as_str(),
        weights.as_str(),
        per_person.as_str(),
        record.rounding_mode,
        record.granularity,
    ])?;

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(std::io::Error::other(err.to_string())))?;
    // The writer only ever sees UTF-8 strings
    String::from_utf8(bytes)
        .map_err(|err| csv::Error::from(std::io::Error::other(err.to_string())))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tipsplit_core::{Granularity, RoundingMode, TipBasis, TipPercent};

    fn sample() -> (SplitRequest, SplitResult) {
        let request = SplitRequest::even(
            Money::from_cents(11322),
            Money::from_cents(1023),
            TipPercent::from_bps(1800),
            TipBasis::PreTax,
            3,
            RoundingMode::Nearest,
            Granularity::Cent,
        );
        let result = request.compute().unwrap();
        (request, result)
    }

    #[test]
    fn test_render_text_block() {
        let (request, result) = sample();
        let text = render_text(&request, &result);

        assert!(text.starts_with("--- Results ---\n"));
        assert!(text.contains("Subtotal (pre-tax): $113.22"));
        assert!(text.contains("Tip (pre-tax at 18%): $20.38"));
        assert!(text.contains("Total with tip: $143.83"));
        assert!(text.contains("Breakdown: $113.22 + $10.23 + $20.38 = $143.83"));
        assert!(text.contains("Each person pays: $47.94, $47.94, $47.95"));
    }

    #[test]
    fn test_render_text_single_person() {
        let request = SplitRequest::even(
            Money::from_cents(10000),
            Money::zero(),
            TipPercent::from_bps(2000),
            TipBasis::PreTax,
            1,
            RoundingMode::Nearest,
            Granularity::Cent,
        );
        let result = request.compute().unwrap();
        let text = render_text(&request, &result);
        assert!(text.contains("Each person pays: $120.00"));
    }

    #[test]
    fn test_render_json_record() {
        let (request, result) = sample();
        let record = SplitRecord::new(&request, &result);
        let json = render_json(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["tip_basis"], "pre-tax");
        assert_eq!(value["subtotal_before_tax"], "113.22");
        assert_eq!(value["tip"], "20.38");
        assert_eq!(value["grand_total"], "143.83");
        assert_eq!(value["people"], 3);
        assert_eq!(value["per_person"][2], "47.95");
    }

    #[test]
    fn test_render_csv_record() {
        let request = SplitRequest::weighted(
            Money::from_cents(12345),
            Money::zero(),
            TipPercent::zero(),
            TipBasis::PreTax,
            vec![Decimal::from(2), Decimal::ONE, Decimal::ONE],
        );
        let result = request.compute().unwrap();
        let record = SplitRecord::new(&request, &result);
        let csv = render_csv(&record).unwrap();

        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("tip_basis,"));
        let row = lines.next().unwrap();
        assert!(row.contains("2;1;1"));
        assert!(row.contains("61.73;30.86;30.86"));
        assert!(lines.next().is_none());
    }
}
