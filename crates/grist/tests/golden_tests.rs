//! Golden test: the full report text for a known input, byte for byte.

use std::io::Write;
use tempfile::NamedTempFile;

use grist::{BufferSink, Engine};

const INPUT: &str = "region,sales\nEast,100\nWest,200\nEast,50\n";

const EXPECTED: &str = "\
================================================================================
ANALYSIS RESULTS
================================================================================
Dataset: 3 records, 2 columns
Numeric columns: [sales]
Categorical columns: [region]

[NUMERIC METRICS SUMMARY]
--------------------------------------------------------------------------------

SALES:
  Count: 3
  Sum: $350.00
  Average: $116.67
  Min: $50.00
  Max: $200.00
  Median: $100.00
  Std Dev: $76.38

[SALES BY REGION]
--------------------------------------------------------------------------------
  West: Total: $200.00 | Avg: $200.00 (1 records)
  East: Total: $150.00 | Avg: $75.00 (2 records)

[DISTRIBUTION: REGION]
--------------------------------------------------------------------------------
  East: 2 records (66.7%)
  West: 1 records (33.3%)

[TOP 10 REGION BY SUM SALES]
--------------------------------------------------------------------------------
  1. West: $200.00
  2. East: $150.00

================================================================================
Analysis Complete!
================================================================================
";

#[test]
fn test_golden_sales_report() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(INPUT.as_bytes()).unwrap();

    let engine = Engine::new();
    let mut sink = BufferSink::new();
    let result = engine
        .run_with_sink(file.path().to_str().unwrap(), &mut sink)
        .unwrap();

    assert_eq!(result.rendered, EXPECTED);
    assert_eq!(sink.text, EXPECTED);
}
