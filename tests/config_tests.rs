// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use skinflip::config::{Settings, write_default};
use skinflip::{CalcError, Currency, compute_profit};
use tempfile::tempdir;

fn write(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let p = dir.path().join("rates.json");
    std::fs::write(&p, body).unwrap();
    p
}

#[test]
fn file_overrides_merge_with_builtin_rates() {
    let dir = tempdir().unwrap();
    let p = write(
        &dir,
        r#"{"as_of": "2025-01-15", "fee_rate": "0.15", "rates": {"uah": "41.00"}}"#,
    );
    let s = Settings::from_file(&p).unwrap();
    assert_eq!(s.rates.rate(Currency::UAH), Decimal::new(4100, 2));
    assert_eq!(s.rates.rate(Currency::EUR), Decimal::new(92, 2));
    assert_eq!(s.rates.as_of().to_string(), "2025-01-15");
    assert_eq!(s.fee_rate, Decimal::new(15, 2));
    assert_eq!(s.source.as_deref(), Some(p.as_path()));

    let calc = s.calculator().unwrap();
    let r = calc.compute_profit("10", "410", Currency::UAH).unwrap();
    // 410 UAH = 10 USD, 8.50 after a 15% fee
    assert_eq!(r.proceeds_after_fee, Decimal::new(850, 2));
}

#[test]
fn empty_file_is_the_builtin_snapshot() {
    let dir = tempdir().unwrap();
    let p = write(&dir, "{}");
    let s = Settings::from_file(&p).unwrap();
    assert_eq!(s.rates, Settings::default().rates);
    assert_eq!(s.fee_rate, Settings::default().fee_rate);
}

#[test]
fn invalid_files_are_rejected() {
    let dir = tempdir().unwrap();
    for (body, expect) in [
        (r#"{"rates": {"JPY": "150"}}"#, Some(CalcError::UnknownCurrency("JPY".into()))),
        (r#"{"rates": {"USD": "2"}}"#, Some(CalcError::InvalidReferenceRate(Decimal::TWO))),
        (r#"{"rates": {"EUR": "-1"}}"#, None),
        (r#"{"fee_rate": "1.5"}"#, Some(CalcError::InvalidFeeRate(Decimal::new(15, 1)))),
        (r#"{"colour": "blue"}"#, None),
        ("not json", None),
    ] {
        let p = write(&dir, body);
        let err = Settings::from_file(&p).unwrap_err();
        if let Some(expect) = expect {
            assert_eq!(err.downcast_ref::<CalcError>(), Some(&expect), "{body}");
        }
    }
}

#[test]
fn explicit_missing_path_is_an_error() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("absent.json");
    assert!(Settings::load(Some(p.as_path())).is_err());
}

#[test]
fn init_writes_a_loadable_snapshot() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("nested").join("rates.json");
    write_default(&p, false).unwrap();
    assert!(write_default(&p, false).is_err());
    write_default(&p, true).unwrap();

    let s = Settings::load(Some(p.as_path())).unwrap();
    assert_eq!(s.rates, Settings::default().rates);

    let from_file = s.calculator().unwrap().compute_profit("20", "20", Currency::USD).unwrap();
    assert_eq!(from_file, compute_profit("20", "20", Currency::USD).unwrap());
}
