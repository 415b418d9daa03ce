// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use skinflip::{CalcError, Currency, RateTable};

#[test]
fn from_reference_and_back_is_within_rounding() {
    let t = RateTable::builtin();
    let tolerance = Decimal::new(1, 2);
    for amount in [Decimal::new(1234567, 4), Decimal::new(-42, 1), Decimal::new(1, 3)] {
        for ccy in Currency::ALL {
            let there = t.from_reference_value(amount, ccy).unwrap();
            let back = t.to_reference(there, ccy).unwrap();
            assert!(
                (back - amount).abs() <= tolerance,
                "{amount} via {ccy} came back as {back}"
            );
        }
    }
}

#[test]
fn usd_is_the_identity() {
    let t = RateTable::builtin();
    assert_eq!(
        t.to_reference_str("19.99", Currency::USD).unwrap(),
        Decimal::new(1999, 2)
    );
    assert_eq!(t.from_reference(Decimal::new(1999, 2), Currency::USD).unwrap(), "19.99");
}

#[test]
fn from_reference_always_has_two_digits() {
    let t = RateTable::builtin();
    assert_eq!(t.from_reference(Decimal::ONE, Currency::UAH).unwrap(), "38.92");
    assert_eq!(t.from_reference(Decimal::new(10, 0), Currency::RUB).unwrap(), "905.00");
    assert_eq!(t.from_reference(Decimal::ZERO, Currency::EUR).unwrap(), "0.00");
    // 0.5 * 0.79 = 0.395, half rounds away from zero
    assert_eq!(t.from_reference(Decimal::new(5, 1), Currency::GBP).unwrap(), "0.40");
    assert_eq!(t.from_reference(Decimal::new(-5, 1), Currency::GBP).unwrap(), "-0.40");
}

#[test]
fn string_conversion_is_strict() {
    let t = RateTable::builtin();
    assert!(matches!(
        t.to_reference_str("twelve", Currency::EUR),
        Err(CalcError::InvalidPrice { .. })
    ));
    assert_eq!(
        t.to_reference_str("92", Currency::EUR).unwrap(),
        Decimal::new(100, 0)
    );
}

#[test]
fn cross_conversion_goes_through_usd() {
    let t = RateTable::builtin();
    // 92 EUR = 100 USD = 3892 UAH
    let uah = t.convert(Decimal::new(92, 0), Currency::EUR, Currency::UAH).unwrap();
    assert_eq!(uah.round_dp(2), Decimal::new(389200, 2));
    let same = t.convert(Decimal::new(7, 0), Currency::RUB, Currency::RUB).unwrap();
    assert_eq!(same, Decimal::new(7, 0));
}

#[test]
fn currency_serializes_as_code() {
    assert_eq!(serde_json::to_string(&Currency::GBP).unwrap(), "\"GBP\"");
    let c: Currency = serde_json::from_str("\"RUB\"").unwrap();
    assert_eq!(c, Currency::RUB);
    assert_eq!(Currency::UAH.to_string(), "UAH");
}
