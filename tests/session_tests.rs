// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use skinflip::commands::interactive;
use skinflip::{Calculator, CalculatorSession, Currency};

#[test]
fn session_defaults_to_uah_and_empty_inputs() {
    let s = CalculatorSession::default();
    assert_eq!(s.currency(), Currency::UAH);
    assert_eq!(s.source_price(), "");
    assert_eq!(s.target_price(), "");
    assert!(s.last_report().is_none());
}

#[test]
fn failed_calculation_keeps_previous_report() {
    let calc = Calculator::default();
    let mut s = CalculatorSession::default();
    s.set_source_price("10");
    s.set_target_price("500");
    let first = s.calculate(&calc).unwrap().clone();

    s.set_target_price("not a price");
    assert!(s.calculate(&calc).unwrap_err().is_validation());
    assert_eq!(s.last_report(), Some(&first));
}

#[test]
fn currency_change_recomputes_only_the_sale_side() {
    let calc = Calculator::default();
    let mut s = CalculatorSession::new(Currency::USD);
    s.set_source_price("10");
    s.set_target_price("20");
    let usd = s.calculate(&calc).unwrap().clone();
    s.set_currency(Currency::EUR);
    let eur = s.calculate(&calc).unwrap().clone();
    assert_eq!(usd.source_price_usd, eur.source_price_usd);
    assert_eq!(eur.currency, Currency::EUR);
    assert!(eur.target_price_usd > usd.target_price_usd);
}

#[test]
fn clear_resets_everything_but_currency() {
    let calc = Calculator::default();
    let mut s = CalculatorSession::new(Currency::GBP);
    s.set_source_price("1");
    s.set_target_price("2");
    s.calculate(&calc).unwrap();
    s.clear();
    assert_eq!(s.source_price(), "");
    assert!(s.last_report().is_none());
    assert_eq!(s.currency(), Currency::GBP);
}

#[test]
fn interactive_form_drives_the_session() {
    let calc = Calculator::default();
    let mut s = CalculatorSession::default();
    let input = "buy 10\nsell 500\ncurrency uah\ncalc\nsell abc\ncalc\ncurrency JPY\nshow\nfrobnicate\nquit\nbuy 99\n";
    let mut out = Vec::new();
    interactive::run(&calc, &mut s, input.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("11.77%"), "{out}");
    assert!(out.contains("45.80"), "{out}");
    assert!(out.contains("error: invalid price input"), "{out}");
    assert!(out.contains("error: unknown currency 'JPY'"), "{out}");
    assert!(out.contains("unknown command 'frobnicate'"), "{out}");
    assert!(out.contains("buy=\"10\" sell=\"abc\" currency=UAH"), "{out}");

    // nothing after quit is read
    assert_eq!(s.source_price(), "10");
    let report = s.last_report().unwrap();
    assert_eq!(report.formatted().instant_sale.profit_usd, "1.18");
}
