//! End-to-end tests: birth date to rendered report.
//!
//! Uses a seeded ChaCha RNG so every run draws the same values.

use chrono::NaiveDate;
use horo_base::{
    ALL_ASPECTS, HoroscopeGenerator, Painter, Sign, parse_date, render, sign_for_date,
};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Extract the `NN.NN` in front of the `%` on the compatibility line.
fn compatibility_value(text: &str) -> f64 {
    let line = text
        .lines()
        .find(|l| l.starts_with("Совместимость"))
        .expect("compatibility line");
    let pct = line.rsplit(' ').next().unwrap();
    assert!(pct.ends_with('%'), "{line}");
    let number = pct.trim_end_matches('%');
    let (_, frac) = number.split_once('.').expect("decimal point");
    assert_eq!(frac.len(), 2, "{line}");
    number.parse().unwrap()
}

#[test]
fn cancer_report_end_to_end() {
    let birth = parse_date("04.07.1990").unwrap();
    assert_eq!(sign_for_date(birth), Sign::Cancer);

    let generator = HoroscopeGenerator::default();
    let mut rng = ChaChaRng::seed_from_u64(1990);
    let report = generator.generate(birth, today(), &mut rng);
    let text = render(&report, Painter::plain());

    assert!(text.starts_with("Гороскоп для Рак ♋ на 19.10.2026:"));
    assert!(text.contains("Счастливый цвет: серебряный"));
    assert!(text.contains("Солнечный знак: Рак ♋"));
    let pct = compatibility_value(&text);
    assert!((50.0..=100.0).contains(&pct), "{pct}");
}

#[test]
fn report_sections_in_order() {
    let generator = HoroscopeGenerator::default();
    let mut rng = ChaChaRng::seed_from_u64(3);
    let report = generator.generate(parse_date("15.01.1984").unwrap(), today(), &mut rng);
    let text = render(&report, Painter::plain());

    let mut markers: Vec<&str> = vec!["Гороскоп для Козерог"];
    markers.extend(ALL_ASPECTS.iter().map(|a| a.name()));
    markers.extend([
        "Счастливое число:",
        "Счастливый цвет:",
        "Астрологическая карта:",
        "Солнечный знак:",
        "Асцендент:",
        "Лунный знак:",
        "Положение планет:",
        "Совместимость с Лунным знаком:",
        "Совет дня:",
    ]);
    let mut from = 0;
    for m in markers {
        let at = text[from..].find(m).unwrap_or_else(|| panic!("{m} missing after {from}"));
        from += at + m.len();
    }
}

#[test]
fn ten_planet_lines() {
    let generator = HoroscopeGenerator::default();
    let mut rng = ChaChaRng::seed_from_u64(12);
    let report = generator.generate(parse_date("01.05.2001").unwrap(), today(), &mut rng);
    let text = render(&report, Painter::plain());
    let n = text.lines().filter(|l| l.ends_with("°)")).count();
    assert_eq!(n, 10);
}

#[test]
fn lucky_number_and_compatibility_bounds_over_many_runs() {
    let generator = HoroscopeGenerator::default();
    let mut rng = ChaChaRng::seed_from_u64(555);
    for day in 1..=28 {
        for month in 1..=12 {
            let birth = NaiveDate::from_ymd_opt(1970 + day as i32, month, day).unwrap();
            let report = generator.generate(birth, today(), &mut rng);
            assert!((1..=100).contains(&report.lucky_number));
            assert!((0.0..=1.0).contains(&report.compatibility));
            for p in &report.placements {
                assert!((0.0..360.0).contains(&p.degrees));
            }
        }
    }
}
