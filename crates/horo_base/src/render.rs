//! Text rendering of a [`Report`].
//!
//! Color is applied per line through `colored`. With colors disabled the
//! output is the same text without escape codes, which is what tests match.

use colored::{Color, Colorize};

use crate::date::format_date;
use crate::report::Report;

/// Applies terminal styling, or passes text through when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    colors: bool,
}

impl Painter {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn paint_bold(&self, text: &str, color: Color) -> String {
        if self.colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Render the full report. Every line ends with `\n`.
pub fn render(report: &Report, painter: Painter) -> String {
    let sign = report.sign;
    let mut lines: Vec<String> = Vec::new();

    lines.push(painter.paint_bold(
        &format!(
            "Гороскоп для {} {} на {}:",
            sign.name(),
            sign.symbol(),
            format_date(report.date)
        ),
        Color::Cyan,
    ));
    lines.push(String::new());

    for p in &report.predictions {
        lines.push(format!("{}: {}", painter.paint(p.aspect.name(), Color::Yellow), p.text));
        lines.push(String::new());
    }

    lines.push(painter.paint(&format!("Счастливое число: {}", report.lucky_number), Color::Green));
    lines.push(painter.paint(&format!("Счастливый цвет: {}", report.lucky_color), Color::Green));
    lines.push(String::new());

    lines.push(painter.paint("Астрологическая карта:", Color::Magenta));
    for (label, s) in [
        ("Солнечный знак", sign),
        ("Асцендент", report.ascendant),
        ("Лунный знак", report.moon),
    ] {
        lines.push(painter.paint(
            &format!("{label}: {} {}", s.name(), s.symbol()),
            Color::Magenta,
        ));
    }
    lines.push(String::new());

    lines.push(painter.paint("Положение планет:", Color::Blue));
    for p in &report.placements {
        lines.push(painter.paint(
            &format!(
                "{} {}: {} {} ({:.2}°)",
                p.planet.name(),
                p.planet.symbol(),
                p.sign.name(),
                p.sign.symbol(),
                p.degrees
            ),
            Color::Blue,
        ));
    }
    lines.push(String::new());

    lines.push(painter.paint(
        &format!("Совместимость с Лунным знаком: {}", report.compatibility_percent()),
        Color::Red,
    ));
    lines.push(String::new());

    lines.push(painter.paint_bold(&format!("Совет дня: {}", report.advice), Color::White));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::Aspect;
    use crate::celestial::Planet;
    use crate::report::{AspectPrediction, Placement};
    use crate::zodiac::Sign;
    use chrono::NaiveDate;

    fn sample() -> Report {
        Report {
            sign: Sign::Cancer,
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            predictions: vec![AspectPrediction {
                aspect: Aspect::Love,
                text: "Сегодня Рак может ожидать неожиданных поворотов в любви.".to_string(),
            }],
            lucky_number: 42,
            lucky_color: "серебряный",
            ascendant: Sign::Leo,
            moon: Sign::Pisces,
            placements: vec![Placement {
                planet: Planet::Sun,
                sign: Sign::Aries,
                degrees: 12.3456,
            }],
            compatibility: 0.9,
            advice: "Сегодня хороший день для медитации и самопознания.".to_string(),
        }
    }

    #[test]
    fn plain_render_layout() {
        let text = render(&sample(), Painter::plain());
        let expected = "\
Гороскоп для Рак ♋ на 19.10.2026:

Любовь: Сегодня Рак может ожидать неожиданных поворотов в любви.

Счастливое число: 42
Счастливый цвет: серебряный

Астрологическая карта:
Солнечный знак: Рак ♋
Асцендент: Лев ♌
Лунный знак: Рыбы ♓

Положение планет:
Солнце ☉: Овен ♈ (12.35°)

Совместимость с Лунным знаком: 90.00%

Совет дня: Сегодня хороший день для медитации и самопознания.
";
        assert_eq!(text, expected);
    }

    #[test]
    fn plain_render_has_no_escapes() {
        let text = render(&sample(), Painter::plain());
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn colored_render_keeps_content() {
        colored::control::set_override(true);
        let text = render(&sample(), Painter::new(true));
        colored::control::unset_override();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("Совместимость с Лунным знаком: 90.00%"));
        assert!(text.contains("Счастливый цвет: серебряный"));
    }
}
