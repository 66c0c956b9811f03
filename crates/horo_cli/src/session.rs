//! Interactive prompt loop.
//!
//! Reads birth dates line by line, prints one report per valid date and asks
//! whether to continue. A malformed date is reported and the prompt repeats.
//! Only the answer "да" continues; anything else, or end of input, ends the
//! session with a closing line.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use colored::Color;
use horo_base::{HoroscopeGenerator, Painter, parse_date, render};
use rand::Rng;

/// Width of the `=` rule printed around each report.
pub const SEPARATOR_WIDTH: usize = 50;

const AFFIRMATIVE: &str = "да";

const WELCOME: &str = "Добро пожаловать в продвинутый генератор гороскопов!";
const DATE_PROMPT: &str = "Введите вашу дату рождения (ДД.ММ.ГГГГ): ";
const DATE_ERROR: &str = "Ошибка: Пожалуйста, введите дату в формате ДД.ММ.ГГГГ";
const AGAIN_PROMPT: &str = "Хотите сгенерировать еще один гороскоп? (да/нет): ";
const FAREWELL: &str = "Спасибо за использование продвинутого генератора гороскопов!";

pub struct Session<G: Rng> {
    generator: HoroscopeGenerator,
    rng: G,
    painter: Painter,
    /// Fixed report date; `None` means the local date at generation time.
    today: Option<NaiveDate>,
}

impl<G: Rng> Session<G> {
    pub fn new(
        generator: HoroscopeGenerator,
        rng: G,
        painter: Painter,
        today: Option<NaiveDate>,
    ) -> Self {
        Self {
            generator,
            rng,
            painter,
            today,
        }
    }

    /// Run until the user declines or input ends. Returns the number of
    /// reports printed.
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, out: &mut O) -> io::Result<usize> {
        writeln!(out, "{}", self.painter.paint_bold(WELCOME, Color::Cyan))?;
        let mut printed = 0;

        loop {
            write!(out, "{}", self.painter.paint(DATE_PROMPT, Color::Green))?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                writeln!(out)?;
                break;
            };

            let birth = match parse_date(&line) {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(error = %e, "rejected birth date");
                    writeln!(out, "{}", self.painter.paint(DATE_ERROR, Color::Red))?;
                    continue;
                }
            };

            self.print_report(birth, out)?;
            printed += 1;

            write!(out, "{}", self.painter.paint(AGAIN_PROMPT, Color::Yellow))?;
            out.flush()?;
            let answer = read_line(input)?.unwrap_or_default();
            if !is_affirmative(&answer) {
                break;
            }
        }

        writeln!(out, "{}", self.painter.paint_bold(FAREWELL, Color::Magenta))?;
        tracing::info!(reports = printed, "session finished");
        Ok(printed)
    }

    /// Generate and print one report framed by separator rules.
    pub fn print_report<O: Write>(&mut self, birth: NaiveDate, out: &mut O) -> io::Result<()> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let report = self.generator.generate(birth, today, &mut self.rng);
        let rule = "=".repeat(SEPARATOR_WIDTH);
        writeln!(out, "\n{rule}\n")?;
        writeln!(out, "{}", render(&report, self.painter))?;
        writeln!(out, "{rule}\n")?;
        Ok(())
    }
}

/// `None` at end of input.
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// Case-insensitive match against "да" after trimming.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == AFFIRMATIVE
}
