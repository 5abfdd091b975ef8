use core::fmt::{self, Display, Write};

use super::*;
use crate::options::{AlternateHandling, Decomposition, Strength};

/// строка правил, из которой получается та же последовательность правил и те же настройки
pub fn format_rules(settings: &RuleSettings, rules: &[TailoringRule]) -> String
{
    let mut tokens = setting_tokens(settings);
    tokens.extend(rules.iter().map(|rule| rule.to_string()));

    tokens.join(" ")
}

fn setting_tokens(settings: &RuleSettings) -> Vec<String>
{
    let mut tokens = vec![];

    if let Some(strength) = settings.strength {
        let value = match strength {
            Strength::Primary => "1",
            Strength::Secondary => "2",
            Strength::Tertiary => "3",
            Strength::Quaternary => "4",
            Strength::Identical => "I",
        };
        tokens.push(format!("[strength {}]", value));
    }

    if settings.french_collation == Some(true) {
        tokens.push("[backwards 2]".to_owned());
    }

    if let Some(alternate) = settings.alternate {
        tokens.push(match alternate {
            AlternateHandling::NonIgnorable => "[alternate non-ignorable]".to_owned(),
            AlternateHandling::Shifted => "[alternate shifted]".to_owned(),
        });
    }

    if let Some(case_level) = settings.case_level {
        tokens.push(format!("[caseLevel {}]", switch(case_level)));
    }

    if let Some(decomposition) = settings.decomposition {
        tokens.push(format!(
            "[normalization {}]",
            switch(decomposition == Decomposition::Canonical)
        ));
    }

    tokens
}

fn switch(value: bool) -> &'static str
{
    match value {
        true => "on",
        false => "off",
    }
}

/// текст операнда: буквы и цифры как есть, остальное - экранированием
fn write_text(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result
{
    for c in text.chars() {
        match c.is_alphanumeric() {
            true => f.write_char(c)?,
            false => match c as u32 {
                code @ 0 ..= 0xFFFF => write!(f, "\\u{:04X}", code)?,
                code => write!(f, "\\U{:08X}", code)?,
            },
        }
    }

    Ok(())
}

impl Display for TailoringRule
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::Reset { anchor, before, .. } => {
                f.write_char('&')?;

                if let Some(before) = before {
                    write!(f, "[before {}] ", *before as u8)?;
                }

                match anchor {
                    Anchor::Text(text) => write_text(f, text),
                    Anchor::Position(position) => write!(f, "[{}]", position.name()),
                }
            }
            Self::Relation {
                difference,
                prefix,
                chars,
                expansion,
                ..
            } => {
                write!(f, "{} ", difference.operator())?;

                if !prefix.is_empty() {
                    write_text(f, prefix)?;
                    f.write_char('|')?;
                }

                write_text(f, chars)?;

                if !expansion.is_empty() {
                    f.write_char('/')?;
                    write_text(f, expansion)?;
                }

                Ok(())
            }
        }
    }
}
