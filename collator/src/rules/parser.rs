use super::*;
use crate::error::RuleSyntaxError;
use crate::options::{AlternateHandling, Decomposition, Strength};

/// разобрать строку правил
///
/// разбор не зависит от таблицы: проверить, существует ли элемент, на который делается сброс,
/// можно только при применении правил
pub fn parse_rules(source: &str) -> Result<ParsedRules>
{
    Parser::new(source).parse()
}

/// символы ASCII, имеющие значение в синтаксисе правил
const OPERATORS: &[char] = &['&', '<', ';', ',', '=', '/', '|', '[', ']', '@', '*'];

/// ASCII-пунктуация вне кавычек: либо оператор, либо ошибка
#[inline(always)]
fn is_syntax_char(c: char) -> bool
{
    c.is_ascii_punctuation()
}

type Result<T> = core::result::Result<T, RuleSyntaxError>;

struct Parser
{
    chars: Vec<char>,
    pos: usize,
    result: ParsedRules,
    has_reset: bool,
}

impl Parser
{
    fn new(source: &str) -> Self
    {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            result: ParsedRules::default(),
            has_reset: false,
        }
    }

    fn parse(mut self) -> Result<ParsedRules>
    {
        loop {
            self.skip_whitespace();

            let Some(c) = self.peek() else {
                break;
            };
            let offset = self.pos;

            match c {
                '&' => {
                    self.pos += 1;
                    self.parse_reset(offset)?;
                }
                '<' | ';' | ',' | '=' => self.parse_relation(offset)?,
                '[' => self.parse_setting(offset)?,
                '@' => {
                    self.pos += 1;
                    self.result.settings.french_collation = Some(true);
                }
                c if is_syntax_char(c) => {
                    return Err(RuleSyntaxError::new(
                        offset,
                        format!("unrecognized operator '{}'", c),
                    ));
                }
                _ => {
                    return Err(RuleSyntaxError::new(
                        offset,
                        "expected a reset or a relation operator",
                    ));
                }
            }
        }

        Ok(self.result)
    }

    /// &anchor, &[before N]anchor, &[first variable] ...
    fn parse_reset(&mut self, offset: usize) -> Result<()>
    {
        self.skip_whitespace();

        let mut before = None;
        let mut anchor = None;

        if self.peek() == Some('[') {
            let bracket_offset = self.pos;
            let content = self.read_bracket()?;
            let words: Vec<&str> = content.split_whitespace().collect();

            match words.as_slice() {
                ["before", level] => {
                    before = Some(Difference::from_level(level).ok_or_else(|| {
                        RuleSyntaxError::new(bracket_offset, format!("invalid level in [{}]", content))
                    })?);
                }
                _ => anchor = Some(self.special_anchor(&content, bracket_offset)?),
            }
        }

        let anchor = match anchor {
            Some(anchor) => anchor,
            None => {
                self.skip_whitespace();

                match self.peek() {
                    Some('[') => {
                        let bracket_offset = self.pos;
                        let content = self.read_bracket()?;
                        self.special_anchor(&content, bracket_offset)?
                    }
                    _ => {
                        let text = self.read_text(None)?;
                        if text.is_empty() {
                            return Err(RuleSyntaxError::new(offset, "reset without an anchor"));
                        }
                        Anchor::Text(text)
                    }
                }
            }
        };

        self.result.rules.push(TailoringRule::Reset {
            anchor,
            before,
            offset,
        });
        self.has_reset = true;

        Ok(())
    }

    fn special_anchor(&self, content: &str, offset: usize) -> Result<Anchor>
    {
        SpecialPosition::from_name(content)
            .map(Anchor::Position)
            .ok_or_else(|| {
                RuleSyntaxError::new(
                    offset,
                    format!("reset anchor references an undefined element [{}]", content),
                )
            })
    }

    /// оператор отношения и операнд (или список операндов для `<*`)
    fn parse_relation(&mut self, offset: usize) -> Result<()>
    {
        let difference = self.read_operator(offset)?;
        let is_star = self.eat('*');

        if !self.has_reset {
            return Err(RuleSyntaxError::new(
                offset,
                "relation without a preceding reset",
            ));
        }

        if is_star {
            return self.parse_star_list(difference, offset);
        }

        let mut chars = self.read_text(None)?;
        let mut prefix = String::new();

        if chars.is_empty() {
            return Err(RuleSyntaxError::new(offset, "missing operand"));
        }

        self.skip_whitespace();
        if self.eat('|') {
            prefix = chars;
            chars = self.read_text(None)?;

            if chars.is_empty() {
                return Err(RuleSyntaxError::new(offset, "missing operand after '|'"));
            }
        }

        self.skip_whitespace();
        let expansion = match self.eat('/') {
            true => {
                let expansion = self.read_text(None)?;
                if expansion.is_empty() {
                    return Err(RuleSyntaxError::new(offset, "missing expansion after '/'"));
                }
                expansion
            }
            false => String::new(),
        };

        self.result.rules.push(TailoringRule::Relation {
            difference,
            prefix,
            chars,
            expansion,
            offset,
        });

        Ok(())
    }

    fn read_operator(&mut self, offset: usize) -> Result<Difference>
    {
        let difference = match self.next() {
            Some(';') => return Ok(Difference::Secondary),
            Some(',') => return Ok(Difference::Tertiary),
            Some('=') => return Ok(Difference::Identical),
            _ => {
                let mut count = 1;
                while self.eat('<') {
                    count += 1;
                }

                match count {
                    1 => Difference::Primary,
                    2 => Difference::Secondary,
                    3 => Difference::Tertiary,
                    _ => {
                        return Err(RuleSyntaxError::new(
                            offset,
                            format!("unrecognized operator '{}'", "<".repeat(count)),
                        ));
                    }
                }
            }
        };

        Ok(difference)
    }

    /// `<*abc`, `<*a-z`: каждый кодпоинт - отдельное отношение
    fn parse_star_list(&mut self, difference: Difference, offset: usize) -> Result<()>
    {
        let mut dashes = vec![];
        let text: Vec<char> = self.read_text(Some(&mut dashes))?.chars().collect();

        if text.is_empty() {
            return Err(RuleSyntaxError::new(offset, "empty star list"));
        }

        let mut list: Vec<char> = vec![];
        let mut index = 0;

        while index < text.len() {
            if !dashes.contains(&index) {
                list.push(text[index]);
                index += 1;
                continue;
            }

            let (Some(&start), Some(&end)) = (list.last(), text.get(index + 1)) else {
                return Err(RuleSyntaxError::new(offset, "incomplete range in star list"));
            };

            if start > end {
                return Err(RuleSyntaxError::new(
                    offset,
                    format!("invalid range {}-{} in star list", start, end),
                ));
            }

            list.extend((start as u32 + 1 ..= end as u32).filter_map(char::from_u32));
            index += 2;
        }

        for c in list {
            self.result.rules.push(TailoringRule::Relation {
                difference,
                prefix: String::new(),
                chars: c.to_string(),
                expansion: String::new(),
                offset,
            });
        }

        Ok(())
    }

    /// [strength 2], [backwards 2], [alternate shifted], [caseLevel on], [normalization on]
    fn parse_setting(&mut self, offset: usize) -> Result<()>
    {
        let content = self.read_bracket()?;
        let words: Vec<&str> = content.split_whitespace().collect();
        let settings = &mut self.result.settings;

        let invalid = || RuleSyntaxError::new(offset, format!("invalid setting [{}]", content));

        match words.as_slice() {
            ["strength", value] => {
                settings.strength = Some(match *value {
                    "1" => Strength::Primary,
                    "2" => Strength::Secondary,
                    "3" => Strength::Tertiary,
                    "4" => Strength::Quaternary,
                    "I" | "i" => Strength::Identical,
                    _ => return Err(invalid()),
                });
            }
            ["backwards", "2"] => settings.french_collation = Some(true),
            ["alternate", value] => {
                settings.alternate = Some(match *value {
                    "shifted" => AlternateHandling::Shifted,
                    "non-ignorable" => AlternateHandling::NonIgnorable,
                    _ => return Err(invalid()),
                });
            }
            ["caseLevel", value] => settings.case_level = Some(parse_switch(value).ok_or_else(invalid)?),
            ["normalization", value] => {
                settings.decomposition = Some(match parse_switch(value).ok_or_else(invalid)? {
                    true => Decomposition::Canonical,
                    false => Decomposition::None,
                });
            }
            ["before", ..] => {
                return Err(RuleSyntaxError::new(offset, "[before] must follow a reset"));
            }
            _ => {
                return Err(RuleSyntaxError::new(
                    offset,
                    format!("unknown setting [{}]", content),
                ));
            }
        }

        Ok(())
    }

    /// содержимое квадратных скобок
    fn read_bracket(&mut self) -> Result<String>
    {
        let offset = self.pos;
        self.pos += 1;

        let mut content = String::new();

        loop {
            match self.next() {
                Some(']') => return Ok(content.trim().to_owned()),
                Some(c) => content.push(c),
                None => return Err(RuleSyntaxError::new(offset, "unterminated '['")),
            }
        }
    }

    /// текст операнда: кодпоинты, кавычки, экранирование. пробелы вне кавычек игнорируются,
    /// текст заканчивается на операторе или в конце строки
    ///
    /// dashes - позиции (в символах результата) `-` без кавычек, для диапазонов в списках
    fn read_text(&mut self, mut dashes: Option<&mut Vec<usize>>) -> Result<String>
    {
        let mut result = String::new();
        let mut len = 0;

        while let Some(c) = self.peek() {
            let offset = self.pos;

            match c {
                c if c.is_whitespace() => self.pos += 1,
                '\'' => {
                    self.pos += 1;
                    len += self.read_quoted(offset, &mut result)?;
                }
                '\\' => {
                    self.pos += 1;
                    result.push(self.read_escape(offset)?);
                    len += 1;
                }
                '-' if dashes.is_some() => {
                    if let Some(dashes) = dashes.as_mut() {
                        dashes.push(len);
                    }
                    self.pos += 1;
                    result.push(c);
                    len += 1;
                }
                c if OPERATORS.contains(&c) => break,
                c if is_syntax_char(c) => {
                    return Err(RuleSyntaxError::new(
                        offset,
                        format!("unrecognized operator '{}'", c),
                    ));
                }
                c => {
                    self.pos += 1;
                    result.push(c);
                    len += 1;
                }
            }
        }

        Ok(result)
    }

    /// '...' - текст в кавычках, '' - апостроф. возвращает количество добавленных символов
    fn read_quoted(&mut self, offset: usize, result: &mut String) -> Result<usize>
    {
        if self.eat('\'') {
            result.push('\'');
            return Ok(1);
        }

        let mut len = 0;

        loop {
            match self.next() {
                None => return Err(RuleSyntaxError::new(offset, "unbalanced quote")),
                Some('\'') => match self.eat('\'') {
                    true => result.push('\''),
                    false => return Ok(len),
                },
                Some(c) => result.push(c),
            }
            len += 1;
        }
    }

    /// \uXXXX, \UXXXXXXXX, \xHH, \x{H...}, \c
    fn read_escape(&mut self, offset: usize) -> Result<char>
    {
        let code = match self.next() {
            None => return Err(RuleSyntaxError::new(offset, "dangling escape")),
            Some('u') => self.read_hex(4, offset)?,
            Some('U') => self.read_hex(8, offset)?,
            Some('x') => match self.eat('{') {
                true => {
                    let mut digits = String::new();
                    loop {
                        match self.next() {
                            Some('}') => break,
                            Some(c) => digits.push(c),
                            None => return Err(RuleSyntaxError::new(offset, "unterminated '\\x{'")),
                        }
                    }
                    parse_hex(&digits, offset)?
                }
                false => self.read_hex(2, offset)?,
            },
            Some(c) => return Ok(c),
        };

        char::from_u32(code).ok_or_else(|| {
            RuleSyntaxError::new(offset, format!("invalid code point U+{:04X}", code))
        })
    }

    fn read_hex(&mut self, count: usize, offset: usize) -> Result<u32>
    {
        let end = self.pos + count;

        if end > self.chars.len() {
            return Err(RuleSyntaxError::new(offset, "truncated escape sequence"));
        }

        let digits: String = self.chars[self.pos .. end].iter().collect();
        self.pos = end;

        parse_hex(&digits, offset)
    }

    #[inline(always)]
    fn peek(&self) -> Option<char>
    {
        self.chars.get(self.pos).copied()
    }

    #[inline(always)]
    fn next(&mut self) -> Option<char>
    {
        let c = self.peek()?;
        self.pos += 1;

        Some(c)
    }

    #[inline(always)]
    fn eat(&mut self, expected: char) -> bool
    {
        match self.peek() == Some(expected) {
            true => {
                self.pos += 1;
                true
            }
            false => false,
        }
    }

    fn skip_whitespace(&mut self)
    {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }
}

fn parse_hex(digits: &str, offset: usize) -> Result<u32>
{
    // from_str_radix допускает ведущий '+'
    let valid = !digits.is_empty() && digits.len() <= 8 && digits.chars().all(|c| c.is_ascii_hexdigit());

    match valid {
        true => u32::from_str_radix(digits, 16)
            .map_err(|_| RuleSyntaxError::new(offset, format!("invalid hex escape '{}'", digits))),
        false => Err(RuleSyntaxError::new(offset, format!("invalid hex escape '{}'", digits))),
    }
}

fn parse_switch(value: &str) -> Option<bool>
{
    match value {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}
