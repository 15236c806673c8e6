use std::path::PathBuf;

use thiserror::Error;

/// ошибки разбора файлов UCD и таблиц кодовых страниц
#[derive(Debug, Error)]
pub enum SourceError
{
    /// значение свойства не соответствует ни одному известному варианту
    #[error("неизвестное значение свойства: {0:?}")]
    UnknownPropertyValue(String),

    /// не удалось разобрать кодпоинт
    #[error("некорректный кодпоинт: {0:?}")]
    InvalidCodepoint(String),

    /// строка файла данных не соответствует формату
    #[error("{file}, строка {line}: {reason}")]
    MalformedLine
    {
        file: &'static str,
        line: usize,
        reason: String,
    },

    /// ошибка чтения файла
    #[error("не удалось прочитать {}: {source}", .path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError
{
    /// ошибка в строке файла с указанием причины
    pub fn malformed(file: &'static str, line: usize, reason: impl ToString) -> Self
    {
        Self::MalformedLine {
            file,
            line,
            reason: reason.to_string(),
        }
    }
}

/// разобрать кодпоинт, записанный в шестнадцатеричном виде
pub fn parse_code(value: &str) -> Result<u32, SourceError>
{
    let value = value.trim();
    let value = value.strip_prefix("0x").unwrap_or(value);

    match u32::from_str_radix(value, 16) {
        Ok(code) if code <= 0x10FFFF => Ok(code),
        _ => Err(SourceError::InvalidCodepoint(value.to_owned())),
    }
}

/// разобрать последовательность кодпоинтов, разделенных пробелами
pub fn parse_codes(value: &str) -> Result<Vec<u32>, SourceError>
{
    value.split_whitespace().map(parse_code).collect()
}
