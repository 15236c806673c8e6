use std::path::PathBuf;

use thiserror::Error;
use unicode_tables_source::SourceError;

/// ошибки подготовки таблиц: любая из них означает, что данные записывать нельзя
#[derive(Debug, Error)]
pub enum PrepareError
{
    #[error(transparent)]
    Source(#[from] SourceError),

    /// две разные последовательности комбинирования дают один и тот же путь в дереве
    #[error(
        "неоднозначная композиция {}: U+{existing:04X} или U+{conflicting:04X}",
        format_codes(.sequence)
    )]
    AmbiguousComposition
    {
        sequence: Vec<u32>,
        existing: u32,
        conflicting: u32,
    },

    /// смещение совпадает с маркером "см. расширенную таблицу" (-code)
    #[error("таблица {table}: значение для U+{code:04X} совпадает с маркером расширенной таблицы")]
    SentinelCollision
    {
        code: u32,
        table: &'static str,
    },

    /// кодпоинт, на который ссылаются данные, отсутствует в UCD
    #[error("U+{code:04X} отсутствует в UCD ({context})")]
    MissingRecord
    {
        code: u32,
        context: String,
    },

    /// последовательность комбинирования длиннее, чем может обработать процедура композиции
    #[error("композиция U+{code:04X}: длина последовательности {length}")]
    SequenceTooLong
    {
        code: u32,
        length: usize,
    },

    #[error("композиция U+{code:04X}: пустая последовательность")]
    EmptySequence
    {
        code: u32,
    },

    #[error("циклическая декомпозиция U+{code:04X}")]
    DecompositionCycle
    {
        code: u32,
    },

    /// номер строки данных не помещается в индекс
    #[error("таблица {table}: номер строки {row} не помещается в индекс")]
    RowOverflow
    {
        table: &'static str,
        row: usize,
    },

    /// кодпоинт не помещается в 16-битную таблицу кодовой страницы
    #[error("кодовая страница {code_page}: U+{code:04X} вне BMP")]
    UnmappableCodePoint
    {
        code_page: String,
        code: u32,
    },

    #[error("не удалось записать {}: {source}", .path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// последовательность кодпоинтов в виде <U+XXXX U+YYYY ...>
pub fn format_codes(codes: &[u32]) -> String
{
    let codes: Vec<String> = codes.iter().map(|code| format!("U+{:04X}", code)).collect();

    format!("<{}>", codes.join(" "))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn messages()
    {
        let error = PrepareError::AmbiguousComposition {
            sequence: vec![0x41, 0x30A],
            existing: 0xC5,
            conflicting: 0x212B,
        };

        assert_eq!(
            error.to_string(),
            "неоднозначная композиция <U+0041 U+030A>: U+00C5 или U+212B"
        );

        let error = PrepareError::SentinelCollision {
            code: 0x41,
            table: "lowercase",
        };

        assert!(error.to_string().contains("U+0041"));

        let error = PrepareError::RowOverflow {
            table: "category",
            row: 0x10000,
        };

        assert_eq!(error.to_string(), "таблица category: номер строки 65536 не помещается в индекс");
    }
}
