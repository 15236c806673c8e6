use std::collections::BTreeMap;

use crate::error::{parse_code, parse_codes};
use crate::lines::{data_lines, fields};
use crate::SourceError;

const FILE: &str = "CaseFolding.txt";

/// статус записи CaseFolding.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFoldingStatus
{
    /// C - общее преобразование, используется и в простом, и в полном варианте
    Common,
    /// F - полное преобразование (в несколько кодпоинтов)
    Full,
    /// S - простое преобразование, если для кодпоинта есть полное
    Simple,
    /// T - специальные случаи для тюркских языков
    Turkic,
}

impl TryFrom<&str> for CaseFoldingStatus
{
    type Error = SourceError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value {
            "C" => Self::Common,
            "F" => Self::Full,
            "S" => Self::Simple,
            "T" => Self::Turkic,
            _ => return Err(SourceError::UnknownPropertyValue(value.to_owned())),
        })
    }
}

/// запись CaseFolding.txt
#[derive(Debug, Clone, PartialEq)]
pub struct CaseFolding
{
    pub code: u32,
    pub status: CaseFoldingStatus,
    pub mapping: Vec<u32>,
    /// номер строки в CaseFolding.txt
    pub line: usize,
}

/// разбор CaseFolding.txt
pub fn parse_case_folding(data: &str) -> Result<Vec<CaseFolding>, SourceError>
{
    let mut result = vec![];

    for (line_number, line) in data_lines(data) {
        let entry = parse_line(line_number, line).map_err(|e| SourceError::malformed(FILE, line_number, e))?;

        result.push(entry);
    }

    Ok(result)
}

/// полная свертка регистра: объединение записей C и F, записи S и T отбрасываются
pub fn full_case_folding(entries: &[CaseFolding]) -> Result<BTreeMap<u32, Vec<u32>>, SourceError>
{
    let mut map = BTreeMap::new();

    for entry in entries {
        if !matches!(entry.status, CaseFoldingStatus::Common | CaseFoldingStatus::Full) {
            continue;
        }

        if map.insert(entry.code, entry.mapping.clone()).is_some() {
            return Err(SourceError::malformed(
                FILE,
                entry.line,
                format!("повторная свертка регистра для U+{:04X}", entry.code),
            ));
        }
    }

    Ok(map)
}

fn parse_line(line_number: usize, line: &str) -> Result<CaseFolding, SourceError>
{
    let fields = fields(line);

    if fields.len() < 3 {
        return Err(SourceError::UnknownPropertyValue(line.to_owned()));
    }

    let code = parse_code(fields[0])?;
    let status = CaseFoldingStatus::try_from(fields[1])?;
    let mapping = parse_codes(fields[2])?;

    if mapping.is_empty() {
        return Err(SourceError::UnknownPropertyValue(line.to_owned()));
    }

    Ok(CaseFolding {
        code,
        status,
        mapping,
        line: line_number,
    })
}
