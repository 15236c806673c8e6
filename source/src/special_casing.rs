use crate::error::{parse_code, parse_codes};
use crate::lines::{data_lines, fields};
use crate::SourceError;

const FILE: &str = "SpecialCasing.txt";

/// запись SpecialCasing.txt: преобразования регистра в несколько кодпоинтов
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialCasing
{
    pub code: u32,
    pub lowercase: Vec<u32>,
    pub titlecase: Vec<u32>,
    pub uppercase: Vec<u32>,
    /// условия применения (язык, контекст), None - безусловное преобразование
    pub condition: Option<String>,
}

impl SpecialCasing
{
    #[inline]
    pub fn is_unconditional(&self) -> bool
    {
        self.condition.is_none()
    }
}

/// разбор SpecialCasing.txt
pub fn parse_special_casing(data: &str) -> Result<Vec<SpecialCasing>, SourceError>
{
    let mut result = vec![];

    for (line_number, line) in data_lines(data) {
        let entry = parse_line(line).map_err(|e| SourceError::malformed(FILE, line_number, e))?;

        result.push(entry);
    }

    Ok(result)
}

// <code>; <lower>; <title>; <upper>; (<condition_list>;)?
fn parse_line(line: &str) -> Result<SpecialCasing, SourceError>
{
    let fields = fields(line);

    if fields.len() < 4 {
        return Err(SourceError::UnknownPropertyValue(line.to_owned()));
    }

    let condition = match fields.get(4) {
        Some(condition) if !condition.is_empty() => Some(condition.to_string()),
        _ => None,
    };

    Ok(SpecialCasing {
        code: parse_code(fields[0])?,
        lowercase: parse_codes(fields[1])?,
        titlecase: parse_codes(fields[2])?,
        uppercase: parse_codes(fields[3])?,
        condition,
    })
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn conditions()
    {
        let data = "\
00DF; 00DF; 0053 0073; 0053 0053; # LATIN SMALL LETTER SHARP S
03A3; 03C2; 03A3; 03A3; Final_Sigma; # GREEK CAPITAL LETTER SIGMA
0069; 0069; 0130; 0130; tr; # LATIN SMALL LETTER I
";
        let entries = parse_special_casing(data).unwrap();

        assert_eq!(entries.len(), 3);

        assert!(entries[0].is_unconditional());
        assert_eq!(entries[0].titlecase, vec![0x53, 0x73]);
        assert_eq!(entries[0].uppercase, vec![0x53, 0x53]);

        assert_eq!(entries[1].condition.as_deref(), Some("Final_Sigma"));
        assert_eq!(entries[2].condition.as_deref(), Some("tr"));
    }
}
