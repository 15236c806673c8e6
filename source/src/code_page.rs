use crate::error::parse_code;
use crate::lines::data_lines;
use crate::SourceError;

/// соответствие байта кодовой страницы кодпоинту Unicode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePageMapping
{
    pub byte: u8,
    pub code: u32,
}

/// разбор файла соответствий кодовой страницы (формат unicode.org/Public/MAPPINGS):
///     0x80	0x20AC	#EURO SIGN
/// байты без соответствия (неопределенные) пропускаются
pub fn parse_code_page(file: &'static str, data: &str) -> Result<Vec<CodePageMapping>, SourceError>
{
    let mut result = vec![];

    for (line_number, line) in data_lines(data) {
        let mut values = line.split_whitespace();

        let byte = match values.next().map(parse_code) {
            Some(Ok(byte)) if byte <= 0xFF => byte as u8,
            _ => return Err(SourceError::malformed(file, line_number, "некорректный байт")),
        };

        let code = match values.next() {
            Some(code) => parse_code(code).map_err(|e| SourceError::malformed(file, line_number, e))?,
            None => continue,
        };

        result.push(CodePageMapping { byte, code });
    }

    Ok(result)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn skips_undefined_bytes()
    {
        let data = "\
#    Name:     cp1252 to Unicode table
0x41\t0x0041\t#LATIN CAPITAL LETTER A
0x80\t0x20AC\t#EURO SIGN
0x81\t      \t#UNDEFINED
";
        let mappings = parse_code_page("cp1252.txt", data).unwrap();

        assert_eq!(
            mappings,
            vec![
                CodePageMapping { byte: 0x41, code: 0x41 },
                CodePageMapping { byte: 0x80, code: 0x20AC },
            ]
        );
    }

    #[test]
    fn byte_out_of_range()
    {
        assert!(parse_code_page("broken.txt", "0x100\t0x0041\n").is_err());
    }
}
