use std::collections::BTreeMap;

use crate::error::parse_code;
use crate::lines::data_lines;
use crate::properties::*;
use crate::SourceError;

const FILE: &str = "UnicodeData.txt";

/// разбор UnicodeData.txt из UCD и составление таблицы свойств символов Unicode
///
/// диапазоны (<..., First> - <..., Last>) разворачиваются: каждый кодпоинт диапазона получает
/// свойства первой записи. в отличие от нормализации, для категорий важны все диапазоны,
/// включая суррогаты и области для приватного использования
pub fn parse_unicode_data(data: &str) -> Result<BTreeMap<u32, Codepoint>, SourceError>
{
    let mut map: BTreeMap<u32, Codepoint> = BTreeMap::new();

    // пригодится, когда встретим диапазоны
    let mut range_start: Option<Codepoint> = None;

    for (line_number, line) in data_lines(data) {
        let codepoint =
            parse_line(line).map_err(|e| SourceError::malformed(FILE, line_number, e))?;

        if let Some(group) = range_start.take() {
            if !codepoint.name.ends_with("Last>") || codepoint.code < group.code {
                return Err(SourceError::malformed(
                    FILE,
                    line_number,
                    format!("после {} ожидалось окончание диапазона", group.name),
                ));
            }

            // названия символов диапазона для нас не важны, оставляем название группы
            let group_name = group
                .name
                .trim_start_matches('<')
                .trim_end_matches(", First>")
                .to_owned();

            for code in group.code ..= codepoint.code {
                let mut entry = group.clone();

                entry.code = code;
                entry.name = group_name.clone();

                map.insert(code, entry);
            }

            continue;
        }

        if codepoint.name.starts_with('<') && codepoint.name.ends_with("First>") {
            range_start = Some(codepoint);
            continue;
        }

        map.insert(codepoint.code, codepoint);
    }

    if let Some(group) = range_start {
        return Err(SourceError::malformed(
            FILE,
            data.lines().count(),
            format!("диапазон {} не закрыт", group.name),
        ));
    }

    Ok(map)
}

/// разбор одной строки UnicodeData.txt
fn parse_line(line: &str) -> Result<Codepoint, SourceError>
{
    let props: Vec<&str> = line.split(';').collect();

    if props.len() < 15 {
        return Err(SourceError::UnknownPropertyValue(line.to_owned()));
    }

    // код и название
    let code = parse_code(props[0])?;
    let name = props[1].to_owned();

    // категория и CCC
    let gc = GeneralCategory::try_from(props[2])?;
    let ccc = CanonicalCombiningClass::try_from(props[3])?;

    // декомпозиция и тег декомпозиции
    let decomposition = Decomposition::try_from(props[5])?;

    // связанные символы в другом регистре (если есть)
    let simple_uppercase_mapping = parse_mapping(props[12])?;
    let simple_lowercase_mapping = parse_mapping(props[13])?;
    let simple_titlecase_mapping = parse_mapping(props[14])?;

    // пропускаем bidi-свойства (4, 9), числовые значения (6, 7, 8) и устаревшие колонки 10, 11:
    //
    // * Unicode_1_Name (Obsolete as of 6.2.0)
    // * ISO_Comment (Obsolete as of 5.2.0; Deprecated and Stabilized as of 6.0.0)

    Ok(Codepoint {
        code,
        name,
        gc,
        ccc,
        decomposition_tag: decomposition.tag,
        decomposition: decomposition.codes,
        simple_uppercase_mapping,
        simple_lowercase_mapping,
        simple_titlecase_mapping,
    })
}

/// простое преобразование регистра: пустое поле - преобразования нет
fn parse_mapping(value: &str) -> Result<Option<u32>, SourceError>
{
    let value = value.trim();

    match value.is_empty() {
        true => Ok(None),
        false => Ok(Some(parse_code(value)?)),
    }
}
