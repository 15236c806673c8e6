use std::path::Path;

use tracing::{debug, warn};
use unicode_tables_source::{parse_code_page, read, CodePageMapping};

use crate::pages::{Page, PageIndex};
use crate::PrepareError;

/// байт кодовой страницы, не имеющий соответствия в Unicode
pub const UNMAPPED_BYTE: u16 = 0xFFFD;
/// кодпоинт, не имеющий соответствия в кодовой странице: '?'
pub const UNMAPPED_CODE: u8 = b'?';

pub const PAGE_BITS: u32 = 8;
pub const PAGE_SIZE: usize = 1 << PAGE_BITS;

/// описание кодовой страницы: файл с соответствиями, имя таблицы, файл, в который она пишется
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePageSource
{
    pub file: &'static str,
    pub name: &'static str,
    pub group: &'static str,
}

macro_rules! code_pages {
    ($($group: literal => [$(($file: literal, $name: literal)),+ $(,)?]),+ $(,)?) => {
        &[$($(CodePageSource { file: $file, name: $name, group: $group },)+)+]
    };
}

/// кодовые страницы, для которых готовятся таблицы
pub const CATALOGUE: &[CodePageSource] = code_pages! {
    "codepages_cpx" => [
        ("cp437.txt", "Cp437"),
    ],
    "codepages_win125x" => [
        ("cp1250.txt", "Windows1250"),
        ("cp1251.txt", "Windows1251"),
        ("cp1252.txt", "Windows1252"),
        ("cp1253.txt", "Windows1253"),
        ("cp1254.txt", "Windows1254"),
        ("cp1255.txt", "Windows1255"),
        ("cp1256.txt", "Windows1256"),
        ("cp1257.txt", "Windows1257"),
        ("cp1258.txt", "Windows1258"),
    ],
    "codepages_iso8859" => [
        ("iso-8859-2.txt", "Iso_8859_2"),
        ("iso-8859-3.txt", "Iso_8859_3"),
        ("iso-8859-4.txt", "Iso_8859_4"),
        ("iso-8859-5.txt", "Iso_8859_5"),
        ("iso-8859-6.txt", "Iso_8859_6"),
        ("iso-8859-7.txt", "Iso_8859_7"),
        ("iso-8859-8.txt", "Iso_8859_8"),
        ("iso-8859-9.txt", "Iso_8859_9"),
        ("iso-8859-10.txt", "Iso_8859_10"),
        ("iso-8859-11.txt", "Iso_8859_11"),
        ("iso-8859-13.txt", "Iso_8859_13"),
        ("iso-8859-14.txt", "Iso_8859_14"),
        ("iso-8859-15.txt", "Iso_8859_15"),
        ("iso-8859-16.txt", "Iso_8859_16"),
    ],
};

/// группа, в которую дополнительно записывается ISO 8859-1
pub const ISO_8859_1_GROUP: &str = "codepages_iso8859";

/// таблицы однобайтовой кодовой страницы
#[derive(Debug, Clone)]
pub struct CodePageTable
{
    pub name: String,
    /// байт -> кодпоинт
    pub forward: Vec<u16>,
    /// кодпоинт -> байт, страницы по 256 кодпоинтов
    pub reverse: PageIndex<u8>,
}

impl CodePageTable
{
    pub fn build(name: &str, mappings: &[CodePageMapping]) -> Result<Self, PrepareError>
    {
        let mut forward = vec![UNMAPPED_BYTE; 256];
        let mut pages: Vec<Option<Vec<u8>>> = vec![];

        for mapping in mappings {
            if mapping.code > 0xFFFF {
                return Err(PrepareError::UnmappableCodePoint {
                    code_page: name.to_owned(),
                    code: mapping.code,
                });
            }

            forward[mapping.byte as usize] = mapping.code as u16;

            let page = (mapping.code >> PAGE_BITS) as usize;

            if pages.len() <= page {
                pages.resize(page + 1, None);
            }

            let values = pages[page].get_or_insert_with(|| vec![UNMAPPED_CODE; PAGE_SIZE]);
            values[mapping.code as usize & (PAGE_SIZE - 1)] = mapping.byte;
        }

        let mut reverse = PageIndex::new(PAGE_BITS, undefined_page());

        for (page, values) in pages.into_iter().enumerate() {
            if let Some(values) = values {
                reverse.insert(page as u32, Page::new(values));
            }
        }

        debug!(
            "{}: страниц обратной таблицы {}, уникальных {}",
            name,
            reverse.index().len(),
            reverse.slots_count()
        );

        Ok(Self {
            name: name.to_owned(),
            forward,
            reverse,
        })
    }

    /// ISO 8859-1: байты 0-255 соответствуют U+0000-U+00FF
    pub fn iso_8859_1() -> Self
    {
        let mut reverse = PageIndex::new(PAGE_BITS, undefined_page());
        reverse.insert(0, Page::new((0 ..= 255).collect()));

        Self {
            name: "Iso_8859_1".to_owned(),
            forward: (0 ..= 255).collect(),
            reverse,
        }
    }

    #[inline]
    pub fn to_unicode(&self, byte: u8) -> u16
    {
        self.forward[byte as usize]
    }

    #[inline]
    pub fn from_unicode(&self, code: u32) -> u8
    {
        self.reverse.get(code)
    }
}

/// страница, все кодпоинты которой отображаются в '?'
pub fn undefined_page() -> Page<u8>
{
    Page::filled(UNMAPPED_CODE, PAGE_SIZE)
}

/// таблицы кодовых страниц, сгруппированные по файлам вывода.
/// отсутствующие файлы пропускаются с предупреждением
pub fn load(dir: &Path) -> Result<Vec<(&'static str, Vec<CodePageTable>)>, PrepareError>
{
    let mut groups: Vec<(&'static str, Vec<CodePageTable>)> = vec![];

    for source in CATALOGUE {
        let path = dir.join(source.file);

        if !path.exists() {
            warn!("{}: файл не найден, таблица {} пропущена", path.display(), source.name);
            continue;
        }

        let data = read(&path)?;
        let table = CodePageTable::build(source.name, &parse_code_page(source.file, &data)?)?;

        match groups.iter_mut().find(|(group, _)| *group == source.group) {
            Some((_, tables)) => tables.push(table),
            None => groups.push((source.group, vec![table])),
        }
    }

    match groups.iter_mut().find(|(group, _)| *group == ISO_8859_1_GROUP) {
        Some((_, tables)) => tables.insert(0, CodePageTable::iso_8859_1()),
        None => groups.push((ISO_8859_1_GROUP, vec![CodePageTable::iso_8859_1()])),
    }

    Ok(groups)
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn mapping(byte: u8, code: u32) -> CodePageMapping
    {
        CodePageMapping { byte, code }
    }

    #[test]
    fn forward_and_reverse()
    {
        let mappings = [mapping(0x41, 0x41), mapping(0x80, 0x20AC), mapping(0x8A, 0x160), mapping(0xE9, 0xE9)];
        let table = CodePageTable::build("Windows1252", &mappings).unwrap();

        for m in mappings.iter() {
            assert_eq!(table.to_unicode(m.byte) as u32, m.code);
            assert_eq!(table.from_unicode(m.code), m.byte);
        }

        assert_eq!(table.to_unicode(0x81), UNMAPPED_BYTE);
        assert_eq!(table.from_unicode(0x42), UNMAPPED_CODE);
        assert_eq!(table.from_unicode(0x20AD), UNMAPPED_CODE);
        assert_eq!(table.from_unicode(0x10000), UNMAPPED_CODE);

        // страницы 0x00, 0x01, 0x20
        assert_eq!(table.reverse.index().len(), 0x21);
        assert_eq!(table.reverse.slots_count(), 4);
    }

    #[test]
    fn outside_bmp()
    {
        assert!(matches!(
            CodePageTable::build("broken", &[mapping(0x41, 0x10400)]),
            Err(PrepareError::UnmappableCodePoint { code: 0x10400, .. })
        ));
    }

    #[test]
    fn iso_8859_1()
    {
        let table = CodePageTable::iso_8859_1();

        for byte in 0 ..= 255u8 {
            assert_eq!(table.to_unicode(byte), byte as u16);
            assert_eq!(table.from_unicode(byte as u32), byte);
        }

        assert_eq!(table.from_unicode(0x100), UNMAPPED_CODE);
    }

    #[test]
    fn catalogue()
    {
        assert_eq!(CATALOGUE.len(), 24);
        assert!(CATALOGUE.iter().all(|source| source.file.ends_with(".txt")));
        assert!(!CATALOGUE.iter().any(|source| source.file == "iso-8859-12.txt"));
        assert_eq!(CATALOGUE[0].group, "codepages_cpx");
    }
}
